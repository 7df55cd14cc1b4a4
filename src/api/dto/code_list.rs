//! Public representation of a code list.

use serde::Serialize;

use super::link::{Link, LinkError, code_list_href, editions_href, require};
use super::result_set::ResultSet;
use crate::domain::entities::CodeListRecord;

/// A code list as exposed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeList {
    pub id: String,
    #[serde(rename = "number_of_results", skip_serializing_if = "Option::is_none")]
    pub number_of_codes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<CodeListLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeListLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub editions: Link,
}

/// Collection of code lists.
pub type CodeListResults = ResultSet<CodeList>;

impl From<CodeListRecord> for CodeList {
    fn from(record: CodeListRecord) -> Self {
        Self {
            id: record.id,
            number_of_codes: record.number_of_codes,
            links: None,
        }
    }
}

impl CodeList {
    /// Converts a store record; absent input yields an empty code list.
    pub fn from_record(record: Option<CodeListRecord>) -> Self {
        record.map(Self::from).unwrap_or_default()
    }

    /// Builds the links of this code list.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the code list has no id.
    pub fn build_links(&self, api_url: &str) -> Result<CodeListLinks, LinkError> {
        require("code list id", &self.id)?;

        Ok(CodeListLinks {
            self_link: Link::with_id(&self.id, code_list_href(api_url, &self.id)),
            editions: Link::new(editions_href(api_url, &self.id)),
        })
    }

    /// Returns this code list with its links attached.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the code list has no id.
    pub fn with_links(self, api_url: &str) -> Result<Self, LinkError> {
        let links = self.build_links(api_url)?;
        Ok(Self {
            links: Some(links),
            ..self
        })
    }
}
