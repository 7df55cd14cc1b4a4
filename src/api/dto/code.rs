//! Public representation of a code.

use serde::Serialize;

use super::link::{Link, LinkError, code_datasets_href, code_href, code_list_href, require};
use super::result_set::ResultSet;
use crate::domain::entities::CodeRecord;

/// A code as exposed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Code {
    pub id: String,
    pub code: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<CodeLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Points at the parent code list, so it carries no id.
    pub code_list: Link,
    pub datasets: Link,
}

/// Collection of codes of one edition.
pub type CodeResults = ResultSet<Code>;

impl From<CodeRecord> for Code {
    fn from(record: CodeRecord) -> Self {
        Self {
            id: record.id,
            code: record.code,
            label: record.label,
            links: None,
        }
    }
}

impl Code {
    /// Converts a store record; absent input yields an empty code.
    pub fn from_record(record: Option<CodeRecord>) -> Self {
        record.map(Self::from).unwrap_or_default()
    }

    /// Builds the links of this code within `code_list_id` / `edition`.
    ///
    /// Only the code id is checked; the parent identifiers come straight from
    /// the request path.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the code has no id.
    pub fn build_links(
        &self,
        api_url: &str,
        code_list_id: &str,
        edition: &str,
    ) -> Result<CodeLinks, LinkError> {
        require("code id", &self.id)?;

        Ok(CodeLinks {
            self_link: Link::with_id(&self.id, code_href(api_url, code_list_id, edition, &self.id)),
            code_list: Link::new(code_list_href(api_url, code_list_id)),
            datasets: Link::new(code_datasets_href(api_url, code_list_id, edition, &self.id)),
        })
    }

    /// Returns this code with its links attached.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the code has no id.
    pub fn with_links(
        self,
        api_url: &str,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Self, LinkError> {
        let links = self.build_links(api_url, code_list_id, edition)?;
        Ok(Self {
            links: Some(links),
            ..self
        })
    }
}
