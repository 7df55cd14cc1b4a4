//! Public representation of a code-list edition.

use serde::Serialize;

use super::link::{Link, LinkError, codes_href, edition_href, editions_href, require};
use super::result_set::ResultSet;
use crate::domain::entities::EditionRecord;

/// An edition as exposed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Edition {
    pub id: String,
    pub edition: String,
    pub label: String,
    pub release_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<EditionLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub editions: Link,
    pub codes: Link,
}

/// Collection of editions of one code list.
pub type EditionResults = ResultSet<Edition>;

impl From<EditionRecord> for Edition {
    fn from(record: EditionRecord) -> Self {
        Self {
            id: record.id,
            edition: record.edition,
            label: record.label,
            release_date: record.release_date,
            links: None,
        }
    }
}

impl Edition {
    /// Converts a store record; absent input yields an empty edition.
    pub fn from_record(record: Option<EditionRecord>) -> Self {
        record.map(Self::from).unwrap_or_default()
    }

    /// Builds the links of this edition within `code_list_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the edition has no id.
    pub fn build_links(
        &self,
        api_url: &str,
        code_list_id: &str,
    ) -> Result<EditionLinks, LinkError> {
        require("edition id", &self.id)?;

        Ok(EditionLinks {
            self_link: Link::with_id(&self.id, edition_href(api_url, code_list_id, &self.id)),
            editions: Link::new(editions_href(api_url, code_list_id)),
            codes: Link::new(codes_href(api_url, code_list_id, &self.id)),
        })
    }

    /// Returns this edition with its links attached.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the edition has no id.
    pub fn with_links(self, api_url: &str, code_list_id: &str) -> Result<Self, LinkError> {
        let links = self.build_links(api_url, code_list_id)?;
        Ok(Self {
            links: Some(links),
            ..self
        })
    }
}
