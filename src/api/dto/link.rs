//! Hypermedia links and canonical resource URLs.
//!
//! Every href is derived from resource identifiers and an API base URL that
//! the caller passes in. Path segments are joined verbatim: identifiers are
//! validated as URL-safe where they enter the system
//! (see [`crate::utils::identifier`]).

use serde::Serialize;

/// A typed hyperlink. `id` is set only when the target is itself an
/// addressable resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            id: None,
            href: href.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            href: href.into(),
        }
    }
}

/// Failure to build the links of a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("unable to create links - {field} not provided")]
    MissingIdentifier { field: &'static str },
}

/// Fails with [`LinkError::MissingIdentifier`] when `value` is empty.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), LinkError> {
    if value.is_empty() {
        return Err(LinkError::MissingIdentifier { field });
    }
    Ok(())
}

pub fn code_lists_href(api_url: &str) -> String {
    format!("{api_url}/code-lists")
}

pub fn code_list_href(api_url: &str, code_list_id: &str) -> String {
    format!("{}/{code_list_id}", code_lists_href(api_url))
}

pub fn editions_href(api_url: &str, code_list_id: &str) -> String {
    format!("{}/editions", code_list_href(api_url, code_list_id))
}

pub fn edition_href(api_url: &str, code_list_id: &str, edition: &str) -> String {
    format!("{}/{edition}", editions_href(api_url, code_list_id))
}

pub fn codes_href(api_url: &str, code_list_id: &str, edition: &str) -> String {
    format!("{}/codes", edition_href(api_url, code_list_id, edition))
}

pub fn code_href(api_url: &str, code_list_id: &str, edition: &str, code: &str) -> String {
    format!("{}/{code}", codes_href(api_url, code_list_id, edition))
}

pub fn code_datasets_href(api_url: &str, code_list_id: &str, edition: &str, code: &str) -> String {
    format!("{}/datasets", code_href(api_url, code_list_id, edition, code))
}
