//! Query parameters accepted by listing endpoints.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::CodeListFilter;

/// Accepted values of the `type` filter; empty means "no filter".
static TYPE_FILTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(geography|non-geography)?$").unwrap());

/// Query string of `GET /code-lists`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CodeListQuery {
    #[serde(rename = "type")]
    #[validate(regex(path = "*TYPE_FILTER_REGEX"))]
    pub code_list_type: Option<String>,
}

impl CodeListQuery {
    /// Filter selected by the query. Call after [`Validate::validate`].
    pub fn filter(&self) -> CodeListFilter {
        CodeListFilter::from_type(self.code_list_type.as_deref()).unwrap_or_default()
    }
}
