//! Code record.

/// One value inside an edition of a code list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    pub id: String,
    pub code_list_id: String,
    pub edition_id: String,
    pub code: String,
    pub label: String,
}

impl CodeRecord {
    pub fn new(
        id: impl Into<String>,
        code_list_id: impl Into<String>,
        edition_id: impl Into<String>,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code_list_id: code_list_id.into(),
            edition_id: edition_id.into(),
            code: code.into(),
            label: label.into(),
        }
    }
}
