//! Edition record.

/// A dated snapshot of a code list.
///
/// `id` addresses the edition in URLs; `edition` is the label/version token
/// the publisher assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionRecord {
    pub id: String,
    pub code_list_id: String,
    pub edition: String,
    pub label: String,
    pub release_date: String,
}
