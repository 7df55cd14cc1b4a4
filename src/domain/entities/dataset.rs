//! Datasets that reference a code.

/// A dataset using a code as one of its dimension options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDatasetRecord {
    pub dataset_id: String,
    /// Name of the dataset dimension the code list is bound to.
    pub dimension_name: String,
    pub dimension_label: String,
    pub editions: Vec<DatasetEditionRecord>,
}

/// A dataset edition together with its most recent published version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEditionRecord {
    pub edition: String,
    pub latest_version: String,
}
