//! Datasets that use a code, with links into the dataset API.

use serde::Serialize;

use super::link::{Link, LinkError, require};
use super::result_set::ResultSet;
use crate::domain::entities::{CodeDatasetRecord, DatasetEditionRecord};

/// A dataset in which a code appears as a dimension option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub id: String,
    pub dimension_label: String,
    pub editions: Vec<DatasetEdition>,
    /// Dimension the code list is bound to; only used to build links.
    #[serde(skip)]
    pub dimension_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<DatasetLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetEdition {
    pub edition: String,
    pub latest_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<DatasetEditionLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEditionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub latest_version: Link,
    pub dataset_dimension: Link,
}

/// Collection of datasets using one code.
pub type DatasetResults = ResultSet<Dataset>;

impl From<DatasetEditionRecord> for DatasetEdition {
    fn from(record: DatasetEditionRecord) -> Self {
        Self {
            edition: record.edition,
            latest_version: record.latest_version,
            links: None,
        }
    }
}

impl From<CodeDatasetRecord> for Dataset {
    fn from(record: CodeDatasetRecord) -> Self {
        Self {
            id: record.dataset_id,
            dimension_label: record.dimension_label,
            editions: record.editions.into_iter().map(DatasetEdition::from).collect(),
            dimension_name: record.dimension_name,
            links: None,
        }
    }
}

impl Dataset {
    /// Converts a store record; absent input yields an empty dataset.
    pub fn from_record(record: Option<CodeDatasetRecord>) -> Self {
        record.map(Self::from).unwrap_or_default()
    }

    /// Returns this dataset, and each of its editions, with links into the
    /// dataset API at `dataset_api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingIdentifier`] if the dataset has no id, or
    /// if one of its editions lacks an edition, a latest version or the
    /// dimension name its links point into.
    pub fn with_links(self, dataset_api_url: &str) -> Result<Self, LinkError> {
        require("dataset id", &self.id)?;

        let dataset_href = format!("{dataset_api_url}/datasets/{}", self.id);
        let editions = self
            .editions
            .into_iter()
            .map(|edition| {
                require("dataset edition", &edition.edition)?;
                require("latest version", &edition.latest_version)?;
                require("dimension name", &self.dimension_name)?;

                let edition_href = format!("{dataset_href}/editions/{}", edition.edition);
                let version_href = format!("{edition_href}/versions/{}", edition.latest_version);
                let links = DatasetEditionLinks {
                    self_link: Link::with_id(&edition.edition, edition_href),
                    latest_version: Link::with_id(&edition.latest_version, version_href.clone()),
                    dataset_dimension: Link::with_id(
                        &self.dimension_name,
                        format!("{version_href}/dimensions/{}", self.dimension_name),
                    ),
                };
                Ok(DatasetEdition {
                    links: Some(links),
                    ..edition
                })
            })
            .collect::<Result<Vec<_>, LinkError>>()?;

        Ok(Self {
            links: Some(DatasetLinks {
                self_link: Link::with_id(&self.id, dataset_href),
            }),
            editions,
            ..self
        })
    }
}
