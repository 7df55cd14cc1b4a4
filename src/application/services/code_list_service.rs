//! Code-list catalogue service.

use std::sync::Arc;

use serde_json::json;

use crate::api::dto::{
    Code, CodeList, CodeListResults, CodeResults, DatasetResults, Edition, EditionResults,
};
use crate::config::ApiUrls;
use crate::domain::entities::CodeListFilter;
use crate::domain::repositories::CodeListRepository;
use crate::error::AppError;

/// Serves public representations of code lists, editions and codes.
///
/// Each call looks the data up in the store, converts the records, attaches
/// links built from the configured base URLs and, for collections, fills in
/// the count fields. A record that cannot be linked fails the whole call.
pub struct CodeListService<R: CodeListRepository + ?Sized> {
    repository: Arc<R>,
    urls: ApiUrls,
}

impl<R: CodeListRepository + ?Sized> CodeListService<R> {
    /// Creates a new code-list service.
    pub fn new(repository: Arc<R>, urls: ApiUrls) -> Self {
        Self { repository, urls }
    }

    /// Lists code lists, optionally restricted to geography or
    /// non-geography lists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_code_lists(&self, filter: CodeListFilter) -> Result<CodeListResults, AppError> {
        let records = self.repository.list_code_lists(filter).await?;

        let code_lists = CodeListResults::from_records(Some(records))
            .try_map_items(|item| item.with_links(&self.urls.code_list_api))?
            .with_counts();

        Ok(code_lists)
    }

    /// Retrieves a single code list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code list does not exist.
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_code_list(&self, id: &str) -> Result<CodeList, AppError> {
        let record = self.repository.find_code_list(id).await?;
        if record.is_none() {
            return Err(code_list_not_found(id));
        }

        Ok(CodeList::from_record(record).with_links(&self.urls.code_list_api)?)
    }

    /// Lists the editions of a code list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code list does not exist.
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_editions(&self, code_list_id: &str) -> Result<EditionResults, AppError> {
        self.ensure_code_list(code_list_id).await?;

        let records = self.repository.list_editions(code_list_id).await?;

        let editions = EditionResults::from_records(Some(records))
            .try_map_items(|item| item.with_links(&self.urls.code_list_api, code_list_id))?
            .with_counts();

        Ok(editions)
    }

    /// Retrieves one edition of a code list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the edition does not exist.
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_edition(&self, code_list_id: &str, edition: &str) -> Result<Edition, AppError> {
        let record = self.repository.find_edition(code_list_id, edition).await?;
        if record.is_none() {
            return Err(edition_not_found(code_list_id, edition));
        }

        Ok(Edition::from_record(record).with_links(&self.urls.code_list_api, code_list_id)?)
    }

    /// Lists the codes of an edition.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the edition does not exist.
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_codes(&self, code_list_id: &str, edition: &str) -> Result<CodeResults, AppError> {
        self.ensure_edition(code_list_id, edition).await?;

        let records = self.repository.list_codes(code_list_id, edition).await?;

        let codes = CodeResults::from_records(Some(records))
            .try_map_items(|item| {
                item.with_links(&self.urls.code_list_api, code_list_id, edition)
            })?
            .with_counts();

        Ok(codes)
    }

    /// Retrieves a single code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_code(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Code, AppError> {
        let record = self.repository.find_code(code_list_id, edition, code).await?;
        if record.is_none() {
            return Err(code_not_found(code_list_id, edition, code));
        }

        Ok(Code::from_record(record).with_links(&self.urls.code_list_api, code_list_id, edition)?)
    }

    /// Lists the datasets that use a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] on store or link errors.
    pub async fn get_code_datasets(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<DatasetResults, AppError> {
        if self
            .repository
            .find_code(code_list_id, edition, code)
            .await?
            .is_none()
        {
            return Err(code_not_found(code_list_id, edition, code));
        }

        let records = self
            .repository
            .list_code_datasets(code_list_id, edition, code)
            .await?;

        let datasets = DatasetResults::from_records(Some(records))
            .try_map_items(|item| item.with_links(&self.urls.dataset_api))?
            .with_counts();

        Ok(datasets)
    }

    /// Checks that the store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn ensure_code_list(&self, code_list_id: &str) -> Result<(), AppError> {
        match self.repository.find_code_list(code_list_id).await? {
            Some(_) => Ok(()),
            None => Err(code_list_not_found(code_list_id)),
        }
    }

    async fn ensure_edition(&self, code_list_id: &str, edition: &str) -> Result<(), AppError> {
        match self.repository.find_edition(code_list_id, edition).await? {
            Some(_) => Ok(()),
            None => Err(edition_not_found(code_list_id, edition)),
        }
    }
}

fn code_list_not_found(id: &str) -> AppError {
    AppError::not_found("Code list not found", json!({ "code_list_id": id }))
}

fn edition_not_found(code_list_id: &str, edition: &str) -> AppError {
    AppError::not_found(
        "Edition not found",
        json!({ "code_list_id": code_list_id, "edition": edition }),
    )
}

fn code_not_found(code_list_id: &str, edition: &str, code: &str) -> AppError {
    AppError::not_found(
        "Code not found",
        json!({ "code_list_id": code_list_id, "edition": edition, "code": code }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        CodeDatasetRecord, CodeListRecord, CodeRecord, DatasetEditionRecord, EditionRecord,
    };
    use crate::domain::repositories::MockCodeListRepository;

    fn urls() -> ApiUrls {
        ApiUrls {
            code_list_api: "host1".to_string(),
            dataset_api: "datasets1".to_string(),
        }
    }

    fn edition_record(id: &str) -> EditionRecord {
        EditionRecord {
            id: id.to_string(),
            code_list_id: "codelist1".to_string(),
            edition: id.to_string(),
            label: format!("Edition {id}"),
            release_date: "2021-03-21".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_codes_single_item() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_edition()
            .withf(|cl, ed| cl == "codelist1" && ed == "edition1")
            .times(1)
            .returning(|_, _| Ok(Some(edition_record("edition1"))));

        mock_repo
            .expect_list_codes()
            .times(1)
            .returning(|_, _| {
                Ok(vec![CodeRecord::new(
                    "testID", "codelist1", "edition1", "testCode", "testLabel",
                )])
            });

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let codes = service.get_codes("codelist1", "edition1").await.unwrap();

        assert_eq!(codes.count, 1);
        assert_eq!(codes.limit, 1);
        assert_eq!(codes.total_count, 1);

        let links = codes.items[0].links.as_ref().unwrap();
        assert_eq!(
            links.self_link.href,
            "host1/code-lists/codelist1/editions/edition1/codes/testID"
        );
        assert_eq!(links.code_list.href, "host1/code-lists/codelist1");
        assert!(links.code_list.id.is_none());
    }

    #[tokio::test]
    async fn test_get_codes_edition_not_found() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_edition()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_list_codes().never();

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service.get_codes("codelist1", "missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_codes_empty_id_is_internal_error() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_edition()
            .returning(|_, _| Ok(Some(edition_record("edition1"))));
        mock_repo.expect_list_codes().returning(|_, _| {
            Ok(vec![
                CodeRecord::new("a", "codelist1", "edition1", "A", "Ay"),
                CodeRecord::new("", "codelist1", "edition1", "B", "Bee"),
            ])
        });

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service.get_codes("codelist1", "edition1").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_code_success() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_code()
            .withf(|cl, ed, code| cl == "codelist1" && ed == "edition1" && code == "testID")
            .times(1)
            .returning(|_, _, _| {
                Ok(Some(CodeRecord::new(
                    "testID", "codelist1", "edition1", "testCode", "testLabel",
                )))
            });

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let code = service.get_code("codelist1", "edition1", "testID").await.unwrap();

        assert_eq!(code.code, "testCode");
        assert_eq!(
            code.links.unwrap().datasets.href,
            "host1/code-lists/codelist1/editions/edition1/codes/testID/datasets"
        );
    }

    #[tokio::test]
    async fn test_get_code_not_found() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_code()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service.get_code("codelist1", "edition1", "nope").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_code_lists_preserves_order_and_counts() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_list_code_lists()
            .withf(|filter| *filter == CodeListFilter::Geography)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    CodeListRecord::new("z-list", "Z", true, Some(2)),
                    CodeListRecord::new("a-list", "A", true, None),
                ])
            });

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let lists = service
            .get_code_lists(CodeListFilter::Geography)
            .await
            .unwrap();

        assert_eq!(lists.total_count, 2);
        assert_eq!(lists.items[0].id, "z-list");
        assert_eq!(lists.items[1].id, "a-list");
        assert_eq!(
            lists.items[1].links.as_ref().unwrap().self_link.href,
            "host1/code-lists/a-list"
        );
    }

    #[tokio::test]
    async fn test_get_code_lists_empty() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_list_code_lists()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let lists = service.get_code_lists(CodeListFilter::All).await.unwrap();

        assert!(lists.items.is_empty());
        assert_eq!(lists.count, 0);
    }

    #[tokio::test]
    async fn test_get_code_list_not_found() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_code_list()
            .times(1)
            .returning(|_| Ok(None));

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service.get_code_list("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_editions_requires_code_list() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_code_list()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_list_editions().never();

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service.get_editions("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_editions_links() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_code_list()
            .returning(|_| Ok(Some(CodeListRecord::new("codelist1", "CL", false, None))));
        mock_repo
            .expect_list_editions()
            .withf(|cl| cl == "codelist1")
            .returning(|_| Ok(vec![edition_record("2020"), edition_record("2021")]));

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let editions = service.get_editions("codelist1").await.unwrap();

        assert_eq!(editions.count, 2);
        let links = editions.items[1].links.as_ref().unwrap();
        assert_eq!(links.self_link.href, "host1/code-lists/codelist1/editions/2021");
        assert_eq!(links.editions.href, "host1/code-lists/codelist1/editions");
        assert_eq!(links.codes.href, "host1/code-lists/codelist1/editions/2021/codes");
    }

    #[tokio::test]
    async fn test_get_code_datasets() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo.expect_find_code().returning(|_, _, _| {
            Ok(Some(CodeRecord::new(
                "testID", "codelist1", "edition1", "testCode", "testLabel",
            )))
        });
        mock_repo.expect_list_code_datasets().returning(|_, _, _| {
            Ok(vec![CodeDatasetRecord {
                dataset_id: "cpih01".to_string(),
                dimension_name: "aggregate".to_string(),
                dimension_label: "Aggregate".to_string(),
                editions: vec![DatasetEditionRecord {
                    edition: "time-series".to_string(),
                    latest_version: "1".to_string(),
                }],
            }])
        });

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let datasets = service
            .get_code_datasets("codelist1", "edition1", "testID")
            .await
            .unwrap();

        assert_eq!(datasets.total_count, 1);
        assert_eq!(
            datasets.items[0].links.as_ref().unwrap().self_link.href,
            "datasets1/datasets/cpih01"
        );
    }

    #[tokio::test]
    async fn test_get_code_datasets_empty_edition_is_internal_error() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo.expect_find_code().returning(|_, _, _| {
            Ok(Some(CodeRecord::new(
                "testID", "codelist1", "edition1", "testCode", "testLabel",
            )))
        });
        mock_repo.expect_list_code_datasets().returning(|_, _, _| {
            Ok(vec![CodeDatasetRecord {
                dataset_id: "cpih01".to_string(),
                dimension_name: "aggregate".to_string(),
                dimension_label: "Aggregate".to_string(),
                editions: vec![DatasetEditionRecord {
                    edition: String::new(),
                    latest_version: "1".to_string(),
                }],
            }])
        });

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service
            .get_code_datasets("codelist1", "edition1", "testID")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_store_error_is_passed_through() {
        let mut mock_repo = MockCodeListRepository::new();

        mock_repo
            .expect_find_code_list()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = CodeListService::new(Arc::new(mock_repo), urls());

        let result = service.get_code_list("codelist1").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
