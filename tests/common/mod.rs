#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use code_list_api::AppError;
use code_list_api::api::handlers::health_handler;
use code_list_api::api::routes::code_list_routes;
use code_list_api::application::services::CodeListService;
use code_list_api::config::ApiUrls;
use code_list_api::domain::entities::{
    CodeDatasetRecord, CodeListFilter, CodeListRecord, CodeRecord, DatasetEditionRecord,
    EditionRecord,
};
use code_list_api::domain::repositories::CodeListRepository;
use code_list_api::state::AppState;

pub const API_URL: &str = "http://api.test";
pub const DATASET_API_URL: &str = "http://datasets.test";

/// In-memory catalogue used in place of PostgreSQL.
#[derive(Default)]
pub struct InMemoryCatalogue {
    pub code_lists: Vec<CodeListRecord>,
    pub editions: Vec<EditionRecord>,
    pub codes: Vec<CodeRecord>,
    pub datasets: Vec<(CodeRecord, CodeDatasetRecord)>,
    /// Every call fails with an internal error when set.
    pub unavailable: bool,
}

impl InMemoryCatalogue {
    pub fn with_code_list(mut self, id: &str, is_geography: bool) -> Self {
        let number_of_codes = self.codes.iter().filter(|c| c.code_list_id == id).count();
        self.code_lists.push(CodeListRecord::new(
            id,
            format!("{id} label"),
            is_geography,
            Some(number_of_codes as i64),
        ));
        self
    }

    pub fn with_edition(self, code_list_id: &str, id: &str) -> Self {
        self.with_named_edition(code_list_id, id, id)
    }

    /// Adds an edition whose addressable id differs from its published
    /// `edition` token.
    pub fn with_named_edition(mut self, code_list_id: &str, id: &str, edition: &str) -> Self {
        self.editions.push(EditionRecord {
            id: id.to_string(),
            code_list_id: code_list_id.to_string(),
            edition: edition.to_string(),
            label: format!("Edition {edition}"),
            release_date: "2021-03-21".to_string(),
        });
        self
    }

    pub fn with_code(mut self, code_list_id: &str, edition: &str, id: &str, label: &str) -> Self {
        self.codes
            .push(CodeRecord::new(id, code_list_id, edition, id, label));
        self
    }

    pub fn with_dataset(
        mut self,
        code_list_id: &str,
        edition: &str,
        code: &str,
        dataset_id: &str,
    ) -> Self {
        let code = CodeRecord::new(code, code_list_id, edition, code, "");
        self.datasets.push((
            code,
            CodeDatasetRecord {
                dataset_id: dataset_id.to_string(),
                dimension_name: code_list_id.to_string(),
                dimension_label: format!("{code_list_id} dimension"),
                editions: vec![DatasetEditionRecord {
                    edition: "time-series".to_string(),
                    latest_version: "2".to_string(),
                }],
            },
        ));
        self
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl CodeListRepository for InMemoryCatalogue {
    async fn list_code_lists(
        &self,
        filter: CodeListFilter,
    ) -> Result<Vec<CodeListRecord>, AppError> {
        self.check()?;
        Ok(self
            .code_lists
            .iter()
            .filter(|cl| filter.is_geography().is_none_or(|geo| cl.is_geography == geo))
            .cloned()
            .collect())
    }

    async fn find_code_list(&self, id: &str) -> Result<Option<CodeListRecord>, AppError> {
        self.check()?;
        Ok(self.code_lists.iter().find(|cl| cl.id == id).cloned())
    }

    async fn list_editions(&self, code_list_id: &str) -> Result<Vec<EditionRecord>, AppError> {
        self.check()?;
        Ok(self
            .editions
            .iter()
            .filter(|e| e.code_list_id == code_list_id)
            .cloned()
            .collect())
    }

    async fn find_edition(
        &self,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Option<EditionRecord>, AppError> {
        self.check()?;
        Ok(self
            .editions
            .iter()
            .find(|e| e.code_list_id == code_list_id && e.id == edition)
            .cloned())
    }

    async fn list_codes(
        &self,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Vec<CodeRecord>, AppError> {
        self.check()?;
        Ok(self
            .codes
            .iter()
            .filter(|c| c.code_list_id == code_list_id && c.edition_id == edition)
            .cloned()
            .collect())
    }

    async fn find_code(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Option<CodeRecord>, AppError> {
        self.check()?;
        Ok(self
            .codes
            .iter()
            .find(|c| c.code_list_id == code_list_id && c.edition_id == edition && c.id == code)
            .cloned())
    }

    async fn list_code_datasets(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Vec<CodeDatasetRecord>, AppError> {
        self.check()?;
        Ok(self
            .datasets
            .iter()
            .filter(|(c, _)| {
                c.code_list_id == code_list_id && c.edition_id == edition && c.id == code
            })
            .map(|(_, d)| d.clone())
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Catalogue shared by most handler tests.
///
/// - `sex` (non-geography), edition `2021` with codes `M`, `F`
/// - `countries` (geography), edition `2021` with code `K04000001`,
///   used by dataset `mid-year-pop-est`, and edition `march-2022`
///   published as `2022`
/// - `broken`, edition `2021` with a code that has no id
pub fn fixture() -> InMemoryCatalogue {
    InMemoryCatalogue::default()
        .with_code("sex", "2021", "M", "Male")
        .with_code("sex", "2021", "F", "Female")
        .with_code("countries", "2021", "K04000001", "England and Wales")
        .with_code("broken", "2021", "", "No id")
        .with_code_list("sex", false)
        .with_code_list("countries", true)
        .with_code_list("broken", false)
        .with_edition("sex", "2021")
        .with_edition("countries", "2021")
        .with_named_edition("countries", "march-2022", "2022")
        .with_edition("broken", "2021")
        .with_dataset("countries", "2021", "K04000001", "mid-year-pop-est")
}

pub fn create_test_state(catalogue: InMemoryCatalogue) -> AppState {
    let repository: Arc<dyn CodeListRepository> = Arc::new(catalogue);
    let urls = ApiUrls {
        code_list_api: API_URL.to_string(),
        dataset_api: DATASET_API_URL.to_string(),
    };

    AppState::new(Arc::new(CodeListService::new(repository, urls)))
}

pub fn make_server(catalogue: InMemoryCatalogue) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(code_list_routes())
        .with_state(create_test_state(catalogue));

    TestServer::new(app).unwrap()
}
