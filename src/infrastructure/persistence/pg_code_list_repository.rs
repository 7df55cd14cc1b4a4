//! PostgreSQL implementation of the code-list repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{
    CodeDatasetRecord, CodeListFilter, CodeListRecord, CodeRecord, DatasetEditionRecord,
    EditionRecord,
};
use crate::domain::repositories::CodeListRepository;
use crate::error::AppError;

/// PostgreSQL repository for the code-list catalogue.
///
/// All queries are read-only. Listings are ordered by identifier so that
/// responses are stable between requests.
pub struct PgCodeListRepository {
    pool: Arc<PgPool>,
}

impl PgCodeListRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CodeListRow {
    id: String,
    label: String,
    is_geography: bool,
    number_of_codes: Option<i64>,
}

impl From<CodeListRow> for CodeListRecord {
    fn from(r: CodeListRow) -> Self {
        CodeListRecord::new(r.id, r.label, r.is_geography, r.number_of_codes)
    }
}

#[derive(FromRow)]
struct EditionRow {
    id: String,
    code_list_id: String,
    edition: String,
    label: String,
    release_date: String,
}

impl From<EditionRow> for EditionRecord {
    fn from(r: EditionRow) -> Self {
        EditionRecord {
            id: r.id,
            code_list_id: r.code_list_id,
            edition: r.edition,
            label: r.label,
            release_date: r.release_date,
        }
    }
}

#[derive(FromRow)]
struct CodeRow {
    id: String,
    code_list_id: String,
    edition_id: String,
    code: String,
    label: String,
}

impl From<CodeRow> for CodeRecord {
    fn from(r: CodeRow) -> Self {
        CodeRecord::new(r.id, r.code_list_id, r.edition_id, r.code, r.label)
    }
}

/// One (dataset, dataset edition) pair referencing a code.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct CodeDatasetRow {
    pub dataset_id: String,
    pub dimension_name: String,
    pub dimension_label: String,
    pub dataset_edition: String,
    pub latest_version: String,
}

/// Folds rows sorted by `dataset_id` into one record per dataset, keeping
/// the row order of editions.
pub(crate) fn group_dataset_rows(rows: Vec<CodeDatasetRow>) -> Vec<CodeDatasetRecord> {
    let mut datasets: Vec<CodeDatasetRecord> = Vec::new();

    for row in rows {
        let edition = DatasetEditionRecord {
            edition: row.dataset_edition,
            latest_version: row.latest_version,
        };

        match datasets.last_mut() {
            Some(last) if last.dataset_id == row.dataset_id => last.editions.push(edition),
            _ => datasets.push(CodeDatasetRecord {
                dataset_id: row.dataset_id,
                dimension_name: row.dimension_name,
                dimension_label: row.dimension_label,
                editions: vec![edition],
            }),
        }
    }

    datasets
}

const CODE_LIST_COLUMNS: &str = r#"
    SELECT cl.id, cl.label, cl.is_geography,
           (SELECT COUNT(*) FROM codes c WHERE c.code_list_id = cl.id) AS number_of_codes
    FROM code_lists cl
"#;

#[async_trait]
impl CodeListRepository for PgCodeListRepository {
    async fn list_code_lists(
        &self,
        filter: CodeListFilter,
    ) -> Result<Vec<CodeListRecord>, AppError> {
        let sql = format!(
            "{CODE_LIST_COLUMNS} WHERE ($1::BOOLEAN IS NULL OR cl.is_geography = $1) ORDER BY cl.id"
        );

        let rows = sqlx::query_as::<_, CodeListRow>(&sql)
            .bind(filter.is_geography())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(CodeListRecord::from).collect())
    }

    async fn find_code_list(&self, id: &str) -> Result<Option<CodeListRecord>, AppError> {
        let sql = format!("{CODE_LIST_COLUMNS} WHERE cl.id = $1");

        let row = sqlx::query_as::<_, CodeListRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(CodeListRecord::from))
    }

    async fn list_editions(&self, code_list_id: &str) -> Result<Vec<EditionRecord>, AppError> {
        let rows = sqlx::query_as::<_, EditionRow>(
            r#"
            SELECT id, code_list_id, edition, label, release_date
            FROM editions
            WHERE code_list_id = $1
            ORDER BY id
            "#,
        )
        .bind(code_list_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(EditionRecord::from).collect())
    }

    async fn find_edition(
        &self,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Option<EditionRecord>, AppError> {
        let row = sqlx::query_as::<_, EditionRow>(
            r#"
            SELECT id, code_list_id, edition, label, release_date
            FROM editions
            WHERE code_list_id = $1 AND id = $2
            "#,
        )
        .bind(code_list_id)
        .bind(edition)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(EditionRecord::from))
    }

    async fn list_codes(
        &self,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Vec<CodeRecord>, AppError> {
        let rows = sqlx::query_as::<_, CodeRow>(
            r#"
            SELECT id, code_list_id, edition_id, code, label
            FROM codes
            WHERE code_list_id = $1 AND edition_id = $2
            ORDER BY id
            "#,
        )
        .bind(code_list_id)
        .bind(edition)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CodeRecord::from).collect())
    }

    async fn find_code(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Option<CodeRecord>, AppError> {
        let row = sqlx::query_as::<_, CodeRow>(
            r#"
            SELECT id, code_list_id, edition_id, code, label
            FROM codes
            WHERE code_list_id = $1 AND edition_id = $2 AND id = $3
            "#,
        )
        .bind(code_list_id)
        .bind(edition)
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CodeRecord::from))
    }

    async fn list_code_datasets(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Vec<CodeDatasetRecord>, AppError> {
        let rows = sqlx::query_as::<_, CodeDatasetRow>(
            r#"
            SELECT dataset_id, dimension_name, dimension_label, dataset_edition, latest_version
            FROM code_datasets
            WHERE code_list_id = $1 AND edition_id = $2 AND code_id = $3
            ORDER BY dataset_id, dataset_edition
            "#,
        )
        .bind(code_list_id)
        .bind(edition)
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(group_dataset_rows(rows))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
