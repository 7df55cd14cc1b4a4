//! Repository trait for the code-list catalogue.

use crate::domain::entities::{
    CodeDatasetRecord, CodeListFilter, CodeListRecord, CodeRecord, EditionRecord,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the code-list catalogue.
///
/// Single-record lookups return `Ok(None)` when the record does not exist;
/// deciding that this is a 404 is left to the service layer. Listings return
/// records in the store's canonical order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCodeListRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeListRepository: Send + Sync {
    /// Lists code lists matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_code_lists(&self, filter: CodeListFilter)
    -> Result<Vec<CodeListRecord>, AppError>;

    /// Finds a code list by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_code_list(&self, id: &str) -> Result<Option<CodeListRecord>, AppError>;

    /// Lists all editions of a code list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_editions(&self, code_list_id: &str) -> Result<Vec<EditionRecord>, AppError>;

    /// Finds one edition of a code list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_edition(
        &self,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Option<EditionRecord>, AppError>;

    /// Lists the codes of an edition.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_codes(
        &self,
        code_list_id: &str,
        edition: &str,
    ) -> Result<Vec<CodeRecord>, AppError>;

    /// Finds a single code within an edition.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_code(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Option<CodeRecord>, AppError>;

    /// Lists the datasets that use a code, grouped per dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_code_datasets(
        &self,
        code_list_id: &str,
        edition: &str,
        code: &str,
    ) -> Result<Vec<CodeDatasetRecord>, AppError>;

    /// Verifies the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
