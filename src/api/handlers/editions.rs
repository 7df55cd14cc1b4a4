//! Handlers for edition endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::{Edition, EditionResults};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::identifier::validate_identifier;

/// Lists the editions of a code list.
///
/// # Endpoint
///
/// `GET /code-lists/{id}/editions`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not a valid identifier.
/// Returns 404 Not Found if the code list doesn't exist.
pub async fn get_editions_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditionResults>, AppError> {
    validate_identifier("code_list_id", &id)?;

    let editions = state.code_list_service.get_editions(&id).await?;

    tracing::info!(code_list_id = %id, count = editions.count, "Retrieved editions");
    Ok(Json(editions))
}

/// Retrieves one edition of a code list.
///
/// # Endpoint
///
/// `GET /code-lists/{id}/editions/{edition}`
///
/// # Errors
///
/// Returns 400 Bad Request if an identifier is invalid.
/// Returns 404 Not Found if the edition doesn't exist.
pub async fn get_edition_handler(
    State(state): State<AppState>,
    Path((id, edition)): Path<(String, String)>,
) -> Result<Json<Edition>, AppError> {
    validate_identifier("code_list_id", &id)?;
    validate_identifier("edition", &edition)?;

    let result = state.code_list_service.get_edition(&id, &edition).await?;

    tracing::info!(code_list_id = %id, edition = %edition, "Retrieved edition");
    Ok(Json(result))
}
