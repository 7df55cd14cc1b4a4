//! Handlers for code-list endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::query::CodeListQuery;
use crate::api::dto::{CodeList, CodeListResults};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::identifier::validate_identifier;

/// Lists code lists.
///
/// # Endpoint
///
/// `GET /code-lists`
///
/// # Query Parameters
///
/// - `type` (optional): `geography` or `non-geography`
///
/// # Errors
///
/// Returns 400 Bad Request if `type` has any other value.
pub async fn get_code_lists_handler(
    State(state): State<AppState>,
    Query(params): Query<CodeListQuery>,
) -> Result<Json<CodeListResults>, AppError> {
    params.validate()?;

    let filter = params.filter();
    tracing::info!(?filter, "Getting code lists");

    let code_lists = state.code_list_service.get_code_lists(filter).await?;

    tracing::info!(count = code_lists.count, "Retrieved code lists");
    Ok(Json(code_lists))
}

/// Retrieves a single code list.
///
/// # Endpoint
///
/// `GET /code-lists/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not a valid identifier.
/// Returns 404 Not Found if the code list doesn't exist.
pub async fn get_code_list_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CodeList>, AppError> {
    validate_identifier("code_list_id", &id)?;

    let code_list = state.code_list_service.get_code_list(&id).await?;

    tracing::info!(code_list_id = %id, "Retrieved code list");
    Ok(Json(code_list))
}
