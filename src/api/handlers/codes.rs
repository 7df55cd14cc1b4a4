//! Handlers for code endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::{Code, CodeResults, DatasetResults};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::identifier::validate_identifier;

/// Lists the codes of an edition.
///
/// # Endpoint
///
/// `GET /code-lists/{id}/editions/{edition}/codes`
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "id": "K04000001",
///       "code": "K04000001",
///       "label": "England and Wales",
///       "links": {
///         "self": { "id": "K04000001", "href": ".../codes/K04000001" },
///         "code_list": { "href": ".../code-lists/countries" },
///         "datasets": { "href": ".../codes/K04000001/datasets" }
///       }
///     }
///   ],
///   "count": 1,
///   "limit": 1,
///   "total_count": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if an identifier is invalid.
/// Returns 404 Not Found if the edition doesn't exist.
pub async fn get_codes_handler(
    State(state): State<AppState>,
    Path((id, edition)): Path<(String, String)>,
) -> Result<Json<CodeResults>, AppError> {
    validate_identifier("code_list_id", &id)?;
    validate_identifier("edition", &edition)?;

    tracing::info!(code_list_id = %id, edition = %edition, "Getting edition codes");

    let codes = state.code_list_service.get_codes(&id, &edition).await?;

    tracing::info!(code_list_id = %id, edition = %edition, count = codes.count, "Retrieved codes");
    Ok(Json(codes))
}

/// Retrieves a single code.
///
/// # Endpoint
///
/// `GET /code-lists/{id}/editions/{edition}/codes/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if an identifier is invalid.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_code_handler(
    State(state): State<AppState>,
    Path((id, edition, code)): Path<(String, String, String)>,
) -> Result<Json<Code>, AppError> {
    validate_identifier("code_list_id", &id)?;
    validate_identifier("edition", &edition)?;
    validate_identifier("code", &code)?;

    let result = state.code_list_service.get_code(&id, &edition, &code).await?;

    tracing::info!(code_list_id = %id, edition = %edition, code = %code, "Retrieved code");
    Ok(Json(result))
}

/// Lists the datasets that use a code.
///
/// # Endpoint
///
/// `GET /code-lists/{id}/editions/{edition}/codes/{code}/datasets`
///
/// Links in the response point into the dataset API.
///
/// # Errors
///
/// Returns 400 Bad Request if an identifier is invalid.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_code_datasets_handler(
    State(state): State<AppState>,
    Path((id, edition, code)): Path<(String, String, String)>,
) -> Result<Json<DatasetResults>, AppError> {
    validate_identifier("code_list_id", &id)?;
    validate_identifier("edition", &edition)?;
    validate_identifier("code", &code)?;

    let datasets = state
        .code_list_service
        .get_code_datasets(&id, &edition, &code)
        .await?;

    tracing::info!(
        code_list_id = %id,
        edition = %edition,
        code = %code,
        count = datasets.count,
        "Retrieved code datasets"
    );
    Ok(Json(datasets))
}
