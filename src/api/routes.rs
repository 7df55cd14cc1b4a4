//! API route configuration.

use crate::api::handlers::{
    get_code_datasets_handler, get_code_handler, get_code_list_handler, get_code_lists_handler,
    get_codes_handler, get_edition_handler, get_editions_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only catalogue routes.
///
/// # Endpoints
///
/// - `GET /code-lists`                                                  - List code lists
/// - `GET /code-lists/{id}`                                             - Code list
/// - `GET /code-lists/{id}/editions`                                    - Editions of a code list
/// - `GET /code-lists/{id}/editions/{edition}`                          - Edition
/// - `GET /code-lists/{id}/editions/{edition}/codes`                    - Codes of an edition
/// - `GET /code-lists/{id}/editions/{edition}/codes/{code}`             - Code
/// - `GET /code-lists/{id}/editions/{edition}/codes/{code}/datasets`    - Datasets using a code
pub fn code_list_routes() -> Router<AppState> {
    Router::new()
        .route("/code-lists", get(get_code_lists_handler))
        .route("/code-lists/{id}", get(get_code_list_handler))
        .route("/code-lists/{id}/editions", get(get_editions_handler))
        .route("/code-lists/{id}/editions/{edition}", get(get_edition_handler))
        .route(
            "/code-lists/{id}/editions/{edition}/codes",
            get(get_codes_handler),
        )
        .route(
            "/code-lists/{id}/editions/{edition}/codes/{code}",
            get(get_code_handler),
        )
        .route(
            "/code-lists/{id}/editions/{edition}/codes/{code}/datasets",
            get(get_code_datasets_handler),
        )
}
