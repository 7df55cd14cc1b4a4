//! HTTP request handlers for API endpoints.
//!
//! Each handler validates its path identifiers, calls the service and
//! returns the linked representation as JSON.

pub mod code_lists;
pub mod codes;
pub mod editions;
pub mod health;

pub use code_lists::{get_code_list_handler, get_code_lists_handler};
pub use codes::{get_code_datasets_handler, get_code_handler, get_codes_handler};
pub use editions::{get_edition_handler, get_editions_handler};
pub use health::health_handler;
