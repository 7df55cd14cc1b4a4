//! Validation of resource identifiers taken from request paths.
//!
//! Link construction joins identifiers into URLs without escaping, so every
//! identifier entering through a path segment must be URL-safe.

use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::AppError;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{1,128}$").unwrap());

/// Returns `true` if `value` is a URL-safe identifier.
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_REGEX.is_match(value)
}

/// Validates a path identifier.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming `field` if the value is empty,
/// longer than 128 characters, or contains characters outside
/// `A-Z a-z 0-9 . _ -`.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), AppError> {
    if is_valid_identifier(value) {
        return Ok(());
    }

    Err(AppError::bad_request(
        "Invalid identifier",
        json!({ "field": field, "allowed": "A-Z, a-z, 0-9, '.', '_', '-'", "max_length": 128 }),
    ))
}
