//! Helpers shared by the HTTP layer.
//!
//! - [`identifier`] - URL-safety validation of path identifiers

pub mod identifier;
