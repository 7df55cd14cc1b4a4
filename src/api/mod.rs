//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - API representations, link construction and result sets
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
