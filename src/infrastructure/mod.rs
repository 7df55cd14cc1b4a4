//! Infrastructure layer for external integrations.
//!
//! Implements the store interface defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
