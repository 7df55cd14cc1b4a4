//! Repository trait definitions for the domain layer.
//!
//! The traits here are the store interface the service layer consumes.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod code_list_repository;

pub use code_list_repository::CodeListRepository;

#[cfg(test)]
pub use code_list_repository::MockCodeListRepository;
