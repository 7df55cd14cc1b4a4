//! PostgreSQL repository implementations.
//!
//! Queries are bound at runtime through `sqlx::query_as`, so the crate builds
//! without a live database.
//!
//! - [`PgCodeListRepository`] - Code lists, editions, codes and their datasets

pub mod pg_code_list_repository;

pub use pg_code_list_repository::PgCodeListRepository;
