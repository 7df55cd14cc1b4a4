//! Business logic services for the application layer.

pub mod code_list_service;

pub use code_list_service::CodeListService;
