//! Application layer services.
//!
//! Services consume repository traits, decide what "not found" means for
//! each request and hand fully linked API representations to the handlers.
//!
//! - [`services::code_list_service::CodeListService`] - Code lists, editions, codes and datasets

pub mod services;
