//! Raw catalogue records as the store returns them.
//!
//! These are storage-shaped: they may carry attributes the public API never
//! exposes. Conversion into API representations lives in [`crate::api::dto`].
//!
//! # Entity Types
//!
//! - [`CodeListRecord`] - Root of the hierarchy
//! - [`EditionRecord`] - A versioned snapshot of a code list
//! - [`CodeRecord`] - One entry within an edition
//! - [`CodeDatasetRecord`] - A dataset that uses a code as a dimension option
//!
//! Every record is constructed fresh per request and never mutated.

pub mod code;
pub mod code_list;
pub mod dataset;
pub mod edition;

pub use code::CodeRecord;
pub use code_list::{CodeListFilter, CodeListRecord};
pub use dataset::{CodeDatasetRecord, DatasetEditionRecord};
pub use edition::EditionRecord;
