//! Domain layer: catalogue records and the store interface.
//!
//! - [`entities`] - Raw records as the store returns them
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or database layers.

pub mod entities;
pub mod repositories;
