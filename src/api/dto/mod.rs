//! API representations of catalogue resources.
//!
//! This is where store records become public records:
//!
//! - conversion is total (`from_record(None)` yields an empty value) and
//!   keeps only the fields the API exposes;
//! - `with_links` returns a new value carrying hypermedia links computed
//!   from identifiers and an explicit API base URL;
//! - [`result_set::ResultSet::with_counts`] fills the collection counters.

pub mod code;
pub mod code_list;
pub mod dataset;
pub mod edition;
pub mod health;
pub mod link;
pub mod query;
pub mod result_set;

pub use code::{Code, CodeLinks, CodeResults};
pub use code_list::{CodeList, CodeListLinks, CodeListResults};
pub use dataset::{Dataset, DatasetEdition, DatasetResults};
pub use edition::{Edition, EditionLinks, EditionResults};
pub use link::{Link, LinkError};
pub use result_set::ResultSet;
