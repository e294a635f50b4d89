//! Catalog data and the pure browsing logic over it.
//!
//! - [`dataset`]: Loading and validating the static catalog
//! - [`filter`]: Title/genre/author filter engine
//! - [`pagination`]: Session state (match set + page depth)

pub mod dataset;
pub mod filter;
pub mod pagination;

pub use dataset::{Catalog, DEFAULT_PAGE_SIZE};
pub use filter::{filter, FilterCriteria, Selection, ANY};
pub use pagination::Session;
