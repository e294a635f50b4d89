//! Domain layer for the bookgrid plugin.
//!
//! Plain data types with no Zellij or rendering concerns.
//!
//! - [`error`]: Error types and result alias
//! - [`book`]: Book records and id → name indexes

pub mod book;
pub mod error;

pub use book::{Book, NameIndex};
pub use error::{CatalogError, Result};
