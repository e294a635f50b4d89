//! Error types for the bookgrid plugin.
//!
//! Browsing itself never fails: unresolved ids, empty match sets and missing
//! form fields all degrade silently. The errors here cover startup only,
//! loading a catalog or a theme token file.

use thiserror::Error;

/// The main error type for bookgrid operations.
///
/// # Examples
///
/// ```
/// use bookgrid::domain::CatalogError;
///
/// fn check_page_size(size: usize) -> Result<(), CatalogError> {
///     if size == 0 {
///         return Err(CatalogError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
/// assert!(check_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a catalog or theme file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid JSON or does not match the schema.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog parsed but violates a dataset rule (duplicate ids, zero
    /// page size, ...).
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Theme token file could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for bookgrid operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
