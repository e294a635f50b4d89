//! Catalog loading.
//!
//! The catalog is read once at startup, either from the sample shipped inside
//! the plugin binary or from a JSON document named by the `catalog_path`
//! configuration key.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "page_size": 36,
//!   "books": [
//!     {
//!       "id": "b1",
//!       "title": "Dune",
//!       "author": "a1",
//!       "image": "https://covers.example/dune.jpg",
//!       "description": "...",
//!       "published": "1965-08-01T00:00:00.000Z",
//!       "genres": ["g1"]
//!     }
//!   ],
//!   "authors": { "a1": "Frank Herbert" },
//!   "genres": { "g1": "Science Fiction" }
//! }
//! ```

use crate::domain::error::{CatalogError, Result};
use crate::domain::{Book, NameIndex};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Number of books revealed per page when the document does not say.
pub const DEFAULT_PAGE_SIZE: usize = 36;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    page_size: Option<usize>,
    books: Vec<Book>,
    #[serde(default)]
    authors: NameIndex,
    #[serde(default)]
    genres: NameIndex,
}

/// The static dataset: books in display order plus the author and genre
/// name indexes and the page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: NameIndex,
    pub genres: NameIndex,
    pub page_size: usize,
}

impl Catalog {
    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed JSON and
    /// [`CatalogError::Dataset`] for a zero page size or duplicate book ids.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self {
            books: document.books,
            authors: document.authors,
            genres: document.genres,
            page_size: document.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The sample catalog embedded in the plugin.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document fails to parse (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json_str(include_str!("../../data/books.json"))
            .expect("Built-in catalog should always parse")
    }

    /// Overrides the page size. Zero is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when `page_size` is zero.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(CatalogError::Config("page_size must be positive".to_string()));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Looks a book up by id.
    #[must_use]
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::Dataset("page_size must be positive".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::Dataset(format!("duplicate book id: {}", book.id)));
            }
            if !self.authors.contains(&book.author) {
                tracing::warn!(book_id = %book.id, author = %book.author, "book references unknown author");
            }
        }

        tracing::debug!(
            books = self.books.len(),
            authors = self.authors.len(),
            genres = self.genres.len(),
            page_size = self.page_size,
            "catalog validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r#"{
        "books": [
            {"id": "b1", "title": "Dune", "author": "a1", "image": "i1",
             "published": "1965-08-01T00:00:00.000Z", "genres": ["g1"]},
            {"id": "b2", "title": "Dune Messiah", "author": "a1", "image": "i2",
             "published": "1969-10-15T00:00:00.000Z", "genres": ["g1"]}
        ],
        "authors": {"a1": "Frank Herbert"},
        "genres": {"g1": "Science Fiction"}
    }"#;

    #[test]
    fn parses_document_with_default_page_size() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        assert_eq!(catalog.books.len(), 2);
        assert_eq!(catalog.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.book("b2").map(|b| b.title.as_str()), Some("Dune Messiah"));
        assert!(catalog.book("b9").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = SMALL.replace("\"b2\"", "\"b1\"");
        let err = Catalog::from_json_str(&json).unwrap_err();
        assert!(matches!(err, CatalogError::Dataset(_)));
    }

    #[test]
    fn rejects_zero_page_size() {
        let json = SMALL.replacen('{', "{\"page_size\": 0,", 1);
        assert!(matches!(
            Catalog::from_json_str(&json),
            Err(CatalogError::Dataset(_))
        ));
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        assert!(matches!(catalog.with_page_size(0), Err(CatalogError::Config(_))));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            Catalog::from_json_str("{\"books\": ["),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.authors.get("a1"), Some("Frank Herbert"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert!(!catalog.books.is_empty());
        assert!(catalog
            .books
            .iter()
            .all(|book| catalog.authors.contains(&book.author)));
    }
}
