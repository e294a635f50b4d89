//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` alongside its re-render flag.
//! Everything that touches the host (closing the pane, reading files through
//! the `/host` mount) happens in the plugin shim, never in the handler.
//!
//! # Example
//!
//! ```rust
//! use bookgrid::app::Action;
//! use std::path::PathBuf;
//!
//! let actions = vec![Action::LoadCatalog(PathBuf::from("/host/books.json"))];
//! assert_eq!(actions.len(), 1);
//! ```

use super::Event;
use crate::catalog::Catalog;
use std::path::{Path, PathBuf};

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Reads a dataset file with [`read_catalog`] and feeds the resulting
    /// event back into the handler.
    LoadCatalog(PathBuf),
}

/// Loads the dataset at `path` and wraps the outcome as an event:
/// [`Event::CatalogLoaded`] on success, [`Event::CatalogLoadFailed`] when the
/// file cannot be read or fails to parse.
///
/// # Example
///
/// ```rust
/// use bookgrid::app::{read_catalog, Event};
///
/// let event = read_catalog("/nonexistent/books.json".as_ref());
/// assert!(matches!(event, Event::CatalogLoadFailed { .. }));
/// ```
#[must_use]
pub fn read_catalog(path: &Path) -> Event {
    match Catalog::from_file(path) {
        Ok(catalog) => Event::CatalogLoaded {
            catalog: Box::new(catalog),
        },
        Err(e) => Event::CatalogLoadFailed {
            error: format!("{}: {e}", path.display()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn readable_file_becomes_loaded_event() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"books": [{{"id": "b1", "title": "Solaris", "author": "a1", "image": "",
                "published": "1961-06-01T00:00:00Z"}}],
               "authors": {{"a1": "Stanislaw Lem"}}}}"#
        )
        .unwrap();

        match read_catalog(file.path()) {
            Event::CatalogLoaded { catalog } => assert_eq!(catalog.books[0].title, "Solaris"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn missing_or_broken_file_becomes_failure_event() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("books.json");
        match read_catalog(&missing) {
            Event::CatalogLoadFailed { error } => assert!(error.contains("books.json")),
            other => panic!("unexpected event: {other:?}"),
        }

        std::fs::write(&missing, "{").unwrap();
        assert!(matches!(read_catalog(&missing), Event::CatalogLoadFailed { .. }));
    }
}
