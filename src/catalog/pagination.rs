//! Session state and pagination.
//!
//! A [`Session`] holds the active match set and how many pages of it have
//! been revealed. Replacing the matches resets to page 1; each show-more
//! reveals the next `page_size` books until none remain.

use crate::domain::Book;

/// Active match set plus page depth.
///
/// # Example
///
/// ```
/// use bookgrid::catalog::{Catalog, Session};
///
/// let catalog = Catalog::builtin();
/// let mut session = Session::new(catalog.books.clone(), 2);
/// assert_eq!(session.first_page().len(), 2);
/// assert_eq!(session.remaining(), catalog.books.len() - 2);
/// let next = session.show_more().map(<[_]>::len);
/// assert_eq!(next, Some(2));
/// assert_eq!(session.page(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    matches: Vec<Book>,
    page: usize,
    page_size: usize,
}

impl Session {
    /// Starts a session at page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the match set wholesale and resets to page 1.
    pub fn replace(&mut self, matches: Vec<Book>) {
        self.matches = matches;
        self.page = 1;
    }

    #[must_use]
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The slice shown on a fresh render: `[0, page_size)`.
    #[must_use]
    pub fn first_page(&self) -> &[Book] {
        self.slice(0)
    }

    /// Number of matches not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.page * self.page_size)
    }

    /// Whether the show-more control is enabled.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Reveals the next page and returns it, or `None` when nothing remains
    /// (a disabled show-more is a no-op).
    pub fn show_more(&mut self) -> Option<&[Book]> {
        if !self.has_more() {
            return None;
        }
        let start = self.page * self.page_size;
        self.page += 1;
        tracing::debug!(page = self.page, start, remaining = self.remaining(), "revealed next page");
        Some(self.slice(start))
    }

    fn slice(&self, start: usize) -> &[Book] {
        let start = start.min(self.matches.len());
        let end = (start + self.page_size).min(self.matches.len());
        &self.matches[start..end]
    }
}
