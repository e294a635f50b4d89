//! Preview list rendering.
//!
//! [`render_previews`] turns books into preview tiles, one per book, each
//! tagged with the book id so a later selection can be resolved back to the
//! catalog. A [`PreviewList`] owns one rendered scope and rebuilds it from
//! scratch on every [`PreviewList::set_data`]. The list container
//! ([`ListView`]) is a sequence of scopes: a search replaces the sequence,
//! show-more appends to it.

use crate::domain::{Book, NameIndex};

/// One rendered book preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTile {
    /// Id of the book this tile was rendered from.
    pub preview: String,
    pub image: String,
    pub title: String,
    /// Resolved author display name, empty when the id is unknown.
    pub author: String,
}

/// Renders one tile per book, in order.
///
/// # Example
///
/// ```
/// use bookgrid::catalog::Catalog;
/// use bookgrid::ui::previews::render_previews;
///
/// let catalog = Catalog::builtin();
/// let tiles = render_previews(&catalog.books[..2], &catalog.authors);
/// assert_eq!(tiles.len(), 2);
/// assert_eq!(tiles[0].preview, catalog.books[0].id);
/// ```
#[must_use]
pub fn render_previews(books: &[Book], authors: &NameIndex) -> Vec<PreviewTile> {
    books
        .iter()
        .map(|book| PreviewTile {
            preview: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: authors.get(&book.author).unwrap_or_default().to_string(),
        })
        .collect()
}

/// An isolated rendering scope holding the tiles of one `set_data` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewList {
    tiles: Vec<PreviewTile>,
}

impl PreviewList {
    /// Creates a scope already populated with `books`.
    #[must_use]
    pub fn with_data(books: &[Book], authors: &NameIndex) -> Self {
        let mut list = Self::default();
        list.set_data(books, authors);
        list
    }

    /// Discards the current tiles and renders `books`.
    pub fn set_data(&mut self, books: &[Book], authors: &NameIndex) {
        self.tiles = render_previews(books, authors);
    }

    #[must_use]
    pub fn tiles(&self) -> &[PreviewTile] {
        &self.tiles
    }
}

/// The list container: every preview scope currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    scopes: Vec<PreviewList>,
}

impl ListView {
    /// Drops all scopes and shows `list` alone.
    pub fn replace(&mut self, list: PreviewList) {
        self.scopes.clear();
        self.scopes.push(list);
    }

    /// Adds `list` after the existing scopes.
    pub fn append(&mut self, list: PreviewList) {
        self.scopes.push(list);
    }

    /// All displayed tiles across scopes, in display order.
    pub fn tiles(&self) -> impl Iterator<Item = &PreviewTile> {
        self.scopes.iter().flat_map(|scope| scope.tiles().iter())
    }

    /// Tile at a flat display index.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&PreviewTile> {
        self.tiles().nth(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.iter().map(|scope| scope.tiles().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}
