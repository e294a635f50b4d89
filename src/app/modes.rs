//! Input routing modes.
//!
//! The three overlays are independent toggles, but key input has to go
//! somewhere. [`InputMode`] names the surface that currently receives keys:
//! the first open overlay in the order search, settings, detail, or the
//! tile grid when none is open.

/// Field of the search form that receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Genre,
    Author,
}

impl SearchField {
    /// Next field in tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    /// Previous field in tab order, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}

/// Surface currently receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Tile grid: cursor movement, show-more, overlay triggers.
    Browse,
    /// Search form with the focused field.
    Search(SearchField),
    /// Settings form (theme selector).
    Settings,
    /// Book detail overlay.
    Detail,
}

/// Cursor movement on the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
