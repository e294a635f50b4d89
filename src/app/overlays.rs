//! Search, settings and detail overlays.
//!
//! Each overlay is a plain open/closed toggle with its own content; none of
//! them knows about the others. The search and settings overlays carry form
//! drafts that survive closing, the way a host form keeps its field values.

use super::modes::SearchField;
use crate::catalog::{Catalog, FilterCriteria, ANY};
use crate::domain::{Book, NameIndex};
use crate::ui::theme::ThemeMode;
use std::collections::BTreeMap;

/// One entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted form value (`"any"` or an id).
    pub value: String,
    pub label: String,
}

/// Builds selector options: `"any"` with `default_label` first, then every
/// mapping entry in declaration order.
///
/// # Example
///
/// ```
/// use bookgrid::app::overlays::create_options;
/// use bookgrid::domain::NameIndex;
///
/// let genres = NameIndex::from_pairs([("g1", "Fantasy")]);
/// let options = create_options(&genres, "All Genres");
/// assert_eq!(options[0].value, "any");
/// assert_eq!(options[1].label, "Fantasy");
/// ```
#[must_use]
pub fn create_options(index: &NameIndex, default_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: ANY.to_string(),
        label: default_label.to_string(),
    })
    .chain(index.iter().map(|(id, name)| SelectOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// A selector: options plus the selected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub options: Vec<SelectOption>,
    pub selected: usize,
}

impl Select {
    #[must_use]
    pub const fn new(options: Vec<SelectOption>) -> Self {
        Self { options, selected: 0 }
    }

    /// Moves the selection by `step` options, wrapping at both ends.
    pub fn cycle(&mut self, step: isize) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let offset = step.rem_euclid(len as isize).unsigned_abs();
        self.selected = (self.selected + offset) % len;
    }

    #[must_use]
    pub fn current(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }
}

/// Draft values of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub genre: Select,
    pub author: Select,
    pub focus: SearchField,
}

impl SearchForm {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            genre: Select::new(create_options(&catalog.genres, "All Genres")),
            author: Select::new(create_options(&catalog.authors, "All Authors")),
            focus: SearchField::Title,
        }
    }

    /// Field values as a form submission would carry them.
    #[must_use]
    pub fn fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), self.title.clone());
        if let Some(genre) = self.genre.current() {
            fields.insert("genre".to_string(), genre.value.clone());
        }
        if let Some(author) = self.author.current() {
            fields.insert("author".to_string(), author.value.clone());
        }
        fields
    }

    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_fields(&self.fields())
    }

    /// Cycles the focused selector. No-op on the title field.
    pub fn cycle_focused(&mut self, step: isize) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Genre => self.genre.cycle(step),
            SearchField::Author => self.author.cycle(step),
        }
    }
}

/// Search overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOverlay {
    pub open: bool,
    pub form: SearchForm,
}

/// Settings overlay with the theme selector draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsOverlay {
    pub open: bool,
    pub theme: ThemeMode,
}

/// Content of the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub image: String,
    pub title: String,
    /// `"{author} ({year})"`.
    pub subtitle: String,
    pub description: String,
}

impl DetailContent {
    #[must_use]
    pub fn from_book(book: &Book, authors: &NameIndex) -> Self {
        let author = authors.get(&book.author).unwrap_or_default();
        Self {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{author} ({})", book.published_year()),
            description: book.description.clone(),
        }
    }
}

/// Detail overlay. Content stays populated after closing, as the host
/// fields would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    pub open: bool,
    pub content: Option<DetailContent>,
}

/// All three overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlays {
    pub search: SearchOverlay,
    pub settings: SettingsOverlay,
    pub detail: DetailOverlay,
}

impl Overlays {
    #[must_use]
    pub fn new(catalog: &Catalog, theme: ThemeMode) -> Self {
        Self {
            search: SearchOverlay {
                open: false,
                form: SearchForm::new(catalog),
            },
            settings: SettingsOverlay { open: false, theme },
            detail: DetailOverlay::default(),
        }
    }
}
