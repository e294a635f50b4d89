//! Filter engine.
//!
//! A book matches when every dimension of [`FilterCriteria`] accepts it:
//! genre (`Any` or listed in the book's genres), title (blank query or a
//! case-insensitive substring) and author (`Any` or equal id). Output keeps
//! dataset order.

use crate::domain::Book;
use std::collections::BTreeMap;

/// Form value meaning "no restriction" for a selector.
pub const ANY: &str = "any";

/// A selector value: no restriction, or one id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Parses a submitted selector value. Absent, empty and `"any"` all mean
    /// no restriction.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("" | ANY) => Self::Any,
            Some(id) => Self::Id(id.to_string()),
        }
    }

    /// The value a form would submit for this selection.
    #[must_use]
    pub fn as_form_value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Id(id) => id,
        }
    }
}

/// Current filter values from the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: String,
    pub genre: Selection,
    pub author: Selection,
}

impl FilterCriteria {
    /// Builds criteria from submitted form fields (`title`, `genre`,
    /// `author`). Missing fields fall back to match-all.
    ///
    /// # Example
    ///
    /// ```
    /// use bookgrid::catalog::{FilterCriteria, Selection};
    /// use std::collections::BTreeMap;
    ///
    /// let mut fields = BTreeMap::new();
    /// fields.insert("genre".to_string(), "g1".to_string());
    ///
    /// let criteria = FilterCriteria::from_fields(&fields);
    /// assert_eq!(criteria.title, "");
    /// assert_eq!(criteria.genre, Selection::Id("g1".to_string()));
    /// assert_eq!(criteria.author, Selection::Any);
    /// ```
    #[must_use]
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        Self {
            title: fields.get("title").cloned().unwrap_or_default(),
            genre: Selection::parse(fields.get("genre").map(String::as_str)),
            author: Selection::parse(fields.get("author").map(String::as_str)),
        }
    }

    /// Whether `book` satisfies all three dimensions.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = match &self.genre {
            Selection::Any => true,
            Selection::Id(genre) => book.has_genre(genre),
        };

        let title_match = self.title.trim().is_empty()
            || book.title.to_lowercase().contains(&self.title.to_lowercase());

        let author_match = match &self.author {
            Selection::Any => true,
            Selection::Id(author) => &book.author == author,
        };

        genre_match && title_match && author_match
    }
}

/// Returns the ordered subsequence of `books` accepted by `criteria`.
///
/// # Example
///
/// ```
/// use bookgrid::catalog::{filter, Catalog, FilterCriteria};
///
/// let catalog = Catalog::builtin();
/// let all = filter(&catalog.books, &FilterCriteria::default());
/// assert_eq!(all, catalog.books);
/// ```
#[must_use]
pub fn filter(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let _span = tracing::debug_span!("filter",
        total_books = books.len(),
        title_len = criteria.title.len(),
        genre = %criteria.genre.as_form_value(),
        author = %criteria.author.as_form_value()
    )
    .entered();

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter applied");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
            description: String::new(),
            published: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("b1", "Dune", "herbert", &["scifi"]),
            book("b2", "The Hobbit", "tolkien", &["fantasy", "classic"]),
            book("b3", "Dune Messiah", "herbert", &["scifi"]),
            book("b4", "Neuromancer", "gibson", &["scifi", "cyberpunk"]),
            book("b5", "The Silmarillion", "tolkien", &["fantasy"]),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    fn is_subsequence(sub: &[Book], full: &[Book]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
    }

    #[test]
    fn default_criteria_return_everything_in_order() {
        let books = shelf();
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.genre, Selection::Any);
        assert_eq!(criteria.author, Selection::Any);
        assert_eq!(filter(&books, &criteria), books);
    }

    #[test]
    fn title_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            title: "DUNE".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter(&shelf(), &criteria)), vec!["b1", "b3"]);
    }

    #[test]
    fn whitespace_title_matches_all() {
        let criteria = FilterCriteria {
            title: "   ".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&shelf(), &criteria).len(), 5);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let criteria = FilterCriteria {
            title: "the".to_string(),
            genre: Selection::Id("fantasy".to_string()),
            author: Selection::Id("tolkien".to_string()),
        };
        assert_eq!(ids(&filter(&shelf(), &criteria)), vec!["b2", "b5"]);

        let criteria = FilterCriteria {
            genre: Selection::Id("cyberpunk".to_string()),
            author: Selection::Id("herbert".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filter(&shelf(), &criteria).is_empty());
    }

    #[test]
    fn unknown_genre_yields_nothing() {
        let criteria = FilterCriteria {
            genre: Selection::Id("romance".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filter(&shelf(), &criteria).is_empty());
    }

    #[test]
    fn output_is_always_an_ordered_subsequence() {
        let books = shelf();
        let titles = ["", "dune", "THE", "x", "o"];
        let genres = [None, Some("scifi"), Some("fantasy"), Some("classic")];
        let authors = [None, Some("tolkien"), Some("herbert")];

        for title in titles {
            for genre in genres {
                for author in authors {
                    let criteria = FilterCriteria {
                        title: title.to_string(),
                        genre: Selection::parse(genre),
                        author: Selection::parse(author),
                    };
                    let out = filter(&books, &criteria);
                    assert!(is_subsequence(&out, &books), "{criteria:?}");
                }
            }
        }
    }

    #[test]
    fn absent_form_fields_default_to_any() {
        let fields = BTreeMap::new();
        assert_eq!(FilterCriteria::from_fields(&fields), FilterCriteria::default());

        let mut fields = BTreeMap::new();
        fields.insert("author".to_string(), "any".to_string());
        fields.insert("genre".to_string(), String::new());
        fields.insert("title".to_string(), "hob".to_string());
        let criteria = FilterCriteria::from_fields(&fields);
        assert_eq!(criteria.author, Selection::Any);
        assert_eq!(criteria.genre, Selection::Any);
        assert_eq!(ids(&filter(&shelf(), &criteria)), vec!["b2"]);
    }
}
