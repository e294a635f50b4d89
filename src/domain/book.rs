//! Book records and id → name mappings.
//!
//! A [`Book`] references its author and genres by id; display names live in
//! a [`NameIndex`] owned by the catalog and are never embedded in the book.

use chrono::{DateTime, Datelike, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// A single catalog entry.
///
/// Immutable once loaded. `author` and every entry of `genres` are ids into
/// the catalog's author and genre indexes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    /// Calendar year of publication (UTC).
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Whether the book is tagged with `genre`.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Ordered id → display name mapping.
///
/// Keeps the declaration order of the source document, which is the order
/// selector options are offered in, and answers lookups through a hash index.
///
/// # Example
///
/// ```
/// use bookgrid::domain::NameIndex;
///
/// let index = NameIndex::from_pairs([("g2", "Horror"), ("g1", "Fantasy")]);
/// assert_eq!(index.get("g1"), Some("Fantasy"));
/// assert_eq!(index.iter().next(), Some(("g2", "Horror")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl NameIndex {
    /// Builds an index from `(id, name)` pairs. A repeated id keeps its first
    /// position and takes the last name, matching how a JSON object behaves.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut index = Self::default();
        for (id, name) in pairs {
            index.insert(id.into(), name.into());
        }
        index
    }

    fn insert(&mut self, id: String, name: String) {
        if let Some(&pos) = self.positions.get(&id) {
            self.entries[pos].1 = name;
        } else {
            self.positions.insert(id.clone(), self.entries.len());
            self.entries.push((id, name));
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Iterates `(id, name)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for NameIndex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameIndexVisitor;

        impl<'de> Visitor<'de> for NameIndexVisitor {
            type Value = NameIndex;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping ids to display names")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<NameIndex, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut index = NameIndex::default();
                while let Some((id, name)) = map.next_entry::<String, String>()? {
                    index.insert(id, name);
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(NameIndexVisitor)
    }
}
