//! Static book dataset: records plus the author and genre indexes.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Sample catalog compiled into the binary, used when no dataset is configured.
const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// A single book record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub image: String,
    pub author: String,
    pub description: String,
    pub published: String,
    pub genres: Vec<String>,
}

impl Book {
    /// Four-digit year of the publication date.
    ///
    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else
    /// falls back to a leading run of four digits.
    pub fn published_year(&self) -> Option<i32> {
        use chrono::{DateTime, Datelike, NaiveDate};

        let raw = self.published.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.year());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.year());
        }

        let digits: String = raw.chars().take(4).collect();
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            return digits.parse().ok();
        }
        None
    }
}

/// Ordered identifier-to-name mapping (authors, genres).
///
/// Entries keep the order they had in the source document so that dropdowns
/// list them the way the dataset author wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Replacing keeps the original position.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        match self.positions.get(&id) {
            Some(&pos) => self.entries[pos].1 = name,
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, name)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl<I, N> FromIterator<(I, N)> for NameIndex
where
    I: Into<String>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, N)>>(iter: T) -> Self {
        let mut index = NameIndex::new();
        for (id, name) in iter {
            index.insert(id, name);
        }
        index
    }
}

impl Serialize for NameIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NameIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameIndexVisitor;

        impl<'de> Visitor<'de> for NameIndexVisitor {
            type Value = NameIndex;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of identifiers to display names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<NameIndex, A::Error> {
                let mut index = NameIndex::new();
                while let Some((id, name)) = access.next_entry::<String, String>()? {
                    index.insert(id, name);
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(NameIndexVisitor)
    }
}

/// The full, immutable dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: NameIndex,
    pub genres: NameIndex,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&content)
            .map_err(|e| crate::Error::Dataset(format!("{}: {e}", path.display())))?;

        info!(
            path = %path.display(),
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog bundled with folio.
    pub fn sample() -> crate::Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Look up a book by identifier.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Display name for an author, falling back to the raw identifier.
    pub fn author_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.authors.get(id).unwrap_or(id)
    }

    /// Display name for a genre, falling back to the raw identifier.
    pub fn genre_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.genres.get(id).unwrap_or(id)
    }

    /// `"<author> (<year>)"`, the subtitle shown in the detail view.
    pub fn subtitle(&self, book: &Book) -> String {
        let author = self.author_name(&book.author);
        match book.published_year() {
            Some(year) => format!("{author} ({year})"),
            None => author.to_string(),
        }
    }
}
