//! Filter engine: reduces the catalog to the books matching a set of criteria.

use crate::catalog::Book;
use std::fmt;

/// Wildcard value accepted by the author and genre selects.
pub const ANY: &str = "any";

/// Text shown in place of the list when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// A select value: either the wildcard or a concrete identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Parse a raw form value; `"any"` and blank values are the wildcard.
    pub fn parse(raw: &str) -> Self {
        if raw == ANY || raw.is_empty() {
            Selection::Any
        } else {
            Selection::Id(raw.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria built from one search-form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// Build criteria from submitted `(field, value)` pairs.
    ///
    /// Recognized fields are `title`, `author` and `genre`; missing fields act
    /// as wildcards and unknown fields are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();
        for (name, value) in fields {
            match name {
                "title" => criteria.title = value.to_string(),
                "author" => criteria.author = Selection::parse(value),
                "genre" => criteria.genre = Selection::parse(value),
                _ => {}
            }
        }
        criteria
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Id(genre) => book.genres.iter().any(|g| g == genre),
        }
    }

    fn title_matches(&self, book: &Book) -> bool {
        // The contains test uses the untrimmed needle; only the emptiness
        // check trims.
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    fn author_matches(&self, book: &Book) -> bool {
        match &self.author {
            Selection::Any => true,
            Selection::Id(author) => book.author == *author,
        }
    }

    /// True when `book` satisfies every predicate.
    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }
}

/// Positions of the books matching `criteria`, in dataset order.
pub fn filter(books: &[Book], criteria: &FilterCriteria) -> Vec<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| criteria.matches(book))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            image: String::new(),
            author: author.to_string(),
            description: String::new(),
            published: "2000-01-01".to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("1", "The Sea Wolf", "london", &["adventure"]),
            book("2", "White Fang", "london", &["adventure", "animals"]),
            book("3", "Sea of Stories", "rushdie", &["fantasy"]),
            book("4", "Midnight's Children", "rushdie", &["fantasy", "history"]),
        ]
    }

    #[test]
    fn wildcards_return_everything_in_order() {
        let books = shelf();
        assert_eq!(filter(&books, &FilterCriteria::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn title_is_case_insensitive_substring() {
        let books = shelf();
        let criteria = FilterCriteria {
            title: "sEA".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&books, &criteria), vec![0, 2]);
    }

    #[test]
    fn whitespace_title_is_a_wildcard() {
        let books = shelf();
        let criteria = FilterCriteria {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&books, &criteria).len(), books.len());
    }

    #[test]
    fn padded_title_is_not_trimmed_for_matching() {
        let books = shelf();
        let criteria = FilterCriteria {
            title: " fang".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&books, &criteria), vec![1]);

        let criteria = FilterCriteria {
            title: "fang ".to_string(),
            ..Default::default()
        };
        assert!(filter(&books, &criteria).is_empty());
    }

    #[test]
    fn author_and_genre_combine() {
        let books = shelf();
        let criteria = FilterCriteria {
            title: String::new(),
            author: Selection::Id("rushdie".to_string()),
            genre: Selection::Id("history".to_string()),
        };
        assert_eq!(filter(&books, &criteria), vec![3]);
    }

    #[test]
    fn author_requires_exact_match() {
        let books = shelf();
        let criteria = FilterCriteria {
            author: Selection::Id("London".to_string()),
            ..Default::default()
        };
        assert!(filter(&books, &criteria).is_empty());
    }

    #[test]
    fn from_fields_defaults_missing_to_wildcards() {
        let criteria = FilterCriteria::from_fields([("title", "wolf"), ("extra", "x")]);
        assert_eq!(criteria.title, "wolf");
        assert!(criteria.author.is_any());
        assert!(criteria.genre.is_any());

        let criteria = FilterCriteria::from_fields([("author", "any"), ("genre", "fantasy")]);
        assert!(criteria.author.is_any());
        assert_eq!(criteria.genre, Selection::Id("fantasy".to_string()));
        assert!(!criteria.is_unconstrained());
    }
}
