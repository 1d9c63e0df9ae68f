//! Catalog store: the dataset plus the current filtered, paginated view.

use crate::catalog::{Book, Catalog};
use crate::filter::{self, FilterCriteria};
use crate::pager;
use tracing::debug;

/// Owns the dataset and the view state (`matches`, `page`).
///
/// `matches` only changes through [`CatalogStore::apply_filter`], which also
/// resets `page` to 1; `page` only grows through [`CatalogStore::advance`].
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    matches: Vec<usize>,
    page: usize,
    page_size: usize,
}

impl CatalogStore {
    /// Create a store showing the whole catalog. `page_size` is clamped to 1.
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let matches = (0..catalog.books.len()).collect();
        Self {
            catalog,
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Current matches, in dataset order.
    pub fn matches(&self) -> impl Iterator<Item = &Book> + '_ {
        self.matches.iter().map(|&idx| &self.catalog.books[idx])
    }

    /// Replace the matches with the books satisfying `criteria`; page resets to 1.
    pub fn apply_filter(&mut self, criteria: &FilterCriteria) {
        self.matches = filter::filter(&self.catalog.books, criteria);
        self.page = 1;
        debug!(
            title = %criteria.title,
            author = %criteria.author,
            genre = %criteria.genre,
            unconstrained = criteria.is_unconstrained(),
            matches = self.matches.len(),
            "applied filter"
        );
    }

    /// Books of the first page, `[0, page_size)`.
    pub fn first_page(&self) -> Vec<&Book> {
        self.resolve(pager::first_slice(&self.matches, self.page_size))
    }

    /// Books of the page after the ones already rendered, without advancing.
    pub fn next_page(&self) -> Vec<&Book> {
        self.resolve(pager::next_slice(&self.matches, self.page, self.page_size))
    }

    /// Count one more page as rendered.
    pub fn advance(&mut self) {
        self.page += 1;
    }

    /// Matches not yet rendered.
    pub fn remaining(&self) -> usize {
        pager::remaining(self.matches.len(), self.page, self.page_size)
    }

    /// Matches on screen so far.
    pub fn rendered(&self) -> usize {
        pager::rendered(self.matches.len(), self.page, self.page_size)
    }

    /// Look a book up by identifier in the full dataset.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.catalog.find(id)
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&Book> {
        positions
            .iter()
            .map(|&idx| &self.catalog.books[idx])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;

    fn catalog(n: usize) -> Catalog {
        let mut catalog = Catalog::default();
        catalog.authors.insert("a1", "Author One");
        catalog.authors.insert("a2", "Author Two");
        catalog.genres.insert("g1", "Genre One");
        for i in 0..n {
            catalog.books.push(Book {
                id: format!("b{i}"),
                title: format!("Book {i}"),
                image: String::new(),
                author: if i % 2 == 0 { "a1" } else { "a2" }.to_string(),
                description: String::new(),
                published: "1900-01-01".to_string(),
                genres: vec!["g1".to_string()],
            });
        }
        catalog
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn advance_moves_to_next_page() {
        let mut store = CatalogStore::new(catalog(5), 2);
        assert_eq!(ids(&store.first_page()), vec!["b0", "b1"]);
        assert_eq!(store.remaining(), 3);

        assert_eq!(ids(&store.next_page()), vec!["b2", "b3"]);
        assert_eq!(store.page(), 1);
        store.advance();
        assert_eq!(store.page(), 2);
        assert_eq!(store.remaining(), 1);

        assert_eq!(ids(&store.next_page()), vec!["b4"]);
        store.advance();
        assert_eq!(store.remaining(), 0);
        assert_eq!(store.rendered(), 5);
    }

    #[test]
    fn filter_resets_page() {
        let mut store = CatalogStore::new(catalog(5), 2);
        store.advance();
        store.advance();
        assert_eq!(store.page(), 3);

        store.apply_filter(&FilterCriteria {
            author: Selection::Id("a2".to_string()),
            ..Default::default()
        });
        assert_eq!(store.page(), 1);
        assert_eq!(store.match_count(), 2);
        assert_eq!(store.remaining(), 0);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let store = CatalogStore::new(catalog(3), 0);
        assert_eq!(store.page_size(), 1);
        assert_eq!(store.first_page().len(), 1);
    }
}
