//! Integration tests for filtering and paging over the bundled catalog.

use folio_core::pager;
use folio_core::{Catalog, CatalogStore, FilterCriteria, Selection};

fn sample() -> Catalog {
    Catalog::sample().expect("bundled catalog should parse")
}

#[test]
fn wildcard_filter_returns_whole_catalog_in_order() {
    let catalog = sample();
    let mut store = CatalogStore::new(catalog.clone(), 4);
    store.apply_filter(&FilterCriteria::default());

    let ids: Vec<&str> = store.matches().map(|b| b.id.as_str()).collect();
    let expected: Vec<&str> = catalog.books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn every_title_substring_finds_its_book() {
    let catalog = sample();
    let mut store = CatalogStore::new(catalog.clone(), 4);

    for book in &catalog.books {
        let chars: Vec<char> = book.title.chars().collect();
        let mid = chars.len() / 2;
        let needle: String = chars[mid.saturating_sub(2)..(mid + 2).min(chars.len())]
            .iter()
            .collect();

        for variant in [needle.to_uppercase(), needle.to_lowercase()] {
            store.apply_filter(&FilterCriteria {
                title: variant.clone(),
                ..Default::default()
            });
            assert!(
                store.matches().any(|b| b.id == book.id),
                "{variant:?} should match {}",
                book.title
            );
            assert_eq!(store.page(), 1);
        }
    }
}

#[test]
fn repeated_show_more_enumerates_each_match_once() {
    let catalog = sample();
    for page_size in 1..=catalog.books.len() + 1 {
        let mut store = CatalogStore::new(catalog.clone(), page_size);
        let mut seen: Vec<String> = store.first_page().iter().map(|b| b.id.clone()).collect();

        while store.remaining() > 0 {
            let before = store.remaining();
            let more: Vec<String> = store.next_page().iter().map(|b| b.id.clone()).collect();
            store.advance();
            assert!(!more.is_empty());
            assert_eq!(store.remaining(), before - more.len());
            seen.extend(more);
        }

        let expected: Vec<String> = catalog.books.iter().map(|b| b.id.clone()).collect();
        assert_eq!(seen, expected, "page_size {page_size}");
    }
}

#[test]
fn next_slice_partitions_matches() {
    let matches: Vec<u32> = (0..11).collect();
    let page_size = 3;
    let mut collected = pager::first_slice(&matches, page_size).to_vec();
    let mut page = 1;

    while pager::remaining(matches.len(), page, page_size) > 0 {
        collected.extend_from_slice(pager::next_slice(&matches, page, page_size));
        page += 1;
    }

    assert_eq!(collected, matches);
    assert!(pager::next_slice(&matches, page, page_size).is_empty());
}

#[test]
fn genre_and_author_filters_on_sample() {
    let mut store = CatalogStore::new(sample(), 36);

    store.apply_filter(&FilterCriteria {
        author: Selection::Id("austen".to_string()),
        genre: Selection::Id("romance".to_string()),
        ..Default::default()
    });
    let ids: Vec<&str> = store.matches().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["pride-and-prejudice", "emma", "persuasion"]);

    store.apply_filter(&FilterCriteria {
        author: Selection::Id("nobody".to_string()),
        ..Default::default()
    });
    assert!(!store.has_matches());
    assert_eq!(store.remaining(), 0);
}

#[test]
fn dataset_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let catalog = sample();
    std::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn malformed_dataset_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{\"books\": 3}").unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, folio_core::Error::Dataset(_)));

    let message = err.to_string();
    assert_eq!(message.matches("Dataset error").count(), 1, "{message}");
    assert!(message.contains("catalog.json"));
}
