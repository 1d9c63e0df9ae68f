//! Pagination arithmetic.
//!
//! `page` counts pages that are already on screen, starting at 1. The first
//! render shows `[0, page_size)` directly and leaves `page == 1`; each "show
//! more" takes [`next_slice`] at the current page and then increments it.

/// Books per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Elements `[page * page_size, (page + 1) * page_size)`, clipped to the input.
///
/// Out-of-range pages produce an empty slice.
pub fn next_slice<T>(matches: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(matches.len());
    let end = page
        .saturating_add(1)
        .saturating_mul(page_size)
        .min(matches.len());
    &matches[start..end]
}

/// The first page, `[0, page_size)`, clipped.
pub fn first_slice<T>(matches: &[T], page_size: usize) -> &[T] {
    next_slice(matches, 0, page_size)
}

/// Items not yet shown after `page` pages: `max(len - page * page_size, 0)`.
pub fn remaining(len: usize, page: usize, page_size: usize) -> usize {
    len.saturating_sub(page.saturating_mul(page_size))
}

/// Number of items on screen after `page` pages.
pub fn rendered(len: usize, page: usize, page_size: usize) -> usize {
    page.saturating_mul(page_size).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_slice_clips_to_len() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(next_slice(&items, 1, 2), &[3, 4]);
        assert_eq!(next_slice(&items, 2, 2), &[5]);
        assert!(next_slice(&items, 3, 2).is_empty());
        assert!(next_slice(&items, usize::MAX, 2).is_empty());
    }

    #[test]
    fn first_slice_is_page_zero() {
        let items = [1, 2, 3];
        assert_eq!(first_slice(&items, 2), &[1, 2]);
        assert_eq!(first_slice(&items, 10), &[1, 2, 3]);
    }

    #[test]
    fn remaining_never_underflows() {
        assert_eq!(remaining(5, 1, 2), 3);
        assert_eq!(remaining(5, 3, 2), 0);
        assert_eq!(remaining(5, 10, 2), 0);
        assert_eq!(remaining(0, 1, 36), 0);
    }

    #[test]
    fn rendered_is_min_of_pages_and_len() {
        assert_eq!(rendered(5, 1, 2), 2);
        assert_eq!(rendered(5, 3, 2), 5);
    }
}
