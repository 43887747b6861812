//! Display-only pagination.
//!
//! "Load more" keeps every previously shown report on screen, so page `n`
//! exposes the first `n × PAGE_SIZE` elements rather than a disjoint
//! window. The page counter starts at 1.

/// Number of reports revealed per page.
pub const PAGE_SIZE: usize = 10;

/// Returns the visible prefix of the list for the given page counter.
#[must_use]
pub fn visible<T>(items: &[T], page: usize) -> &[T] {
    let end = page.saturating_mul(PAGE_SIZE).min(items.len());
    &items[..end]
}

/// Returns whether another "load more" would reveal more items.
#[must_use]
pub fn has_more<T>(items: &[T], page: usize) -> bool {
    visible(items, page).len() < items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_shows_ten_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(visible(&items, 1), &items[..10]);
        assert!(has_more(&items, 1));
    }

    #[test]
    fn load_more_is_monotonic_and_bounded() {
        let items: Vec<u32> = (0..25).collect();
        let mut previous = 0;
        for page in 1..=5 {
            let shown = visible(&items, page).len();
            assert!(shown >= previous);
            assert!(shown <= items.len());
            previous = shown;
        }
        assert_eq!(visible(&items, 3).len(), 25);
        assert!(!has_more(&items, 3));
    }

    #[test]
    fn short_lists_fit_on_one_page() {
        let items: Vec<u32> = (0..4).collect();
        assert_eq!(visible(&items, 1).len(), 4);
        assert!(!has_more(&items, 1));
    }

    #[test]
    fn page_zero_shows_nothing() {
        let items: Vec<u32> = (0..4).collect();
        assert!(visible(&items, 0).is_empty());
    }

    #[test]
    fn huge_page_counter_does_not_overflow() {
        let items: Vec<u32> = (0..4).collect();
        assert_eq!(visible(&items, usize::MAX).len(), 4);
    }
}
