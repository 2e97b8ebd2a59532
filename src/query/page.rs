//! Pagination controller
//!
//! Derives the page count from the filtered size and bounds the
//! requested page. Pages are 1-based. An empty result still reports
//! one page, so the UI shows "page 1 of 1" rather than "of 0".

use std::ops::Range;

/// Fixed number of records per page
pub const PAGE_SIZE: usize = 5;

/// Total pages for a filtered count, floored at 1.
pub fn total_pages(filtered: usize, page_size: usize) -> usize {
    if filtered == 0 {
        1
    } else {
        filtered.div_ceil(page_size)
    }
}

/// Bound a requested page into `[1, total_pages]`.
///
/// Applied before slicing so a filter that shrinks the result set can
/// never leave the caller on a phantom page.
pub fn clamp(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Raw slice range `[(page-1)*size, page*size)` bounded to `len`.
///
/// A page past the end yields an empty range; it never fails.
pub fn bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(5, PAGE_SIZE), 1);
        assert_eq!(total_pages(6, PAGE_SIZE), 2);
        assert_eq!(total_pages(7, PAGE_SIZE), 2);
        assert_eq!(total_pages(10, PAGE_SIZE), 2);
        assert_eq!(total_pages(11, PAGE_SIZE), 3);
    }

    #[test]
    fn test_total_pages_floored_at_one() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
    }

    #[test]
    fn test_total_pages_bound_inequalities() {
        for filtered in 1..=50usize {
            let pages = total_pages(filtered, PAGE_SIZE);
            assert!(pages * PAGE_SIZE >= filtered);
            assert!((pages - 1) * PAGE_SIZE < filtered);
        }
    }

    #[test]
    fn test_clamp_bounds_page() {
        assert_eq!(clamp(0, 3), 1);
        assert_eq!(clamp(1, 3), 1);
        assert_eq!(clamp(3, 3), 3);
        assert_eq!(clamp(9, 3), 3);
        // Degenerate total still lands on page 1
        assert_eq!(clamp(5, 0), 1);
    }

    #[test]
    fn test_bounds_full_and_partial_pages() {
        assert_eq!(bounds(1, PAGE_SIZE, 7), 0..5);
        assert_eq!(bounds(2, PAGE_SIZE, 7), 5..7);
    }

    #[test]
    fn test_bounds_out_of_range_is_empty() {
        let range = bounds(3, PAGE_SIZE, 7);
        assert!(range.is_empty());
        let range = bounds(100, PAGE_SIZE, 7);
        assert!(range.is_empty());
        let range = bounds(2, PAGE_SIZE, 0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_bounds_page_zero_is_empty() {
        assert!(bounds(0, PAGE_SIZE, 7).is_empty());
    }
}
