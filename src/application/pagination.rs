//! Page-window pagination over a filtered post sequence.
//!
//! The listing view exposes the first `page * page_size` entries of the
//! filtered sequence; the append endpoint serves one page window at a time.

use std::{num::NonZeroUsize, ops::Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroUsize,
    page_size: NonZeroUsize,
}

impl PageRequest {
    pub fn new(page: NonZeroUsize, page_size: NonZeroUsize) -> Self {
        Self { page, page_size }
    }

    /// First page for the given page size.
    pub fn first(page_size: NonZeroUsize) -> Self {
        Self {
            page: NonZeroUsize::MIN,
            page_size,
        }
    }

    /// Clamp an untrusted 1-based page number; zero falls back to one.
    pub fn from_raw(page: usize, page_size: NonZeroUsize) -> Self {
        Self {
            page: NonZeroUsize::new(page).unwrap_or(NonZeroUsize::MIN),
            page_size,
        }
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `min(page * page_size, total)` entries are visible after this page.
    pub fn visible_count(&self, total: usize) -> usize {
        self.page()
            .saturating_mul(self.page_size())
            .min(total)
    }

    /// True iff the filtered sequence extends past the visible set.
    pub fn has_more(&self, total: usize) -> bool {
        self.page().saturating_mul(self.page_size()) < total
    }

    /// The window of indices this page alone contributes.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = (self.page() - 1).saturating_mul(self.page_size()).min(total);
        start..self.visible_count(total)
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: usize, size: usize) -> PageRequest {
        PageRequest::from_raw(page, NonZeroUsize::new(size).expect("non-zero size"))
    }

    #[test]
    fn visible_count_is_min_of_window_and_total() {
        assert_eq!(request(1, 6).visible_count(6), 6);
        assert_eq!(request(1, 6).visible_count(14), 6);
        assert_eq!(request(2, 6).visible_count(14), 12);
        assert_eq!(request(3, 6).visible_count(14), 14);
        assert_eq!(request(9, 6).visible_count(14), 14);
    }

    #[test]
    fn has_more_iff_window_short_of_total() {
        assert!(!request(1, 6).has_more(6));
        assert!(request(1, 6).has_more(7));
        assert!(request(2, 6).has_more(13));
        assert!(!request(3, 6).has_more(13));
    }

    #[test]
    fn window_covers_one_page_slice() {
        assert_eq!(request(1, 6).window(14), 0..6);
        assert_eq!(request(2, 6).window(14), 6..12);
        assert_eq!(request(3, 6).window(14), 12..14);
        assert_eq!(request(4, 6).window(14), 14..14);
    }

    #[test]
    fn zero_page_clamps_to_first() {
        assert_eq!(request(0, 6).page(), 1);
    }

    #[test]
    fn next_advances_one_page() {
        assert_eq!(request(1, 6).next(), request(2, 6));
    }
}
