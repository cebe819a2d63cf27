//! Pagination state (pure).
//!
//! All page changes go through [`PageState::clamp`], so the current page can
//! never leave `[0, last_page]`.

/// Current page position within a result set.
///
/// Invariant: `current <= last_page()`, where
/// `last_page = max(0, ceil(total / page_size) - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    page_size: usize,
    total: u64,
}

impl PageState {
    /// Create page state at page 0 with no known results.
    ///
    /// A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Zero-based current page.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Entries per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Last known total number of matching entries.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages (at least 1, so an empty result still has page 1 of 1).
    pub fn page_count(&self) -> usize {
        self.last_page() + 1
    }

    /// Zero-based index of the last valid page.
    pub fn last_page(&self) -> usize {
        let size = self.page_size as u64;
        let pages = self.total.div_ceil(size);
        usize::try_from(pages.saturating_sub(1)).unwrap_or(usize::MAX)
    }

    /// Clamp `page` into `[0, last_page]`.
    pub fn clamp(&self, page: i64) -> usize {
        if page <= 0 {
            return 0;
        }
        let page = usize::try_from(page).unwrap_or(usize::MAX);
        page.min(self.last_page())
    }

    /// Move by `delta` pages, clamped. Returns the new page.
    pub fn change(&mut self, delta: i64) -> usize {
        let target = i64::try_from(self.current)
            .unwrap_or(i64::MAX)
            .saturating_add(delta);
        self.current = self.clamp(target);
        self.current
    }

    /// Jump to a 1-based page number as typed by the user, clamped.
    pub fn goto_one_based(&mut self, page: i64) -> usize {
        self.current = self.clamp(page.saturating_sub(1));
        self.current
    }

    /// Return to page 0.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Record a fresh total and re-clamp the current page against it.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.current = self.current.min(self.last_page());
    }

    /// `skip` parameter for the current page.
    pub fn skip(&self) -> usize {
        self.current.saturating_mul(self.page_size)
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current < self.last_page()
    }
}
