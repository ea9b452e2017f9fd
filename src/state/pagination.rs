//! Client-side pagination over a fixed list of rendered items.
//!
//! A list of `len` items split into pages of `page_size` has
//! `ceil(len / page_size)` pages; only the last one may be short. Page `k`
//! shows items `[k * page_size, min(k * page_size + page_size, len))` and
//! hides the rest.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

/// Number of pages needed for `len` items; `0` when `page_size` is zero.
pub fn page_count_for(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

/// Keep the list at the tallest height seen so far so a short last page
/// does not make the layout jump.
pub fn sticky_height(current_px: i32, measured_px: i32) -> i32 {
    current_px.max(measured_px)
}

/// Cursor over the pages of a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    len: usize,
    page_size: usize,
    page: usize,
}

impl Pagination {
    /// Pager on page 0, or `None` when there is nothing to page through
    /// (a single page or less, or a zero page size).
    pub fn new(len: usize, page_size: usize) -> Option<Self> {
        if page_count_for(len, page_size) <= 1 {
            return None;
        }
        Some(Self { len, page_size, page: 0 })
    }

    pub fn page_count(&self) -> usize {
        page_count_for(self.len, self.page_size)
    }

    pub fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    pub fn current(&self) -> usize {
        self.page
    }

    /// Advance one page, stopping at the last page.
    pub fn next(&mut self) -> usize {
        self.page = (self.page + 1).min(self.last_page());
        self.page
    }

    /// Go back one page, stopping at page 0.
    pub fn previous(&mut self) -> usize {
        self.page = self.page.saturating_sub(1);
        self.page
    }

    /// Jump to `page`, clamped to the valid range.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = page.min(self.last_page());
        self.page
    }

    /// Indices of the items shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.page * self.page_size;
        start..(start + self.page_size).min(self.len)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    pub fn previous_disabled(&self) -> bool {
        self.page == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.page == self.last_page()
    }
}
