use std::ops::RangeInclusive;

use crate::page_count;

/// How many numbered page buttons the footer offers
pub const MAX_NUMBERED_PAGES: usize = 5;

/// State behind the Previous / 1..5 / Next footer.
///
/// The current page is taken as given; every navigation clamps the result
/// into `1..=page_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_count: usize,
}

impl Pager {
    pub fn at(page: usize, page_count: usize) -> Self {
        Self {
            page,
            page_count: page_count.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn previous(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.page.saturating_add(1));
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count);
    }

    /// Pull the current page back into range, e.g. after rows were removed.
    pub fn clamp(&mut self) {
        self.go_to(self.page);
    }

    /// Search text or sort order changed: start over at the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Only `total` rows are left in the view; recount the pages and clamp.
    pub fn shrink_to(&mut self, total: usize) {
        self.page_count = page_count(total);
        self.clamp();
    }

    /// Pages offered as direct-jump buttons. Pages past the fifth are only
    /// reachable through [`Pager::next`].
    pub fn numbered_pages(&self) -> RangeInclusive<usize> {
        1..=self.page_count.min(MAX_NUMBERED_PAGES)
    }
}
