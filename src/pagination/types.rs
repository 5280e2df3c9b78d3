//! Pagination input and derived values

use super::calculator::{compute_pages, is_next_disabled, is_prev_disabled};
use serde::Serialize;
use std::num::NonZeroU32;

/// Caller-supplied page position plus the configured page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Page being shown, 1-based
    pub current_page: u32,
    /// Items per page
    pub per_page: NonZeroU32,
}

impl PageState {
    /// Create a page state
    pub fn new(current_page: u32, per_page: NonZeroU32) -> Self {
        Self {
            current_page,
            per_page,
        }
    }

    /// Page the "previous" link targets.
    ///
    /// Page 1 still links to page 0; the link is only marked disabled.
    /// The target saturates at 0, so page 0 also links to page 0.
    pub fn prev_page(&self) -> u32 {
        self.current_page.saturating_sub(1)
    }

    /// Page the "next" link targets
    pub fn next_page(&self) -> u32 {
        self.current_page.saturating_add(1)
    }
}

/// Display values derived from a count and a [`PageState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Derived {
    /// Current page, as given
    pub page: u32,
    /// Total item count
    pub count: u64,
    /// Pages to display; never less than 1
    pub total_pages: u64,
    /// Previous link marked inactive
    pub prev_disabled: bool,
    /// Next link marked inactive
    pub next_disabled: bool,
}

impl Derived {
    /// Derive display values.
    ///
    /// An empty collection is shown as a single empty page, so both links
    /// end up disabled on page 1.
    pub fn new(count: u64, state: &PageState) -> Self {
        let total_pages = compute_pages(count, state.per_page).max(1);
        let page = i64::from(state.current_page);

        Self {
            page: state.current_page,
            count,
            total_pages,
            prev_disabled: is_prev_disabled(page),
            next_disabled: is_next_disabled(page, total_pages),
        }
    }
}
