//! Pagination module
//!
//! Pure page arithmetic for the listing widget.
//!
//! # Overview
//!
//! Given the aggregate item count and the configured page size, the
//! calculator works out how many pages exist and whether the previous and
//! next links should be marked disabled for the current page. Nothing here
//! is stored; values are derived again on every render.

mod calculator;
mod types;

pub use calculator::{compute_pages, is_next_disabled, is_prev_disabled};
pub use types::{Derived, PageState};
