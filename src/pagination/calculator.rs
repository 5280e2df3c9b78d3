//! Page arithmetic

use std::num::NonZeroU32;

/// Number of pages needed to show `count` items, `per_page` at a time.
///
/// This is plain ceiling division, so an empty collection yields 0 pages.
/// [`Derived`](super::Derived) decides how that is displayed.
pub fn compute_pages(count: u64, per_page: NonZeroU32) -> u64 {
    count.div_ceil(u64::from(per_page.get()))
}

/// Whether the "previous" link is inactive on `page`.
pub fn is_prev_disabled(page: i64) -> bool {
    page < 2
}

/// Whether the "next" link is inactive on `page` out of `total_pages`.
pub fn is_next_disabled(page: i64, total_pages: u64) -> bool {
    // Anything past i64::MAX pages can never be reached by a valid page
    match i64::try_from(total_pages) {
        Ok(total) => page >= total,
        Err(_) => false,
    }
}
