//! Offset/limit calculation for page-number pagination
//!
//! Out-of-range pages never fail. A page before the first is served as the
//! first page and a page past the end is served as the last page.

use super::types::{effective_page_size, PageWindow};

/// Compute the record window for a page
///
/// A zero `page_size` is replaced by the default page size.
pub fn calculate(page: i64, page_size: u64, total_records: u64) -> PageWindow {
    let page_size = effective_page_size(page_size);
    let num_pages = total_records.div_ceil(page_size).max(1);

    // Everything fits on a single page
    if page_size >= total_records {
        return PageWindow {
            offset: 0,
            limit: total_records,
            num_pages,
        };
    }

    if page < 1 {
        return PageWindow {
            offset: 0,
            limit: page_size - 1,
            num_pages,
        };
    }

    let last_page = num_pages - 1;
    let page = page as u64;

    if page >= last_page {
        let offset = (page_size * last_page).saturating_sub(1);
        return PageWindow {
            offset,
            limit: total_records - offset,
            num_pages,
        };
    }

    PageWindow {
        offset: page_size * page - 1,
        limit: page_size,
        num_pages,
    }
}

/// Check if a page is the last page or beyond it
pub fn is_last_page(page: u64, num_pages: u64) -> bool {
    page >= num_pages.saturating_sub(1)
}
