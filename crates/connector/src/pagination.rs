//! Keyword filtering and page slicing.
//!
//! Two pagination models coexist:
//! - in-memory: the complete collection is fetched, filtered, then sliced
//!   here ([`paginate`])
//! - remote: the platform pages the results and reports totals
//!   ([`remote_page`])

use commerce_bridge_core::{Labelled, Page};

use crate::remote::types::RemotePagination;

/// First page number.
pub const DEFAULT_PAGE: usize = 1;

/// Fixed page size for category lists.
pub const CATEGORY_PAGE_SIZE: usize = 20;

/// Page size requested from the remote platform.
pub const REMOTE_PAGE_SIZE: usize = 20;

/// Keep items whose label contains `keyword`, ignoring case.
///
/// A missing or empty keyword keeps everything.
#[must_use]
pub fn filter_by_keyword<T: Labelled>(keyword: Option<&str>, items: Vec<T>) -> Vec<T> {
    let Some(keyword) = keyword.filter(|k| !k.is_empty()) else {
        return items;
    };

    let needle = keyword.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.label().to_lowercase().contains(&needle))
        .collect()
}

/// Slice one page out of a complete collection.
///
/// `has_next` is `page * page_size <= total`: a page that ends exactly on
/// the last item still reports a next page. Downstream paging relies on
/// this boundary, so it is kept as is.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(DEFAULT_PAGE);
    let total = items.len();
    let start = page_size.saturating_mul(page - 1);
    let has_next = page.saturating_mul(page_size) <= total;

    let items = items.into_iter().skip(start).take(page_size).collect();

    Page::new(items, total, has_next)
}

/// Wrap one remotely paginated page, trusting the remote totals.
#[must_use]
pub fn remote_page<T>(items: Vec<T>, pagination: &RemotePagination, page: usize) -> Page<T> {
    let page = page.max(DEFAULT_PAGE);
    Page::new(items, pagination.total_count, page < pagination.total_pages)
}

/// Zero-based page index the remote platform expects for a one-based page.
#[must_use]
pub const fn remote_page_index(page: usize) -> usize {
    page.saturating_sub(1)
}
