//! The uniform page envelope returned by every list operation.

use serde::{Deserialize, Serialize};

/// A page of results: `{items, total, hasNext}`.
///
/// `total` is either the pre-slice count of an in-memory collection or the
/// count reported by the remote platform, depending on where pagination
/// happened. All three fields are always present, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of matching items across all pages.
    pub total: usize,
    /// Whether the host should offer a next page.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Create a page from its parts.
    #[must_use]
    pub const fn new(items: Vec<T>, total: usize, has_next: bool) -> Self {
        Self {
            items,
            total,
            has_next,
        }
    }

    /// A page holding a complete, unpaginated result set.
    #[must_use]
    pub fn complete(items: Vec<T>) -> Self {
        let total = items.len();
        Self::new(items, total, false)
    }

    /// An empty page.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0, false)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Public URL of a single entity, returned by the URL lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUrl {
    /// Identifier the URL was resolved for.
    pub id: String,
    /// Public-facing URL or path.
    pub url: String,
}
