//! Bidirectional category identifier ↔ URL cache.
//!
//! Populated as a side effect of every full category fetch and read by the
//! URL lookup operations. Writes replace the whole index at once; entries are
//! never removed individually and nothing expires.

use std::collections::HashMap;

use commerce_bridge_core::CategoryId;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct UrlIndex {
    url_by_id: HashMap<CategoryId, String>,
    id_by_url: HashMap<String, CategoryId>,
}

/// Process-wide cache of category URLs.
#[derive(Debug, Default)]
pub struct CategoryUrlCache {
    index: RwLock<UrlIndex>,
}

impl CategoryUrlCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry with `entries`.
    ///
    /// Each identifier and each URL appears at most once in either
    /// direction; on a collision the first entry wins.
    pub async fn replace(&self, entries: impl IntoIterator<Item = (CategoryId, String)>) {
        let mut next = UrlIndex::default();

        for (id, url) in entries {
            if next.url_by_id.contains_key(&id) || next.id_by_url.contains_key(&url) {
                warn!(category_id = %id, url = %url, "Duplicate category URL entry ignored");
                continue;
            }
            next.id_by_url.insert(url.clone(), id.clone());
            next.url_by_id.insert(id, url);
        }

        debug!(entries = next.url_by_id.len(), "Category URL cache rebuilt");
        *self.index.write().await = next;
    }

    /// URL of a category.
    pub async fn url_for(&self, id: &CategoryId) -> Option<String> {
        self.index.read().await.url_by_id.get(id).cloned()
    }

    /// Category identifier behind a URL.
    pub async fn id_for(&self, url: &str) -> Option<CategoryId> {
        self.index.read().await.id_by_url.get(url).cloned()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.index.read().await.url_by_id.is_empty()
    }

    /// Number of cached categories.
    pub async fn len(&self) -> usize {
        self.index.read().await.url_by_id.len()
    }
}
