//! The connector handle the host calls into.
//!
//! Operations live in the `services` module as `impl Connector` blocks, one
//! module per entity kind.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::catalog::CategoryUrlCache;
use crate::config::{CatalogSettings, ConnectorConfig};
use crate::error::Result;
use crate::remote::{OccClient, RemoteClient, RemoteError, RemoteResponse};

/// Entry point for every bridge operation.
///
/// Cheap to clone; clones share the remote client and the category URL
/// cache.
#[derive(Clone)]
pub struct Connector {
    inner: Arc<ConnectorInner>,
}

struct ConnectorInner {
    client: Arc<dyn RemoteClient>,
    settings: CatalogSettings,
    category_cache: Arc<CategoryUrlCache>,
}

impl Connector {
    /// Create a connector over an existing remote client and cache.
    #[must_use]
    pub fn new(
        client: Arc<dyn RemoteClient>,
        settings: CatalogSettings,
        category_cache: Arc<CategoryUrlCache>,
    ) -> Self {
        Self {
            inner: Arc::new(ConnectorInner {
                client,
                settings,
                category_cache,
            }),
        }
    }

    /// Create a connector backed by [`OccClient`] and a fresh cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &ConnectorConfig) -> std::result::Result<Self, RemoteError> {
        let client = OccClient::new(&config.remote)?;
        Ok(Self::new(
            Arc::new(client),
            config.catalog.clone(),
            Arc::new(CategoryUrlCache::new()),
        ))
    }

    /// Catalog settings in effect.
    #[must_use]
    pub fn settings(&self) -> &CatalogSettings {
        &self.inner.settings
    }

    pub(crate) fn client(&self) -> &dyn RemoteClient {
        self.inner.client.as_ref()
    }

    pub(crate) fn category_cache(&self) -> &CategoryUrlCache {
        &self.inner.category_cache
    }

    /// Resolve the request language.
    pub(crate) fn lang<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        self.inner.settings.lang(requested)
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("settings", &self.inner.settings)
            .finish_non_exhaustive()
    }
}

/// Decode a remote response body into its schema.
pub(crate) fn decode<T: DeserializeOwned>(response: RemoteResponse) -> Result<T> {
    Ok(serde_json::from_value(response.data)?)
}
