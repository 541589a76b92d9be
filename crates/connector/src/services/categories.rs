//! Category operations.
//!
//! Every full catalog fetch strips unnamed categories and rebuilds the
//! category URL cache from the result, whatever subtree the caller asked
//! for. URL lookups only fetch when the cache is empty.

use commerce_bridge_core::{CategoryId, CategoryItem, CategoryNode, ItemUrl, Page};
use tracing::{debug, instrument, warn};
use urlencoding::encode;

use crate::catalog::{
    Subtree, build_flat_list, build_tree, count_categories, find_subtree, strip_unnamed, url_index,
};
use crate::connector::{Connector, decode};
use crate::conversions::convert_category_item;
use crate::error::{ConnectorError, Result};
use crate::pagination::{CATEGORY_PAGE_SIZE, DEFAULT_PAGE, filter_by_keyword, paginate};
use crate::remote::Endpoint;
use crate::remote::types::{RemoteCatalogVersion, RemoteCategory};
use crate::resolver::{OnItemError, resolve_all};

impl Connector {
    /// Path of the product catalog version.
    fn catalog_path(&self) -> String {
        let settings = self.settings();
        format!(
            "/catalogs/{}/{}",
            encode(&settings.product_catalog),
            encode(&settings.product_catalog_version)
        )
    }

    /// Fetch the complete category forest and rebuild the URL cache.
    #[instrument(skip(self))]
    async fn fetch_categories(&self, lang: &str) -> Result<Vec<RemoteCategory>> {
        let path = format!("{}?lang={}", self.catalog_path(), encode(lang));
        let response = self.client().get(Endpoint::Occ, &path).await?;
        let catalog: RemoteCatalogVersion = decode(response)?;

        let categories = strip_unnamed(catalog.categories);
        self.category_cache()
            .replace(url_index(&categories))
            .await;

        Ok(categories)
    }

    /// Populate the URL cache if nothing has filled it yet.
    async fn warm_category_cache(&self, lang: &str) -> Result<()> {
        if self.category_cache().is_empty().await {
            debug!("Category URL cache empty, fetching catalog");
            self.fetch_categories(lang).await?;
        }
        Ok(())
    }

    /// List categories under `parent_id` (or all categories), filtered by
    /// `keyword` and paginated.
    ///
    /// The list is pre-order: each category precedes its descendants.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::CategoryNotFound`] if no category has
    /// `parent_id`, or an error if the catalog fetch fails.
    #[instrument(skip(self))]
    pub async fn categories(
        &self,
        parent_id: Option<&CategoryId>,
        keyword: Option<&str>,
        lang: Option<&str>,
        page: Option<usize>,
    ) -> Result<Page<CategoryItem>> {
        let lang = self.lang(lang);
        let categories = self.fetch_categories(lang).await?;

        let items = match find_subtree(
            &categories,
            parent_id.map(CategoryId::as_str),
            build_flat_list,
        ) {
            Subtree::Found(items) => items,
            Subtree::NotFound => return Err(not_found(parent_id)),
        };

        let items = filter_by_keyword(keyword, items);
        Ok(paginate(
            items,
            page.unwrap_or(DEFAULT_PAGE),
            CATEGORY_PAGE_SIZE,
        ))
    }

    /// Category tree under `parent_id` (or the whole forest).
    ///
    /// Trees are not sliced: `total` counts every nested node and `has_next`
    /// is always false.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::CategoryNotFound`] if no category has
    /// `parent_id`, or an error if the catalog fetch fails.
    #[instrument(skip(self))]
    pub async fn category_tree(
        &self,
        parent_id: Option<&CategoryId>,
        lang: Option<&str>,
    ) -> Result<Page<CategoryNode>> {
        let lang = self.lang(lang);
        let categories = self.fetch_categories(lang).await?;

        match find_subtree(&categories, parent_id.map(CategoryId::as_str), build_tree) {
            Subtree::Found(tree) => {
                let total = count_categories(&tree);
                Ok(Page::new(tree, total, false))
            }
            Subtree::NotFound => Err(not_found(parent_id)),
        }
    }

    /// Resolve categories by identifier, in the order given.
    ///
    /// Identifiers that fail to resolve, are unknown to the remote, or name
    /// an unnamed category are dropped.
    ///
    /// # Errors
    ///
    /// Never fails on individual lookups.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn categories_by_ids(
        &self,
        ids: &[CategoryId],
        lang: Option<&str>,
    ) -> Result<Page<CategoryItem>> {
        let lang = self.lang(lang);
        let items = resolve_all(ids, OnItemError::Drop, |id| self.fetch_category(id, lang)).await?;
        Ok(Page::complete(items))
    }

    /// Fetch one category. Unknown identifiers resolve to nothing.
    async fn fetch_category(&self, id: &CategoryId, lang: &str) -> Result<Option<CategoryItem>> {
        let path = format!(
            "{}/categories/{}?lang={}",
            self.catalog_path(),
            encode(id.as_str()),
            encode(lang)
        );

        let response = match self.client().get(Endpoint::Occ, &path).await {
            Ok(response) => response,
            Err(e) if e.is_unknown_identifier() => {
                warn!(category_id = %id, "Category unknown to the remote");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let category: RemoteCategory = decode(response)?;
        if category.public_name().is_none() {
            warn!(category_id = %id, "Skipping category without a name");
            return Ok(None);
        }

        Ok(Some(convert_category_item(&category)))
    }

    /// Public URL of a category, from the URL cache.
    ///
    /// Fetches the catalog only when the cache is empty. A category missing
    /// from the cache yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fetch fails.
    #[instrument(skip(self))]
    pub async fn category_url(
        &self,
        id: &CategoryId,
        lang: Option<&str>,
    ) -> Result<Option<ItemUrl>> {
        self.warm_category_cache(self.lang(lang)).await?;

        match self.category_cache().url_for(id).await {
            Some(url) => Ok(Some(ItemUrl {
                id: id.to_string(),
                url,
            })),
            None => {
                warn!(category_id = %id, "Category not in URL cache");
                Ok(None)
            }
        }
    }

    /// Category behind a public URL, from the URL cache.
    ///
    /// Fetches the catalog only when the cache is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fetch fails.
    #[instrument(skip(self))]
    pub async fn category_id_for_url(
        &self,
        url: &str,
        lang: Option<&str>,
    ) -> Result<Option<ItemUrl>> {
        self.warm_category_cache(self.lang(lang)).await?;

        match self.category_cache().id_for(url).await {
            Some(id) => Ok(Some(ItemUrl {
                id: id.into_inner(),
                url: url.to_string(),
            })),
            None => {
                warn!(url = %url, "URL not in category URL cache");
                Ok(None)
            }
        }
    }
}

fn not_found(parent_id: Option<&CategoryId>) -> ConnectorError {
    ConnectorError::CategoryNotFound(parent_id.map(ToString::to_string).unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::connector::tests::connector;
    use crate::remote::fake::FakeRemote;

    const CATALOG: &str = "/catalogs/electronicsProductCatalog/Online";

    /// Open Catalogue
    /// ├── Cameras
    /// │   ├── Digital Cameras
    /// │   ├── (unnamed)
    /// │   │   └── Hidden Child
    /// │   └── Film Cameras
    /// └── Accessories
    ///     └── Camera Bags
    fn catalog() -> serde_json::Value {
        json!({
            "id": "Online",
            "categories": [{
                "id": "1",
                "name": "Open Catalogue",
                "subcategories": [
                    {
                        "id": "571",
                        "name": "Cameras",
                        "subcategories": [
                            {"id": "575", "name": "Digital Cameras"},
                            {
                                "id": "hidden",
                                "name": "",
                                "subcategories": [{"id": "hidden-child", "name": "Hidden Child"}]
                            },
                            {"id": "574", "name": "Film Cameras"}
                        ]
                    },
                    {
                        "id": "585",
                        "name": "Accessories",
                        "url": "/accessories/c/585",
                        "subcategories": [{"id": "588", "name": "Camera Bags"}]
                    }
                ]
            }]
        })
    }

    fn catalog_remote() -> FakeRemote {
        FakeRemote::new().respond("GET", Endpoint::Occ, CATALOG, catalog())
    }

    fn ids<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
        items.into_iter().map(|id| id.as_ref().to_string()).collect()
    }

    #[tokio::test]
    async fn test_categories_lists_whole_catalog() {
        let (connector, remote) = connector(catalog_remote());

        let page = connector.categories(None, None, Some("de"), None).await.unwrap();

        assert_eq!(
            ids(page.items.iter().map(|c| &c.id)),
            vec!["1", "571", "575", "574", "585", "588"]
        );
        assert_eq!(page.total, 6);
        assert!(!page.has_next);
        assert_eq!(remote.calls(), vec![format!("GET {CATALOG}?lang=de")]);
    }

    #[tokio::test]
    async fn test_categories_under_parent_with_keyword() {
        let (connector, _) = connector(catalog_remote());
        let parent = CategoryId::new("571");

        let page = connector
            .categories(Some(&parent), Some("DIGITAL"), None, None)
            .await
            .unwrap();

        assert_eq!(ids(page.items.iter().map(|c| &c.id)), vec!["575"]);
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_categories_leaf_parent_is_empty_not_missing() {
        let (connector, _) = connector(catalog_remote());
        let leaf = CategoryId::new("575");

        let page = connector.categories(Some(&leaf), None, None, None).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_categories_unknown_parent_is_error() {
        let (connector, _) = connector(catalog_remote());
        let missing = CategoryId::new("999");

        let err = connector
            .categories(Some(&missing), None, None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, ConnectorError::CategoryNotFound(id) if id == "999"));
    }

    #[tokio::test]
    async fn test_category_tree_counts_nested_nodes() {
        let (connector, _) = connector(catalog_remote());

        let page = connector.category_tree(None, None).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 6);
        assert!(!page.has_next);

        let cameras = &page.items[0].children.as_ref().unwrap()[0];
        assert_eq!(
            ids(cameras.children.as_ref().unwrap().iter().map(|c| &c.id)),
            vec!["575", "574"]
        );
    }

    #[tokio::test]
    async fn test_category_tree_under_parent() {
        let (connector, _) = connector(catalog_remote());
        let parent = CategoryId::new("585");

        let page = connector.category_tree(Some(&parent), None).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].label, "Camera Bags");
        assert_eq!(page.items[0].children, None);
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_category_url_fetches_catalog_once() {
        let (connector, remote) = connector(catalog_remote());
        let id = CategoryId::new("575");

        let first = connector.category_url(&id, None).await.unwrap().unwrap();
        let second = connector.category_url(&id, None).await.unwrap().unwrap();

        assert_eq!(first.url, "/Open-Catalogue/Cameras/Digital-Cameras/c/575");
        assert_eq!(first, second);
        assert_eq!(remote.count("GET", CATALOG), 1);
    }

    #[tokio::test]
    async fn test_category_url_and_reverse_lookup_agree() {
        let (connector, remote) = connector(catalog_remote());

        // A list fetch populates the cache for every category
        connector.categories(None, None, None, None).await.unwrap();

        for id in ["1", "571", "575", "574", "585", "588"] {
            let id = CategoryId::new(id);
            let found = connector.category_url(&id, None).await.unwrap().unwrap();
            let reverse = connector
                .category_id_for_url(&found.url, None)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(reverse.id, id.as_str());
        }

        assert_eq!(remote.count("GET", CATALOG), 1);
    }

    #[tokio::test]
    async fn test_category_url_prefers_remote_url() {
        let (connector, _) = connector(catalog_remote());

        let found = connector
            .category_url(&CategoryId::new("585"), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.url, "/accessories/c/585");

        // Children of a remote-url category still derive from the names
        let child = connector
            .category_url(&CategoryId::new("588"), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(child.url, "/Open-Catalogue/Accessories/Camera-Bags/c/588");
    }

    #[tokio::test]
    async fn test_category_url_miss_is_none_without_refetch() {
        let (connector, remote) = connector(catalog_remote());

        connector.categories(None, None, None, None).await.unwrap();
        let missing = connector
            .category_url(&CategoryId::new("nope"), None)
            .await
            .unwrap();

        assert_eq!(missing, None);
        assert_eq!(remote.count("GET", CATALOG), 1);
    }

    #[tokio::test]
    async fn test_category_url_propagates_fetch_failure() {
        let (connector, _) = connector(FakeRemote::new().fail(
            "GET",
            Endpoint::Occ,
            CATALOG,
            503,
            json!({"errors": [{"message": "maintenance"}]}),
        ));

        let err = connector
            .category_url(&CategoryId::new("575"), None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_unnamed_category_is_absent_everywhere() {
        let (connector, _) = connector(catalog_remote());

        let list = connector.categories(None, None, None, None).await.unwrap();
        let tree = connector.category_tree(None, None).await.unwrap();

        for hidden in ["hidden", "hidden-child"] {
            assert!(list.items.iter().all(|c| c.id.as_str() != hidden));
            let id = CategoryId::new(hidden);
            assert_eq!(connector.category_url(&id, None).await.unwrap(), None);
        }
        assert_eq!(list.total, tree.total);
        assert_eq!(tree.total, 6);
    }

    #[tokio::test]
    async fn test_categories_by_ids_drops_failures_in_input_order() {
        let remote = FakeRemote::new()
            .respond(
                "GET",
                Endpoint::Occ,
                &format!("{CATALOG}/categories/585"),
                json!({"id": "585", "name": "Accessories"}),
            )
            .respond(
                "GET",
                Endpoint::Occ,
                &format!("{CATALOG}/categories/571"),
                json!({"id": "571", "name": "Cameras"}),
            )
            .fail(
                "GET",
                Endpoint::Occ,
                &format!("{CATALOG}/categories/broken"),
                500,
                json!({"errors": [{"message": "boom"}]}),
            );
        let (connector, _) = connector(remote);
        let ids_in = [
            CategoryId::new("585"),
            CategoryId::new("broken"),
            CategoryId::new("571"),
        ];

        let page = connector.categories_by_ids(&ids_in, Some("en")).await.unwrap();

        assert_eq!(ids(page.items.iter().map(|c| &c.id)), vec!["585", "571"]);
        assert_eq!(page.total, 2);
        assert!(!page.has_next);
    }

    #[tokio::test]
    async fn test_categories_by_ids_unknown_and_unnamed_resolve_to_nothing() {
        let remote = FakeRemote::new()
            .fail(
                "GET",
                Endpoint::Occ,
                &format!("{CATALOG}/categories/gone"),
                400,
                json!({"errors": [{"type": "UnknownIdentifierError"}]}),
            )
            .respond(
                "GET",
                Endpoint::Occ,
                &format!("{CATALOG}/categories/blank"),
                json!({"id": "blank", "name": "  "}),
            );
        let (connector, _) = connector(remote);

        let page = connector
            .categories_by_ids(&[CategoryId::new("gone"), CategoryId::new("blank")], None)
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_categories_by_ids_all_failing_is_empty_page() {
        let (connector, _) = connector(FakeRemote::new());

        let page = connector
            .categories_by_ids(&[CategoryId::new("a"), CategoryId::new("b")], None)
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
