//! Product operations against the OCC endpoint.

use commerce_bridge_core::{CategoryId, ItemUrl, Page, Product, ProductCode};
use tracing::{instrument, warn};
use urlencoding::encode;

use crate::connector::{Connector, decode};
use crate::conversions::convert_product;
use crate::error::Result;
use crate::pagination::{DEFAULT_PAGE, REMOTE_PAGE_SIZE, remote_page, remote_page_index};
use crate::remote::Endpoint;
use crate::remote::types::{RemoteProduct, RemoteProductSearch};
use crate::resolver::{OnItemError, resolve_all};

/// OCC search query, restricted to a category when one is given.
///
/// `:` separates the `text:sort:facet:value` parts of the query, so it is
/// replaced with a space in the keyword.
fn search_query(keyword: Option<&str>, category_id: Option<&CategoryId>) -> String {
    let keyword = keyword.unwrap_or_default().replace(':', " ");
    match category_id {
        Some(category) => format!("{keyword}:relevance:allCategories:{category}"),
        None => keyword,
    }
}

fn product_path(code: &ProductCode) -> String {
    format!("/products/{}?fields=FULL", encode(code.as_str()))
}

impl Connector {
    /// Search products by keyword, optionally within a category.
    ///
    /// `total` and `has_next` come from the remote pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the search request fails or its response does
    /// not decode.
    #[instrument(skip(self))]
    pub async fn products(
        &self,
        category_id: Option<&CategoryId>,
        keyword: Option<&str>,
        lang: Option<&str>,
        page: Option<usize>,
    ) -> Result<Page<Product>> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let path = format!(
            "/products/search?query={}&currentPage={}&pageSize={REMOTE_PAGE_SIZE}&fields=FULL&lang={}",
            encode(&search_query(keyword, category_id)),
            remote_page_index(page),
            encode(self.lang(lang)),
        );

        let response = self.client().get(Endpoint::Occ, &path).await?;
        let search: RemoteProductSearch = decode(response)?;

        let media_url = &self.settings().media_url;
        let items = search
            .products
            .into_iter()
            .map(|product| convert_product(product, media_url))
            .collect();

        Ok(remote_page(items, &search.pagination, page))
    }

    /// Resolve products by code, in the order given.
    ///
    /// Codes that fail to resolve are dropped.
    ///
    /// # Errors
    ///
    /// Never fails on individual lookups.
    #[instrument(skip(self), fields(count = codes.len()))]
    pub async fn products_by_ids(&self, codes: &[ProductCode]) -> Result<Page<Product>> {
        let media_url = &self.settings().media_url;
        let items = resolve_all(codes, OnItemError::Drop, |code| async move {
            self.fetch_product(code)
                .await
                .map(|product| Some(convert_product(product, media_url)))
        })
        .await?;

        Ok(Page::complete(items))
    }

    async fn fetch_product(&self, code: &ProductCode) -> Result<RemoteProduct> {
        let response = self.client().get(Endpoint::Occ, &product_path(code)).await?;
        decode(response)
    }

    /// Public URL of a product.
    ///
    /// A product without a URL yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the product request fails.
    #[instrument(skip(self))]
    pub async fn product_url(&self, code: &ProductCode) -> Result<Option<ItemUrl>> {
        let product = self.fetch_product(code).await?;

        match product.url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Ok(Some(ItemUrl {
                id: product.code,
                url,
            })),
            None => {
                warn!(product_code = %code, "Product has no URL");
                Ok(None)
            }
        }
    }
}
