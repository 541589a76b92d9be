//! Content page operations against the CMS endpoint.
//!
//! Search is paginated by the remote. Lookups by identifier are strict: one
//! failing page fails the whole batch.

use commerce_bridge_core::{ContentPage, ContentPageId, ContentPageInput, ItemUrl, Page};
use tracing::{info, instrument, warn};
use urlencoding::encode;
use uuid::Uuid;

use crate::connector::{Connector, decode};
use crate::conversions::content_pages::CONTENT_PAGE_TYPE;
use crate::conversions::{convert_content_page, create_payload, update_payload};
use crate::error::{ConnectorError, Result};
use crate::pagination::{DEFAULT_PAGE, REMOTE_PAGE_SIZE, remote_page, remote_page_index};
use crate::remote::Endpoint;
use crate::remote::types::{RemoteContentPage, RemoteContentPageList};
use crate::resolver::{OnItemError, resolve_all};

/// Prefix of generated CMS `uid`s.
const UID_PREFIX: &str = "bridge-page";

fn item_path(id: &ContentPageId) -> String {
    format!("/cmsitems/{}", encode(id.as_str()))
}

/// Reject inputs the CMS would store as unusable pages.
fn validate(input: &ContentPageInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(ConnectorError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }
    if input.label.trim().is_empty() {
        return Err(ConnectorError::InvalidInput(
            "label must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl Connector {
    /// Search content pages by name.
    ///
    /// `total` and `has_next` come from the remote pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the CMS request fails or its response does not
    /// decode.
    #[instrument(skip(self))]
    pub async fn content_pages(
        &self,
        query: Option<&str>,
        lang: Option<&str>,
        page: Option<usize>,
    ) -> Result<Page<ContentPage>> {
        let settings = self.settings();
        let lang = self.lang(lang);
        let page = page.unwrap_or(DEFAULT_PAGE);

        let mut path = format!(
            "/cmsitems?typeCode={}&catalogId={}&catalogVersion={}",
            CONTENT_PAGE_TYPE,
            encode(&settings.content_catalog),
            encode(&settings.content_catalog_version),
        );
        if let Some(mask) = query.filter(|q| !q.trim().is_empty()) {
            path.push_str(&format!("&mask={}", encode(mask)));
        }
        path.push_str(&format!(
            "&pageSize={REMOTE_PAGE_SIZE}&currentPage={}&lang={}",
            remote_page_index(page),
            encode(lang)
        ));

        let response = self.client().get(Endpoint::Cms, &path).await?;
        let list: RemoteContentPageList = decode(response)?;

        let items = list.response.into_iter().map(convert_content_page).collect();
        Ok(remote_page(items, &list.pagination, page))
    }

    /// Resolve content pages by identifier, in the order given.
    ///
    /// # Errors
    ///
    /// Returns the first error any lookup produced; no partial result is
    /// returned.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn content_pages_by_ids(
        &self,
        ids: &[ContentPageId],
        lang: Option<&str>,
    ) -> Result<Page<ContentPage>> {
        let lang = self.lang(lang);
        let items = resolve_all(ids, OnItemError::FailFast, |id| async move {
            self.fetch_content_page(id, lang)
                .await
                .map(|page| Some(convert_content_page(page)))
        })
        .await?;

        Ok(Page::complete(items))
    }

    async fn fetch_content_page(
        &self,
        id: &ContentPageId,
        lang: &str,
    ) -> Result<RemoteContentPage> {
        let path = format!("{}?lang={}", item_path(id), encode(lang));
        let response = self.client().get(Endpoint::Cms, &path).await?;
        decode(response)
    }

    /// Create a content page.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidInput`] for an empty name or label,
    /// or an error if the CMS rejects the page.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_content_page(
        &self,
        input: &ContentPageInput,
        lang: Option<&str>,
    ) -> Result<ContentPage> {
        validate(input)?;

        let uid = format!("{UID_PREFIX}-{}", Uuid::new_v4().simple());
        let payload = create_payload(
            input,
            self.lang(lang),
            self.settings().content_catalog_version_path(),
            uid,
        );

        let response = self
            .client()
            .post(Endpoint::Cms, "/cmsitems", &serde_json::to_value(&payload)?)
            .await?;
        let page = convert_content_page(decode(response)?);

        info!(content_page_id = %page.id, "Content page created");
        Ok(page)
    }

    /// Replace a content page.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidInput`] for an empty name or label,
    /// or an error if the CMS rejects the update.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update_content_page(
        &self,
        id: &ContentPageId,
        input: &ContentPageInput,
        lang: Option<&str>,
    ) -> Result<ContentPage> {
        validate(input)?;

        let payload = update_payload(
            id,
            input,
            self.lang(lang),
            self.settings().content_catalog_version_path(),
        );

        let response = self
            .client()
            .put(Endpoint::Cms, &item_path(id), &serde_json::to_value(&payload)?)
            .await?;
        let page = convert_content_page(decode(response)?);

        info!(content_page_id = %page.id, "Content page updated");
        Ok(page)
    }

    /// Delete a content page.
    ///
    /// # Errors
    ///
    /// Returns an error if the CMS rejects the deletion.
    #[instrument(skip(self))]
    pub async fn delete_content_page(&self, id: &ContentPageId) -> Result<()> {
        let status = self.client().delete(Endpoint::Cms, &item_path(id)).await?;
        info!(content_page_id = %id, status, "Content page deleted");
        Ok(())
    }

    /// Public URL of a content page, which is its remote label.
    ///
    /// A page without a label yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the CMS request fails.
    #[instrument(skip(self))]
    pub async fn content_url(
        &self,
        id: &ContentPageId,
        lang: Option<&str>,
    ) -> Result<Option<ItemUrl>> {
        let page = self.fetch_content_page(id, self.lang(lang)).await?;

        match page.label.filter(|label| !label.trim().is_empty()) {
            Some(url) => Ok(Some(ItemUrl {
                id: page.uuid,
                url,
            })),
            None => {
                warn!(content_page_id = %id, "Content page has no label");
                Ok(None)
            }
        }
    }
}
