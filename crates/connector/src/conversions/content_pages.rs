//! Content page conversion functions.
//!
//! Read direction maps CMS items to [`ContentPage`]; write direction builds
//! the CMS item body for create and update requests.

use std::collections::BTreeMap;

use commerce_bridge_core::{ContentPage, ContentPageId, ContentPageInput};
use serde::Serialize;

use crate::remote::types::{ApprovalStatus, PageStatus, RemoteContentPage};

/// CMS type code of content pages.
pub const CONTENT_PAGE_TYPE: &str = "ContentPage";

/// Bridge template name to remote master template.
const TEMPLATE_NAMES: &[(&str, &str)] = &[
    ("content-page", "ContentPage1Template"),
    ("content-page-sidebar", "ContentPage2Template"),
    ("landing-page", "LandingPage2Template"),
    ("faq-page", "FaqPageTemplate"),
];

/// Translate a bridge template name into a remote master template name.
///
/// Unmapped names pass through unchanged.
#[must_use]
pub fn map_template(name: &str) -> &str {
    TEMPLATE_NAMES
        .iter()
        .find(|&&(bridge, _)| bridge == name)
        .map_or(name, |&(_, remote)| remote)
}

/// Approval and page status encoding the bridge's visibility flag.
#[must_use]
pub const fn status_for(visible: bool) -> (ApprovalStatus, PageStatus) {
    if visible {
        (ApprovalStatus::Approved, PageStatus::Active)
    } else {
        (ApprovalStatus::Unapproved, PageStatus::Deleted)
    }
}

/// Convert a CMS item to a content page.
#[must_use]
pub fn convert_content_page(page: RemoteContentPage) -> ContentPage {
    ContentPage {
        id: ContentPageId::new(page.uuid),
        label: page.name.unwrap_or_default(),
        extract: page.label.unwrap_or_default(),
    }
}

/// CMS item body for a content page write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPagePayload {
    pub type_code: &'static str,
    pub itemtype: &'static str,
    pub catalog_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    pub label: String,
    pub master_template: String,
    pub approval_status: ApprovalStatus,
    pub page_status: PageStatus,
    pub title: BTreeMap<String, String>,
    pub default_page: bool,
}

impl ContentPagePayload {
    fn from_input(input: &ContentPageInput, lang: &str, catalog_version: String) -> Self {
        let (approval_status, page_status) = status_for(input.visible);
        let title = input
            .title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&input.name);

        Self {
            type_code: CONTENT_PAGE_TYPE,
            itemtype: CONTENT_PAGE_TYPE,
            catalog_version,
            uuid: None,
            uid: None,
            name: input.name.clone(),
            label: input.label.clone(),
            master_template: map_template(&input.template).to_string(),
            approval_status,
            page_status,
            title: BTreeMap::from([(lang.to_string(), title.to_string())]),
            default_page: true,
        }
    }
}

/// Build the body of a create request.
#[must_use]
pub fn create_payload(
    input: &ContentPageInput,
    lang: &str,
    catalog_version: String,
    uid: String,
) -> ContentPagePayload {
    ContentPagePayload {
        uid: Some(uid),
        ..ContentPagePayload::from_input(input, lang, catalog_version)
    }
}

/// Build the body of an update request for an existing item.
#[must_use]
pub fn update_payload(
    id: &ContentPageId,
    input: &ContentPageInput,
    lang: &str,
    catalog_version: String,
) -> ContentPagePayload {
    ContentPagePayload {
        uuid: Some(id.to_string()),
        ..ContentPagePayload::from_input(input, lang, catalog_version)
    }
}
