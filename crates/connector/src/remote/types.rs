//! Serde schemas for remote OCC and CMS payloads.
//!
//! Fields the transformers cannot do without are required; everything else
//! is optional or defaulted so partially populated payloads still decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// A catalog version with its full category forest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCatalogVersion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub categories: Vec<RemoteCategory>,
}

/// A category with its nested subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCategory {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<RemoteCategory>,
}

impl RemoteCategory {
    /// The category name, if it has a non-blank one.
    #[must_use]
    pub fn public_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

// =============================================================================
// CMS
// =============================================================================

/// CMS approval status of a page.
///
/// Statuses this crate does not know decode as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Approved,
    Unapproved,
    Check,
    CheckRequired,
    #[serde(other)]
    Unknown,
}

/// CMS lifecycle status of a page.
///
/// Statuses this crate does not know decode as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    Active,
    Deleted,
    #[serde(other)]
    Unknown,
}

/// A CMS content page item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteContentPage {
    pub uuid: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub master_template: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default)]
    pub page_status: Option<PageStatus>,
    /// Localized titles keyed by language.
    #[serde(default)]
    pub title: BTreeMap<String, String>,
}

/// A page of CMS items.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteContentPageList {
    #[serde(default)]
    pub response: Vec<RemoteContentPage>,
    #[serde(default)]
    pub pagination: RemotePagination,
}

// =============================================================================
// Products
// =============================================================================

/// A product image in one format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteImage {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
    pub url: String,
}

/// A product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProduct {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Vec<RemoteImage>,
}

/// A product search result page.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProductSearch {
    #[serde(default)]
    pub products: Vec<RemoteProduct>,
    #[serde(default)]
    pub pagination: RemotePagination,
}

// =============================================================================
// Pagination
// =============================================================================

/// Remote-reported pagination.
///
/// OCC reports `totalResults`, the CMS reports `totalCount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePagination {
    #[serde(default, alias = "totalResults")]
    pub total_count: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default, alias = "page")]
    pub current_page: Option<usize>,
    #[serde(default, alias = "count")]
    pub page_size: Option<usize>,
}
