//! Normalized content page shapes.

use serde::{Deserialize, Serialize};

use super::Labelled;
use super::id::ContentPageId;

/// A CMS content page as seen by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPage {
    /// CMS item uuid.
    pub id: ContentPageId,
    /// Page name.
    pub label: String,
    /// Page label on the remote side (its URL path).
    pub extract: String,
}

impl Labelled for ContentPage {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Body of a content page create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPageInput {
    /// Page name.
    pub name: String,
    /// Page label, used by the storefront as the page path.
    pub label: String,
    /// Bridge template name; translated to a remote master template.
    pub template: String,
    /// Whether the page is published.
    #[serde(default)]
    pub visible: bool,
    /// Localized page title.
    #[serde(default)]
    pub title: Option<String>,
}
