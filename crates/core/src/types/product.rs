//! Normalized product shape.

use serde::{Deserialize, Serialize};

use super::Labelled;
use super::id::ProductCode;

/// A product as seen by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code.
    pub id: ProductCode,
    /// Product name.
    pub label: String,
    /// Storefront URL of the product.
    pub extract: String,
    /// Absolute URL of the `thumbnail` image format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Absolute URL of the `product` image format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Labelled for Product {
    fn label(&self) -> &str {
        &self.label
    }
}
