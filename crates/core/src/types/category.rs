//! Normalized category shapes.

use serde::{Deserialize, Serialize};

use super::Labelled;
use super::id::CategoryId;

/// A category in a nested tree.
///
/// `children` is `None` for leaves and is omitted from the serialized form,
/// so callers must not rely on the key being present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Remote category code.
    pub id: CategoryId,
    /// Display name.
    pub label: String,
    /// Nested subcategories, absent when there are none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CategoryNode>>,
}

/// A category in a flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// Remote category code.
    pub id: CategoryId,
    /// Display name.
    pub label: String,
}

impl Labelled for CategoryNode {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labelled for CategoryItem {
    fn label(&self) -> &str {
        &self.label
    }
}
