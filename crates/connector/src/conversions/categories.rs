//! Category conversion functions.

use commerce_bridge_core::{CategoryId, CategoryItem, CategoryNode};

use crate::remote::types::RemoteCategory;

/// Label of a category; unnamed categories are stripped before conversion.
fn label(category: &RemoteCategory) -> String {
    category.public_name().unwrap_or_default().to_string()
}

/// Convert a category to its list shape.
#[must_use]
pub fn convert_category_item(category: &RemoteCategory) -> CategoryItem {
    CategoryItem {
        id: CategoryId::new(category.id.as_str()),
        label: label(category),
    }
}

/// Convert a category to its tree shape with already-converted children.
///
/// An empty child list becomes `None`.
#[must_use]
pub fn convert_category_node(
    category: &RemoteCategory,
    children: Vec<CategoryNode>,
) -> CategoryNode {
    CategoryNode {
        id: CategoryId::new(category.id.as_str()),
        label: label(category),
        children: (!children.is_empty()).then_some(children),
    }
}

/// Turn a category name into a URL path segment.
///
/// Runs of non-alphanumeric characters collapse into a single `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Public URL of a category.
///
/// Uses the remote `url` when present, otherwise builds
/// `/{ancestor slugs}/{slug}/c/{id}` from the hierarchy.
#[must_use]
pub fn category_url(category: &RemoteCategory, ancestors: &[String]) -> String {
    if let Some(url) = category.url.as_deref().filter(|url| !url.trim().is_empty()) {
        return url.to_string();
    }

    let mut path = String::new();
    let own = slugify(category.public_name().unwrap_or_default());
    for segment in ancestors.iter().chain(std::iter::once(&own)) {
        if !segment.is_empty() {
            path.push('/');
            path.push_str(segment);
        }
    }

    format!("{path}/c/{}", urlencoding::encode(&category.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str, url: Option<&str>) -> RemoteCategory {
        RemoteCategory {
            id: id.to_string(),
            name: Some(name.to_string()),
            url: url.map(str::to_string),
            subcategories: vec![],
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Digital Cameras"), "Digital-Cameras");
        assert_eq!(slugify("  Film & Lenses!  "), "Film-Lenses");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_category_url_prefers_remote_url() {
        let c = category(
            "575",
            "Digital Cameras",
            Some("/Open-Catalogue/Cameras/Digital-Cameras/c/575"),
        );
        assert_eq!(
            category_url(&c, &["ignored".to_string()]),
            "/Open-Catalogue/Cameras/Digital-Cameras/c/575"
        );
    }

    #[test]
    fn test_category_url_derived_from_ancestors() {
        let c = category("575", "Digital Cameras", None);
        let ancestors = vec!["Open-Catalogue".to_string(), "Cameras".to_string()];
        assert_eq!(
            category_url(&c, &ancestors),
            "/Open-Catalogue/Cameras/Digital-Cameras/c/575"
        );
        assert_eq!(category_url(&c, &[]), "/Digital-Cameras/c/575");
    }

    #[test]
    fn test_node_without_children_has_none() {
        let node = convert_category_node(&category("1", "Root", None), vec![]);
        assert_eq!(node.children, None);
        assert_eq!(node.label, "Root");
    }
}
