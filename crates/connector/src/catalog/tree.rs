//! Category tree construction and search.
//!
//! The remote catalog arrives as an already-nested forest. These functions
//! shape it into bridge trees or flat lists, locate subtrees by parent
//! identifier, and enumerate the URL of every node for the URL cache.

use commerce_bridge_core::{CategoryId, CategoryItem, CategoryNode};
use tracing::warn;

use crate::conversions::{category_url, convert_category_item, convert_category_node, slugify};
use crate::remote::types::RemoteCategory;

/// Outcome of a subtree search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtree<T> {
    /// No category has the requested identifier.
    NotFound,
    /// Children of the matched category (or the whole forest), shaped.
    /// Empty when the category is a leaf.
    Found(Vec<T>),
}

/// Remove categories without a public name, together with their subtrees.
#[must_use]
pub fn strip_unnamed(categories: Vec<RemoteCategory>) -> Vec<RemoteCategory> {
    categories
        .into_iter()
        .filter_map(|mut category| {
            if category.public_name().is_none() {
                warn!(category_id = %category.id, "Skipping category without a name");
                return None;
            }
            category.subcategories = strip_unnamed(std::mem::take(&mut category.subcategories));
            Some(category)
        })
        .collect()
}

/// Build a nested tree. Leaves carry no `children`.
#[must_use]
pub fn build_tree(categories: &[RemoteCategory]) -> Vec<CategoryNode> {
    categories
        .iter()
        .map(|category| convert_category_node(category, build_tree(&category.subcategories)))
        .collect()
}

/// Flatten the forest in pre-order: every node before its descendants.
#[must_use]
pub fn build_flat_list(categories: &[RemoteCategory]) -> Vec<CategoryItem> {
    let mut items = Vec::new();
    push_pre_order(categories, &mut items);
    items
}

fn push_pre_order(categories: &[RemoteCategory], items: &mut Vec<CategoryItem>) {
    for category in categories {
        items.push(convert_category_item(category));
        push_pre_order(&category.subcategories, items);
    }
}

/// Find the first category with `id`, depth-first.
#[must_use]
pub fn find_category<'a>(
    categories: &'a [RemoteCategory],
    id: &str,
) -> Option<&'a RemoteCategory> {
    categories.iter().find_map(|category| {
        if category.id == id {
            Some(category)
        } else {
            find_category(&category.subcategories, id)
        }
    })
}

/// Shape the children of `parent_id` with `shape`, or the whole forest when
/// no parent is given.
///
/// `shape` is [`build_tree`] or [`build_flat_list`].
pub fn find_subtree<T>(
    categories: &[RemoteCategory],
    parent_id: Option<&str>,
    shape: impl FnOnce(&[RemoteCategory]) -> Vec<T>,
) -> Subtree<T> {
    let children = match parent_id {
        Some(id) => match find_category(categories, id) {
            Some(parent) => parent.subcategories.as_slice(),
            None => return Subtree::NotFound,
        },
        None => categories,
    };

    Subtree::Found(shape(children))
}

/// Count every node in a tree, nested children included.
#[must_use]
pub fn count_categories(tree: &[CategoryNode]) -> usize {
    tree.iter()
        .map(|node| 1 + node.children.as_deref().map_or(0, count_categories))
        .sum()
}

/// Enumerate `(id, url)` for every category in the forest.
#[must_use]
pub fn url_index(categories: &[RemoteCategory]) -> Vec<(CategoryId, String)> {
    let mut entries = Vec::new();
    let mut ancestors = Vec::new();
    push_urls(categories, &mut ancestors, &mut entries);
    entries
}

fn push_urls(
    categories: &[RemoteCategory],
    ancestors: &mut Vec<String>,
    entries: &mut Vec<(CategoryId, String)>,
) {
    for category in categories {
        entries.push((
            CategoryId::new(category.id.as_str()),
            category_url(category, ancestors),
        ));

        ancestors.push(slugify(category.public_name().unwrap_or_default()));
        push_urls(&category.subcategories, ancestors, entries);
        ancestors.pop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn category(
        id: &str,
        name: &str,
        subcategories: Vec<RemoteCategory>,
    ) -> RemoteCategory {
        RemoteCategory {
            id: id.to_string(),
            name: Some(name.to_string()),
            url: None,
            subcategories,
        }
    }

    /// Open Catalogue
    /// ├── Cameras
    /// │   ├── Digital Cameras
    /// │   └── Film Cameras
    /// └── Accessories
    ///     └── Camera Bags
    pub(crate) fn sample_forest() -> Vec<RemoteCategory> {
        vec![category(
            "1",
            "Open Catalogue",
            vec![
                category(
                    "571",
                    "Cameras",
                    vec![
                        category("575", "Digital Cameras", vec![]),
                        category("574", "Film Cameras", vec![]),
                    ],
                ),
                category(
                    "585",
                    "Accessories",
                    vec![category("588", "Camera Bags", vec![])],
                ),
            ],
        )]
    }

    fn ids(items: &[CategoryItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_build_tree_omits_empty_children() {
        let tree = build_tree(&sample_forest());
        assert_eq!(tree.len(), 1);

        let cameras = &tree[0].children.as_ref().unwrap()[0];
        assert_eq!(cameras.label, "Cameras");
        let digital = &cameras.children.as_ref().unwrap()[0];
        assert_eq!(digital.children, None);
    }

    #[test]
    fn test_build_flat_list_is_pre_order() {
        let list = build_flat_list(&sample_forest());
        assert_eq!(ids(&list), vec!["1", "571", "575", "574", "585", "588"]);
    }

    #[test]
    fn test_flat_list_and_tree_count_agree() {
        let forest = sample_forest();
        assert_eq!(
            build_flat_list(&forest).len(),
            count_categories(&build_tree(&forest))
        );
        assert_eq!(count_categories(&build_tree(&forest)), 6);
    }

    #[test]
    fn test_find_subtree_as_list() {
        let subtree = find_subtree(&sample_forest(), Some("571"), build_flat_list);
        match subtree {
            Subtree::Found(items) => assert_eq!(ids(&items), vec!["575", "574"]),
            Subtree::NotFound => panic!("571 should be found"),
        }
    }

    #[test]
    fn test_find_subtree_as_tree() {
        let subtree = find_subtree(&sample_forest(), Some("585"), build_tree);
        match subtree {
            Subtree::Found(nodes) => {
                assert_eq!(nodes.len(), 1);
                assert_eq!(nodes[0].id.as_str(), "588");
            }
            Subtree::NotFound => panic!("585 should be found"),
        }
    }

    #[test]
    fn test_find_subtree_distinguishes_missing_from_leaf() {
        let forest = sample_forest();
        assert_eq!(
            find_subtree(&forest, Some("999"), build_flat_list),
            Subtree::NotFound
        );
        assert_eq!(
            find_subtree(&forest, Some("575"), build_flat_list),
            Subtree::Found(vec![])
        );
    }

    #[test]
    fn test_find_subtree_without_parent_uses_whole_forest() {
        let subtree = find_subtree(&sample_forest(), None, build_flat_list);
        match subtree {
            Subtree::Found(items) => assert_eq!(items.len(), 6),
            Subtree::NotFound => panic!("whole forest should be found"),
        }
    }

    #[test]
    fn test_find_category_first_match_wins() {
        let forest = vec![
            category("a", "First", vec![category("dup", "Nested", vec![])]),
            category("dup", "Sibling", vec![]),
        ];
        let found = find_category(&forest, "dup").unwrap();
        assert_eq!(found.name.as_deref(), Some("Nested"));
    }

    #[test]
    fn test_strip_unnamed_removes_node_and_subtree() {
        let forest = vec![category(
            "1",
            "Root",
            vec![
                RemoteCategory {
                    id: "hidden".to_string(),
                    name: None,
                    url: None,
                    subcategories: vec![category("under-hidden", "Child", vec![])],
                },
                category("2", "", vec![]),
                category("3", "Visible", vec![]),
            ],
        )];

        let stripped = strip_unnamed(forest);
        let list = build_flat_list(&stripped);
        assert_eq!(ids(&list), vec!["1", "3"]);
        assert_eq!(count_categories(&build_tree(&stripped)), 2);
    }

    #[test]
    fn test_url_index_derives_hierarchical_urls() {
        let entries = url_index(&sample_forest());
        assert_eq!(entries.len(), 6);

        let (id, url) = &entries[2];
        assert_eq!(id.as_str(), "575");
        assert_eq!(url, "/Open-Catalogue/Cameras/Digital-Cameras/c/575");
    }
}
