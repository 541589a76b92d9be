//! Category tree building and the category URL cache.

pub mod cache;
pub mod tree;

pub use cache::CategoryUrlCache;
pub use tree::{
    Subtree, build_flat_list, build_tree, count_categories, find_category,
    find_subtree, strip_unnamed, url_index,
};
