//! Type conversion functions between remote payloads and bridge shapes.

pub mod categories;
pub mod content_pages;
pub mod products;

pub use categories::{category_url, convert_category_item, convert_category_node, slugify};
pub use content_pages::{
    convert_content_page, create_payload, map_template, status_for, update_payload,
};
pub use products::convert_product;
