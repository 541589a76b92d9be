//! Core types for the commerce bridge.
//!
//! This module provides type-safe wrappers and the normalized entity shapes
//! exchanged with the bridge host.

pub mod category;
pub mod content;
pub mod id;
pub mod page;
pub mod product;

pub use category::{CategoryItem, CategoryNode};
pub use content::{ContentPage, ContentPageInput};
pub use id::*;
pub use page::{ItemUrl, Page};
pub use product::Product;

/// An entity with a human-readable label, used for keyword filtering.
pub trait Labelled {
    /// The label keyword searches match against.
    fn label(&self) -> &str;
}
