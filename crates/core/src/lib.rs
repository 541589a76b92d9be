//! Commerce Bridge Core - Shared types library.
//!
//! This crate provides the normalized shapes returned to the bridge host:
//! - categories as nested trees or flat lists
//! - content pages and the write body used to create/update them
//! - products with resolved media URLs
//! - the uniform `{items, total, hasNext}` page envelope
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! Remote payload schemas live next to the client in `commerce-bridge-connector`.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, entity shapes, and the page envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
