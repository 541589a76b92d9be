//! Commerce bridge connector.
//!
//! Translates bridge operations (categories, content pages, products) into
//! calls against a commerce platform's OCC and CMS REST APIs and returns
//! results in the bridge's page envelope.
//!
//! # Usage
//!
//! ```rust,ignore
//! use commerce_bridge_connector::{Connector, ConnectorConfig};
//!
//! let config = ConnectorConfig::from_env()?;
//! let connector = Connector::from_config(&config)?;
//!
//! let page = connector.categories(None, Some("camera"), Some("en"), None).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
mod connector;
pub mod conversions;
pub mod error;
pub mod pagination;
pub mod remote;
pub mod resolver;
mod services;

pub use config::{CatalogSettings, ConfigError, ConnectorConfig, RemoteConfig};
pub use connector::Connector;
pub use error::ConnectorError;
