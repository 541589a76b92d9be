//! Remote commerce platform access.
//!
//! # Architecture
//!
//! - [`RemoteClient`] is the seam between the operations and the transport:
//!   authenticated `get`/`post`/`put`/`delete` against two base endpoints
//! - [`OccClient`] is the `reqwest` implementation with OAuth client
//!   credentials, caching the bearer token in memory until it expires
//! - [`types`] holds the serde schemas of the remote payloads
//!
//! Non-2xx responses surface as [`RemoteError::Status`] carrying the status
//! code and the remote error payload. No retries happen at this layer.

mod auth;
mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod types;

pub use auth::AccessToken;
pub use client::OccClient;

use async_trait::async_trait;
use thiserror::Error;

/// OCC error type reported for codes the platform does not know.
const UNKNOWN_IDENTIFIER_ERROR: &str = "UnknownIdentifierError";

/// Which base URL a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Catalog, category and product endpoints (OCC).
    Occ,
    /// CMS item endpoints.
    Cms,
}

/// A successful remote response.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    /// Parsed JSON body (`Null` for empty bodies).
    pub data: serde_json::Value,
    /// HTTP status code.
    pub status: u16,
}

/// Errors raised by a [`RemoteClient`].
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote returned a non-success status.
    #[error("Remote returned HTTP {status}: {}", describe_payload(.data))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Remote error payload.
        data: serde_json::Value,
    },

    /// Token acquisition failed.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request path could not be joined onto the base URL.
    #[error("Invalid request URL {0}: {1}")]
    InvalidUrl(String, url::ParseError),
}

impl RemoteError {
    /// HTTP status of a classified remote failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Remote error payload of a classified failure.
    #[must_use]
    pub const fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Status { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Whether the remote rejected the request because it does not know
    /// the identifier (`UnknownIdentifierError`).
    #[must_use]
    pub fn is_unknown_identifier(&self) -> bool {
        self.data()
            .and_then(|data| data.get("errors"))
            .and_then(serde_json::Value::as_array)
            .is_some_and(|errors| {
                errors.iter().any(|e| {
                    e.get("type").and_then(serde_json::Value::as_str)
                        == Some(UNKNOWN_IDENTIFIER_ERROR)
                })
            })
    }
}

/// Summarize an error payload for display, preferring remote messages.
fn describe_payload(data: &serde_json::Value) -> String {
    let messages: Vec<&str> = data
        .get("errors")
        .and_then(serde_json::Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(serde_json::Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if !messages.is_empty() {
        return messages.join("; ");
    }

    match data {
        serde_json::Value::Null => "(empty body)".to_string(),
        serde_json::Value::String(s) => s.chars().take(200).collect(),
        other => other.to_string().chars().take(200).collect(),
    }
}

/// Authenticated access to the remote platform.
///
/// Paths are relative to the endpoint's base URL and may carry a query
/// string. Implementations authenticate transparently.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// `GET` a resource.
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<RemoteResponse, RemoteError>;

    /// `POST` a JSON body.
    async fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RemoteResponse, RemoteError>;

    /// `PUT` a JSON body.
    async fn put(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RemoteResponse, RemoteError>;

    /// `DELETE` a resource, returning the response status.
    async fn delete(&self, endpoint: Endpoint, path: &str) -> Result<u16, RemoteError>;
}
