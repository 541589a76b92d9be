//! Connector error type.
//!
//! Every operation returns `Result<T, ConnectorError>`. The host converts a
//! propagated error into its own protocol error response.

use thiserror::Error;

use crate::remote::RemoteError;

/// Errors returned by connector operations.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Remote platform call failed.
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Remote payload did not match the expected schema.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No category with the requested parent identifier exists.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Request input was rejected before reaching the remote platform.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ConnectorError {
    /// HTTP status of a classified remote failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type alias for `ConnectorError`.
pub type Result<T> = std::result::Result<T, ConnectorError>;
