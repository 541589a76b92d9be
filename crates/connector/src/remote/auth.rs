//! OAuth client-credentials authentication.
//!
//! Exchanges the configured client ID and secret for a bearer token used on
//! every OCC and CMS request.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::RemoteError;

/// Lifetime assumed when the token endpoint omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Bearer token obtained from the OAuth token endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Bearer token for API requests.
    pub access_token: SecretString,
    /// Unix timestamp when the token expires.
    pub expires_at: i64,
}

/// Response from the OAuth token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Error response from the OAuth token endpoint.
#[derive(Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Request a token with the client-credentials grant.
///
/// # Errors
///
/// Returns `RemoteError::AuthenticationFailed` if the endpoint rejects the
/// credentials, or `RemoteError::Http` if the request cannot be sent.
#[instrument(skip(client, client_secret), fields(token_url = %token_url))]
pub async fn request_token(
    client: &reqwest::Client,
    token_url: &Url,
    client_id: &str,
    client_secret: &SecretString,
) -> Result<AccessToken, RemoteError> {
    let now = chrono::Utc::now().timestamp();

    let response = client
        .post(token_url.clone())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret.expose_secret()),
        ])
        .send()
        .await?;

    let status = response.status();

    if status.is_success() {
        let token: TokenResponse = response.json().await?;
        tracing::debug!(expires_in = ?token.expires_in, "Obtained access token");

        return Ok(AccessToken {
            access_token: SecretString::from(token.access_token),
            expires_at: now + token.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS),
        });
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = serde_json::from_str::<TokenErrorResponse>(&error_text)
        .ok()
        .and_then(|e| e.error_description.or(e.error))
        .unwrap_or(error_text);

    Err(RemoteError::AuthenticationFailed(format!(
        "HTTP {status}: {message}"
    )))
}

impl AccessToken {
    /// Check if the token has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        // Consider expired if less than 60 seconds remaining
        now >= self.expires_at - 60
    }
}
