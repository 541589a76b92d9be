//! `reqwest` implementation of [`RemoteClient`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;
use tracing::instrument;
use url::Url;

use super::auth::{AccessToken, request_token};
use super::{Endpoint, RemoteClient, RemoteError, RemoteResponse};
use crate::config::RemoteConfig;

/// Client for the commerce platform's OCC and CMS REST APIs.
///
/// # Authentication
///
/// Uses OAuth client credentials. The bearer token is cached in memory and
/// re-requested once it expires or the API answers `401`.
#[derive(Clone)]
pub struct OccClient {
    inner: Arc<OccClientInner>,
}

struct OccClientInner {
    client: reqwest::Client,
    occ_url: Url,
    cms_url: Url,
    auth_url: Url,
    client_id: String,
    client_secret: SecretString,
    /// In-memory token cache
    token: RwLock<Option<AccessToken>>,
}

impl OccClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(OccClientInner {
                client,
                occ_url: config.occ_url.clone(),
                cms_url: config.cms_url.clone(),
                auth_url: config.auth_url.clone(),
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
                token: RwLock::new(None),
            }),
        })
    }

    /// Build the absolute URL for a path on an endpoint.
    fn url(&self, endpoint: Endpoint, path: &str) -> Result<Url, RemoteError> {
        let base = match endpoint {
            Endpoint::Occ => &self.inner.occ_url,
            Endpoint::Cms => &self.inner.cms_url,
        };
        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| RemoteError::InvalidUrl(joined, e))
    }

    /// Return a valid bearer token, requesting a new one if needed.
    async fn access_token(&self) -> Result<SecretString, RemoteError> {
        if let Some(token) = self.inner.token.read().await.as_ref()
            && !token.is_expired()
        {
            return Ok(token.access_token.clone());
        }

        let mut guard = self.inner.token.write().await;

        // Another request may have refreshed while we waited for the lock
        if let Some(token) = guard.as_ref()
            && !token.is_expired()
        {
            return Ok(token.access_token.clone());
        }

        let token = request_token(
            &self.inner.client,
            &self.inner.auth_url,
            &self.inner.client_id,
            &self.inner.client_secret,
        )
        .await?;
        let access_token = token.access_token.clone();
        *guard = Some(token);

        Ok(access_token)
    }

    /// Send a request and classify the response.
    #[instrument(skip(self, body), fields(endpoint = ?endpoint))]
    async fn send(
        &self,
        method: Method,
        endpoint: Endpoint,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RemoteResponse, RemoteError> {
        let url = self.url(endpoint, path)?;
        let token = self.access_token().await?;

        let mut request = self
            .inner
            .client
            .request(method, url)
            .bearer_auth(token.expose_secret())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_text = response.text().await?;
        let data = parse_body(&response_text);

        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                *self.inner.token.write().await = None;
            }
            tracing::warn!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Remote API returned non-success status"
            );
            return Err(RemoteError::Status {
                status: status.as_u16(),
                data,
            });
        }

        Ok(RemoteResponse {
            data,
            status: status.as_u16(),
        })
    }
}

/// Parse a response body, falling back to a JSON string for non-JSON text.
fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

#[async_trait]
impl RemoteClient for OccClient {
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<RemoteResponse, RemoteError> {
        self.send(Method::GET, endpoint, path, None).await
    }

    async fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RemoteResponse, RemoteError> {
        self.send(Method::POST, endpoint, path, Some(body)).await
    }

    async fn put(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RemoteResponse, RemoteError> {
        self.send(Method::PUT, endpoint, path, Some(body)).await
    }

    async fn delete(&self, endpoint: Endpoint, path: &str) -> Result<u16, RemoteError> {
        self.send(Method::DELETE, endpoint, path, None)
            .await
            .map(|response| response.status)
    }
}
