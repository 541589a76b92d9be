//! Connector configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `COMMERCE_OCC_URL` - OCC base URL including the base site
//!   (e.g., `https://api.example.com/occ/v2/electronics`)
//! - `COMMERCE_AUTH_URL` - OAuth token endpoint
//! - `COMMERCE_CLIENT_ID` - OAuth client ID
//! - `COMMERCE_CLIENT_SECRET` - OAuth client secret
//! - `COMMERCE_PRODUCT_CATALOG` - Product catalog ID
//! - `COMMERCE_CONTENT_CATALOG` - Content catalog ID
//! - `COMMERCE_MEDIA_URL` - Base URL prefixed to product media paths
//!
//! ## Optional
//! - `COMMERCE_CMS_URL` - CMS base URL (default: same as `COMMERCE_OCC_URL`)
//! - `COMMERCE_PRODUCT_CATALOG_VERSION` - Product catalog version (default: Online)
//! - `COMMERCE_CONTENT_CATALOG_VERSION` - Content catalog version (default: Staged)
//! - `COMMERCE_DEFAULT_LANG` - Language used when a request names none (default: en)
//! - `COMMERCE_HTTP_TIMEOUT_SECS` - Transport timeout in seconds (default: 30)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Complete connector configuration.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Remote platform connection settings
    pub remote: RemoteConfig,
    /// Catalog and media settings used by the operations
    pub catalog: CatalogSettings,
}

/// Remote platform connection settings.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct RemoteConfig {
    /// OCC (catalog/products) base URL
    pub occ_url: Url,
    /// CMS (content pages) base URL
    pub cms_url: Url,
    /// OAuth token endpoint
    pub auth_url: Url,
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: SecretString,
    /// Per-request transport timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("occ_url", &self.occ_url.as_str())
            .field("cms_url", &self.cms_url.as_str())
            .field("auth_url", &self.auth_url.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Catalog coordinates and media settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Product catalog ID
    pub product_catalog: String,
    /// Product catalog version (e.g., Online)
    pub product_catalog_version: String,
    /// Content catalog ID
    pub content_catalog: String,
    /// Content catalog version (e.g., Staged)
    pub content_catalog_version: String,
    /// Base URL prefixed to relative media paths
    pub media_url: String,
    /// Language used when a request does not name one
    pub default_lang: String,
}

impl CatalogSettings {
    /// Resolve the request language, falling back to the configured default.
    #[must_use]
    pub fn lang<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or(&self.default_lang)
    }

    /// Content catalog version in the `catalog/version` form the CMS expects.
    #[must_use]
    pub fn content_catalog_version_path(&self) -> String {
        format!("{}/{}", self.content_catalog, self.content_catalog_version)
    }
}

impl ConnectorConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid, or
    /// if the client secret looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            remote: RemoteConfig::from_env()?,
            catalog: CatalogSettings::from_env()?,
        })
    }
}

impl RemoteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let occ_url = get_required_url("COMMERCE_OCC_URL")?;
        let cms_url = match get_optional_env("COMMERCE_CMS_URL") {
            Some(value) => parse_url("COMMERCE_CMS_URL", &value)?,
            None => occ_url.clone(),
        };
        let timeout_secs = get_env_or_default("COMMERCE_HTTP_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("COMMERCE_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            occ_url,
            cms_url,
            auth_url: get_required_url("COMMERCE_AUTH_URL")?,
            client_id: get_required_env("COMMERCE_CLIENT_ID")?,
            client_secret: get_validated_secret("COMMERCE_CLIENT_SECRET")?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl CatalogSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let media_url = get_required_url("COMMERCE_MEDIA_URL")?;

        Ok(Self {
            product_catalog: get_required_env("COMMERCE_PRODUCT_CATALOG")?,
            product_catalog_version: get_env_or_default(
                "COMMERCE_PRODUCT_CATALOG_VERSION",
                "Online",
            ),
            content_catalog: get_required_env("COMMERCE_CONTENT_CATALOG")?,
            content_catalog_version: get_env_or_default(
                "COMMERCE_CONTENT_CATALOG_VERSION",
                "Staged",
            ),
            media_url: media_url.as_str().trim_end_matches('/').to_string(),
            default_lang: get_env_or_default("COMMERCE_DEFAULT_LANG", "en"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Get a required environment variable and parse it as a URL.
fn get_required_url(key: &str) -> Result<Url, ConfigError> {
    let value = get_required_env(key)?;
    parse_url(key, &value)
}

/// Parse an absolute http(s) URL.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Validate that a secret is not a placeholder.
fn validate_secret(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    if secret.trim().is_empty() {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }

    let lower = secret.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret(&value, key)?;
    Ok(SecretString::from(value))
}
