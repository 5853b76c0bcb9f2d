//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//! - Resolving credentials into an auth header, logging in when needed
//!
//! # Invariants
//! - `base_url` and `credentials` are required and must be provided before calling `connect()`
//! - The base URL is always normalized to have no trailing slashes
//! - TLS verification is on unless `skip_verify(true)` is set on this builder;
//!   the setting only affects the client being built

use std::time::Duration;

use crate::auth::{AuthHeader, Credentials, authenticate};
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};
use splunk_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`SplunkClient`].
///
/// # Example
///
/// ```rust,ignore
/// use splunk_client::SplunkClient;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .credentials(("admin", "changeme").into())
///     .timeout(Duration::from_secs(60))
///     .connect()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Splunk server.
    ///
    /// This should include the protocol and port, e.g., `https://localhost:8089`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials the connection authenticates with.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification for this client.
    ///
    /// # Security Warning
    /// Only use this against self-signed development deployments. Disabling
    /// TLS verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::from(&config.auth.strategy));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    fn build_http(&self, base_url: &str) -> Result<reqwest::Client> {
        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                tracing::warn!("TLS certificate verification disabled for {}", base_url);
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        http_builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))
    }

    /// Build the client with an already-resolved auth header. No network call.
    pub fn build_with_header(self, auth: AuthHeader) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .clone()
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::Config("base_url is required".to_string()))?;
        let http = self.build_http(&base_url)?;

        Ok(SplunkClient {
            http,
            base_url,
            auth,
        })
    }

    /// Build the client and authenticate.
    ///
    /// Only [`Credentials::Login`] performs a network call (one login request).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `base_url` or `credentials` was not provided.
    /// Returns [`ClientError::Auth`] if login fails.
    pub async fn connect(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .clone()
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::Config("base_url is required".to_string()))?;
        let credentials = self
            .credentials
            .clone()
            .ok_or_else(|| ClientError::Config("credentials are required".to_string()))?;

        let http = self.build_http(&base_url)?;
        let auth = authenticate(&http, &base_url, &credentials).await?;
        tracing::debug!(scheme = %auth.scheme(), "Connection authenticated");

        Ok(SplunkClient {
            http,
            base_url,
            auth,
        })
    }
}
