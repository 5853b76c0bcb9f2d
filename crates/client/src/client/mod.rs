//! Main Splunk REST API client.
//!
//! A [`SplunkClient`] is one authenticated connection: a base URL plus an
//! auth header fixed when the client is built. All operations take `&self`,
//! so one client can serve many concurrent partition fetches.
//!
//! # Submodules
//! - [`builder`]: Client construction, TLS settings and authentication
//! - `search`: Job submission, status and waiting
//! - `results`: Row-range retrieval and table parsing
//! - `saved`: Saved search listing
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Session refresh; the header is never replaced

pub mod builder;
mod results;
mod saved;
mod search;

use crate::auth::AuthHeader;

/// Splunk REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use splunk_client::SplunkClient;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .credentials("my-session-key".into())
///     .connect()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthHeader,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Build and authenticate a client from loaded configuration.
    pub async fn from_config(config: &splunk_config::Config) -> crate::error::Result<Self> {
        Self::builder().from_config(config).connect().await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The header sent with every request on this connection.
    pub fn auth_header(&self) -> &AuthHeader {
        &self.auth
    }
}
