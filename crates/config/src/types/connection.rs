//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, request timeout).
//! - Define the main `Config` structure combining connection, auth and dataset settings.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values are provided via `Default` impls, not magic numbers.
//! - TLS certificate validation is on unless `skip_verify` is set explicitly.

use crate::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use crate::types::dataset::DatasetConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for a Splunk server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk management port (e.g., https://localhost:8089)
    pub base_url: String,
    /// Skip TLS certificate validation (self-signed deployments only)
    pub skip_verify: bool,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Connection settings for `base_url` with default timeout and TLS validation on.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new(format!("https://localhost:{}", DEFAULT_SPLUNK_PORT))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Partitioning and polling settings
    pub dataset: DatasetConfig,
}

impl Config {
    /// Create a config that authenticates with a pre-established session key.
    pub fn with_session_key(base_url: String, key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::SessionKey { key },
            },
            dataset: DatasetConfig::default(),
        }
    }

    /// Create a config that logs in with username/password to obtain a session key.
    pub fn with_login(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::SessionToken { username, password },
            },
            dataset: DatasetConfig::default(),
        }
    }
}
