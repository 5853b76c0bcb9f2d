//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from config files, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Each source overwrites only the values it actually provides.
//! - A session key takes precedence over username/password.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::SecretString;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_CHUNKSIZE, DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS,
    MAX_MAX_WAIT_SECS, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, DatasetConfig};

/// Configuration loader that builds config from files, environment variables and flags.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    session_key: Option<SecretString>,
    basic_auth: Option<bool>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    chunksize: Option<usize>,
    poll_interval: Option<Duration>,
    max_wait: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the JSON config file read by [`ConfigLoader::from_file`].
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the JSON config file, if one was set.
    ///
    /// Call this before [`ConfigLoader::from_env`] so environment variables
    /// override file values.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set a pre-established session key.
    pub fn with_session_key(mut self, key: String) -> Self {
        self.session_key = Some(SecretString::new(key.into()));
        self
    }

    /// Send username/password as HTTP Basic credentials instead of logging in.
    pub fn with_basic_auth(mut self, basic: bool) -> Self {
        self.basic_auth = Some(basic);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the per-request HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of rows per partition.
    pub fn with_chunksize(mut self, chunksize: usize) -> Self {
        self.chunksize = Some(chunksize);
        self
    }

    /// Set the interval between job status checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Set the ceiling on waiting for a search job to finish.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let strategy = if let Some(key) = self.session_key {
            AuthStrategy::SessionKey { key }
        } else if let (Some(username), Some(password)) = (self.username, self.password) {
            if self.basic_auth.unwrap_or(false) {
                AuthStrategy::Basic { username, password }
            } else {
                AuthStrategy::SessionToken { username, password }
            }
        } else {
            return Err(ConfigError::MissingAuth);
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        Self::validate_timeout(&connection)?;

        let chunksize = NonZeroUsize::new(self.chunksize.unwrap_or(DEFAULT_CHUNKSIZE))
            .ok_or(ConfigError::InvalidChunksize)?;
        let dataset = DatasetConfig {
            chunksize,
            poll_interval: self
                .poll_interval
                .unwrap_or(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)),
            max_wait: self
                .max_wait
                .unwrap_or(Duration::from_secs(DEFAULT_MAX_WAIT_SECS)),
        };
        Self::validate_polling(&dataset)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
            dataset,
        })
    }

    /// Checks the request timeout is within `1..=MAX_TIMEOUT_SECS` seconds.
    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if connection.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    fn validate_polling(dataset: &DatasetConfig) -> Result<(), ConfigError> {
        if dataset.poll_interval.is_zero() {
            return Err(ConfigError::InvalidPolling {
                message: "poll interval must be greater than 0".to_string(),
            });
        }

        if dataset.max_wait.is_zero() {
            return Err(ConfigError::InvalidPolling {
                message: "max wait must be greater than 0 seconds".to_string(),
            });
        }

        if dataset.max_wait.as_secs() > MAX_MAX_WAIT_SECS {
            return Err(ConfigError::InvalidPolling {
                message: format!(
                    "max wait exceeds maximum allowed value of {} seconds",
                    MAX_MAX_WAIT_SECS
                ),
            });
        }

        Ok(())
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_session_key(&mut self, key: Option<SecretString>) {
        self.session_key = key;
    }

    pub(crate) fn set_basic_auth(&mut self, basic: Option<bool>) {
        self.basic_auth = basic;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_chunksize(&mut self, chunksize: Option<usize>) {
        self.chunksize = chunksize;
    }

    pub(crate) fn set_poll_interval(&mut self, interval: Option<Duration>) {
        self.poll_interval = interval;
    }

    pub(crate) fn set_max_wait(&mut self, max_wait: Option<Duration>) {
        self.max_wait = max_wait;
    }
}

/// Validate that the base URL is an absolute http(s) URL with a host and
/// strip any trailing slash.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:8089): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://localhost:8089), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://localhost:8089)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
