//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Splunk dataset configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment variable into `T`, mapping failures to `InvalidValue`.
fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.config_path().is_none() {
        if let Some(path) = env_var_or_none("SPLUNK_CONFIG_PATH") {
            loader.set_config_path(Some(PathBuf::from(path)));
        }
    }
    if let Some(url) = env_var_or_none("SPLUNK_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("SPLUNK_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("SPLUNK_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(key) = env_var_or_none("SPLUNK_SESSION_KEY") {
        loader.set_session_key(Some(SecretString::new(key.into())));
    }
    if let Some(basic) = parse_env::<bool>("SPLUNK_BASIC_AUTH", "must be true or false")? {
        loader.set_basic_auth(Some(basic));
    }
    if let Some(skip) = parse_env::<bool>("SPLUNK_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("SPLUNK_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(chunksize) =
        parse_env::<usize>("SPLUNK_CHUNKSIZE", "must be a non-negative integer")?
    {
        loader.set_chunksize(Some(chunksize));
    }
    if let Some(ms) = parse_env::<u64>("SPLUNK_POLL_INTERVAL_MS", "must be a number")? {
        loader.set_poll_interval(Some(Duration::from_millis(ms)));
    }
    if let Some(secs) = parse_env::<u64>("SPLUNK_MAX_WAIT", "must be a number")? {
        loader.set_max_wait(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
