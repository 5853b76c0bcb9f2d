//! JSON config file loading.
//!
//! Responsibilities:
//! - Read an optional JSON config file and apply the values it sets.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Writing config files back to disk.
//!
//! Invariants:
//! - Unknown keys are rejected so typos surface as parse errors.
//! - Parse errors report the serde message, never the file contents.

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    session_key: Option<String>,
    basic_auth: Option<bool>,
    skip_verify: Option<bool>,
    timeout_secs: Option<u64>,
    chunksize: Option<usize>,
    poll_interval_ms: Option<u64>,
    max_wait_secs: Option<u64>,
}

/// Apply values from the loader's config file, if a path was set.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(path) = loader.config_path().cloned() else {
        return Ok(());
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|_| ConfigError::ConfigFileRead { path: path.clone() })?;
    let file: FileConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

    tracing::debug!("Applying config file {}", path.display());

    if file.base_url.is_some() {
        loader.set_base_url(file.base_url);
    }
    if file.username.is_some() {
        loader.set_username(file.username);
    }
    if let Some(password) = file.password {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(key) = file.session_key {
        loader.set_session_key(Some(SecretString::new(key.into())));
    }
    if file.basic_auth.is_some() {
        loader.set_basic_auth(file.basic_auth);
    }
    if file.skip_verify.is_some() {
        loader.set_skip_verify(file.skip_verify);
    }
    if let Some(secs) = file.timeout_secs {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if file.chunksize.is_some() {
        loader.set_chunksize(file.chunksize);
    }
    if let Some(ms) = file.poll_interval_ms {
        loader.set_poll_interval(Some(Duration::from_millis(ms)));
    }
    if let Some(secs) = file.max_wait_secs {
        loader.set_max_wait(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
