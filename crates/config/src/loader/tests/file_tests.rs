//! JSON config file tests.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use serial_test::serial;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use super::env_lock;

pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_file_values_applied() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"{
            "base_url": "https://file.splunk.com:8089",
            "username": "admin",
            "password": "changeme",
            "chunksize": 1000,
            "poll_interval_ms": 250,
            "max_wait_secs": 120,
            "timeout_secs": 10
        }"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(path)
        .from_file()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://file.splunk.com:8089");
    assert_eq!(config.connection.timeout, Duration::from_secs(10));
    assert_eq!(config.dataset.chunksize.get(), 1000);
    assert_eq!(config.dataset.poll_interval, Duration::from_millis(250));
    assert_eq!(config.dataset.max_wait, Duration::from_secs(120));
    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::SessionToken { .. }
    ));
}

#[test]
fn test_no_config_path_is_noop() {
    let loader = ConfigLoader::new().from_file().unwrap();
    assert!(matches!(loader.build(), Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.json"))
        .from_file();
    assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), r#"{"chunk_size": 10}"#);

    let result = ConfigLoader::new().with_config_path(path).from_file();
    match result {
        Err(ConfigError::ConfigFileParse { message, .. }) => {
            assert!(message.contains("chunk_size"), "got: {message}");
        }
        Err(other) => panic!("expected ConfigFileParse, got {other}"),
        Ok(_) => panic!("expected ConfigFileParse, got Ok"),
    }
}

#[test]
fn test_parse_error_does_not_leak_password() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), r#"{"password": "hunter2", "#);

    let err = match ConfigLoader::new().with_config_path(path).from_file() {
        Err(e) => e,
        Ok(_) => panic!("expected parse error"),
    };
    assert!(!err.to_string().contains("hunter2"));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"{"base_url": "https://file.splunk.com", "session_key": "file-key", "chunksize": 10}"#,
    );

    temp_env::with_vars(
        [
            ("SPLUNK_CHUNKSIZE", Some("20")),
            ("SPLUNK_BASE_URL", None),
            ("SPLUNK_SESSION_KEY", None),
            ("SPLUNK_CONFIG_PATH", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_config_path(path.clone())
                .from_file()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://file.splunk.com");
            assert_eq!(config.dataset.chunksize.get(), 20);
        },
    );
}
