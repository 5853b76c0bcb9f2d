//! Validation tests for timeout, chunksize and polling settings.

use crate::constants::{MAX_MAX_WAIT_SECS, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

fn base() -> ConfigLoader {
    ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_session_key("test-key".to_string())
}

#[test]
fn test_timeout_zero_invalid() {
    match base().with_timeout(Duration::ZERO).build() {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("must be greater than 0"), "got: {message}");
        }
        other => panic!("expected InvalidTimeout, got {other:?}"),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = base()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_valid() {
    let config = base()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}

#[test]
fn test_zero_chunksize_invalid() {
    let result = base().with_chunksize(0).build();
    assert!(matches!(result, Err(ConfigError::InvalidChunksize)));
}

#[test]
fn test_chunksize_one_valid() {
    let config = base().with_chunksize(1).build().unwrap();
    assert_eq!(config.dataset.chunksize.get(), 1);
}

#[test]
fn test_zero_poll_interval_invalid() {
    let result = base().with_poll_interval(Duration::ZERO).build();
    match result {
        Err(ConfigError::InvalidPolling { message }) => {
            assert!(message.contains("poll interval"), "got: {message}");
        }
        other => panic!("expected InvalidPolling, got {other:?}"),
    }
}

#[test]
fn test_zero_max_wait_invalid() {
    let result = base().with_max_wait(Duration::ZERO).build();
    assert!(matches!(result, Err(ConfigError::InvalidPolling { .. })));
}

#[test]
fn test_max_wait_exceeds_max_invalid() {
    let result = base()
        .with_max_wait(Duration::from_secs(MAX_MAX_WAIT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidPolling { .. })));
}

#[test]
#[serial]
fn test_zero_chunksize_via_env_invalid() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("SPLUNK_CHUNKSIZE", Some("0"))], || {
        let result = base().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::InvalidChunksize)));
    });
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn timeout_within_bounds_accepted(secs in 1..=MAX_TIMEOUT_SECS) {
            let config = base().with_timeout(Duration::from_secs(secs)).build().unwrap();
            prop_assert_eq!(config.connection.timeout.as_secs(), secs);
        }

        #[test]
        fn any_positive_chunksize_accepted(chunksize in 1usize..1_000_000) {
            let config = base().with_chunksize(chunksize).build().unwrap();
            prop_assert_eq!(config.dataset.chunksize.get(), chunksize);
        }
    }
}
