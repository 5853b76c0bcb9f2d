//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and authentication strategy selection.
//! - Test environment variable handling and precedence.
//! - Test JSON config file loading.
//! - Test validation of timeout, chunksize and polling settings.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod file_tests;
pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
