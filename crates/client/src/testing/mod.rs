//! Testing utilities for Splunk client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use splunk_client::testing::{ManualClock, load_fixture, load_text_fixture};
//!
//! let job = load_fixture("search/job_status_done.json");
//! let csv = load_text_fixture("search/results_page.csv");
//! let clock = ManualClock::new();
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::poll::Clock;

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let content = load_text_fixture(fixture_path);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim (CSV payloads, raw bodies).
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_text_fixture(path: &str) -> String {
    let full_path = fixture_path(path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// A [`Clock`] whose time only moves when something sleeps on it.
///
/// Every sleep returns immediately, advances the clock by the requested
/// duration and is recorded, so wait loops run instantly and deterministically.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Mutex<Duration>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    /// Move the clock forward without recording a sleep.
    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock().expect("clock lock poisoned") += by;
    }

    /// Total simulated time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().expect("clock lock poisoned")
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("clock lock poisoned").clone()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.sleeps
            .lock()
            .expect("clock lock poisoned")
            .push(duration);
        self.advance(duration);
        std::future::ready(())
    }
}
