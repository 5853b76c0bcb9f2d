//! Search job models.
//!
//! # What this module handles:
//! - The opaque job identifier returned by job submission
//! - Job status as reported by the job status endpoint
//!
//! # What this module does NOT handle:
//! - Polling logic (see [`crate::poll`])
//! - HTTP transport (see [`crate::endpoints::search`])

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned search job identifier (`sid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(sid: impl Into<String>) -> Self {
        Self(sid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(sid: &str) -> Self {
        Self::new(sid)
    }
}

impl From<String> for JobId {
    fn from(sid: String) -> Self {
        Self(sid)
    }
}

/// Status of a search job, taken from `entry[0].content`.
///
/// `resultCount` is only meaningful once `isDone` is true; Splunk omits it
/// for some job states, in which case it defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct JobStatus {
    #[serde(rename = "isDone", default)]
    pub is_done: bool,
    #[serde(
        rename = "resultCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub result_count: usize,
}

impl JobStatus {
    pub fn done(result_count: usize) -> Self {
        Self {
            is_done: true,
            result_count,
        }
    }

    pub fn running() -> Self {
        Self::default()
    }
}
