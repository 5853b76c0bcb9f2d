//! Error types for the Splunk client.
//!
//! Every variant maps to one stage of the search lifecycle so callers can
//! tell a bad login from a stuck job from a malformed payload. Variants carry
//! the job id, row range and HTTP status when they are known.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or inconsistent connection settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login failed or returned no session key.
    #[error("Authentication failed: {message}{}", fmt_status(.status))]
    Auth {
        message: String,
        status: Option<u16>,
    },

    /// The search job could not be created.
    #[error("Search submission failed: {message}{}", fmt_status(.status))]
    Submission {
        message: String,
        status: Option<u16>,
    },

    /// A job status request failed.
    #[error("Status check for job {sid} failed: {message}{}", fmt_status(.status))]
    Poll {
        sid: String,
        message: String,
        status: Option<u16>,
    },

    /// The job did not finish within the configured ceiling.
    #[error("Job {sid} did not complete within {waited:?}")]
    Timeout { sid: String, waited: Duration },

    /// A result range could not be retrieved.
    #[error(
        "Fetching rows {offset}..{} of job {sid} failed: {message}{}",
        .offset + .count,
        fmt_status(.status)
    )]
    Fetch {
        sid: String,
        offset: usize,
        count: usize,
        message: String,
        status: Option<u16>,
    },

    /// A result payload was not a well-formed table.
    #[error("Failed to parse results{}: {message}", fmt_range(.sid, .offset, .count))]
    Parse {
        sid: Option<String>,
        offset: Option<usize>,
        count: Option<usize>,
        message: String,
    },

    /// Any other API failure (for example listing saved searches).
    #[error("API error{} at {url}: {message}{}", fmt_status(.status), .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    Api {
        status: Option<u16>,
        url: String,
        message: String,
        request_id: Option<String>,
    },
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

fn fmt_range(sid: &Option<String>, offset: &Option<usize>, count: &Option<usize>) -> String {
    match (sid, offset, count) {
        (Some(sid), Some(offset), Some(count)) => {
            format!(" for rows {offset}..{} of job {sid}", offset + count)
        }
        (Some(sid), _, _) => format!(" for job {sid}"),
        _ => String::new(),
    }
}

impl ClientError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::Submission { status, .. }
            | Self::Poll { status, .. }
            | Self::Fetch { status, .. }
            | Self::Api { status, .. } => *status,
            Self::Config(_) | Self::Timeout { .. } | Self::Parse { .. } => None,
        }
    }

    /// Job id this error refers to, if any.
    pub fn sid(&self) -> Option<&str> {
        match self {
            Self::Poll { sid, .. } | Self::Timeout { sid, .. } | Self::Fetch { sid, .. } => {
                Some(sid)
            }
            Self::Parse { sid, .. } => sid.as_deref(),
            _ => None,
        }
    }

    /// Check if this error is a client-side wait timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error indicates authentication failure.
    ///
    /// A 401/403 on any request counts, not only on the login call.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. }) || matches!(self.status(), Some(401) | Some(403))
    }

    /// Attach job and range context to a parse error.
    pub(crate) fn parse_in(sid: &str, offset: usize, count: usize, message: String) -> Self {
        Self::Parse {
            sid: Some(sid.to_string()),
            offset: Some(offset),
            count: Some(count),
            message,
        }
    }
}

impl From<splunk_config::ConfigError> for ClientError {
    fn from(err: splunk_config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
