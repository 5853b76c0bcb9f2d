//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration, client and dataset errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use splunk_client::ClientError;
use splunk_config::ConfigError;
use splunk_dataset::DatasetError;

use crate::cancellation::SIGINT_EXIT_CODE;

/// Structured exit codes for splunk-dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure (I/O, output rendering).
    GeneralError = 1,

    /// Missing or invalid configuration.
    ConfigError = 2,

    /// Login rejected, or the server refused the credentials (401/403).
    AuthenticationFailed = 3,

    /// Submission, status or result requests failed, including connection errors.
    RequestFailed = 4,

    /// The search job did not finish within the wait ceiling.
    Timeout = 5,

    /// A result payload was not a well-formed table.
    ParseError = 6,

    /// Partition requested before resolution or outside the partition range.
    StateError = 7,

    /// Interrupted by SIGINT/Ctrl+C.
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }
        match err {
            ClientError::Config(_) => ExitCode::ConfigError,
            ClientError::Auth { .. } => ExitCode::AuthenticationFailed,
            ClientError::Submission { .. }
            | ClientError::Poll { .. }
            | ClientError::Fetch { .. }
            | ClientError::Api { .. } => ExitCode::RequestFailed,
            ClientError::Timeout { .. } => ExitCode::Timeout,
            ClientError::Parse { .. } => ExitCode::ParseError,
        }
    }
}

impl From<&DatasetError> for ExitCode {
    fn from(err: &DatasetError) -> Self {
        match err {
            DatasetError::Client(inner) => Self::from(inner),
            DatasetError::NotResolved | DatasetError::PartitionOutOfRange { .. } => {
                ExitCode::StateError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<DatasetError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
        }
        ExitCode::GeneralError
    }
}
