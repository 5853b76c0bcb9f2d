//! Centralized constants for the Splunk dataset workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed HTTP request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum number of HTTP redirects followed per request.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

// =============================================================================
// Search Job Polling Defaults
// =============================================================================

/// Default interval between job status checks in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default maximum time to wait for a search job to finish, in seconds.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 600;

/// Maximum allowed wait ceiling for a search job, in seconds (24 hours).
pub const MAX_MAX_WAIT_SECS: u64 = 86400;

// =============================================================================
// Partitioning Defaults
// =============================================================================

/// Default maximum number of rows per partition.
pub const DEFAULT_CHUNKSIZE: usize = 5000;

/// Number of leading rows fetched to infer the shared dataset schema.
pub const SCHEMA_SAMPLE_ROWS: usize = 20;
