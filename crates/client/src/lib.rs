//! Splunk REST API client for search result retrieval.
//!
//! This crate submits searches to a Splunk search head, waits for the job to
//! finish and pulls result rows back as CSV, parsed into Arrow record batches.
//! Connections authenticate with a pre-established session key, a
//! username/password login or HTTP Basic credentials.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod poll;
pub mod query;
mod serde_helpers;
pub mod table;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AuthHeader, AuthScheme, Credentials, authenticate};
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use error::{ClientError, Result};
pub use models::{JobId, JobStatus, SavedSearch};
pub use poll::{Clock, TokioClock};
pub use query::{normalize_query, redact_query};
pub use table::{ColumnType, ParseOptions, Table, TableError};
