//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod jobs;
pub mod saved_searches;

pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use jobs::{JobId, JobStatus};
pub use saved_searches::{SavedSearch, SavedSearchContent};
