//! Search job endpoints.
//!
//! This module provides low-level HTTP endpoints for Splunk search operations.
//!
//! # What this module handles:
//! - Search job creation, status, and CSV results
//! - Listing saved searches
//!
//! # What this module does NOT handle:
//! - Query normalization and polling (see [`crate::client::search`])
//! - Parsing result payloads into tables (see [`crate::table`])

pub mod jobs;
pub mod saved;

pub use jobs::{create_job, get_job_status, get_results_csv};
pub use saved::list_saved_searches;
