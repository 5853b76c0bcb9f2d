//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request and maps failures into
//! the [`ClientError`](crate::error::ClientError) category of its stage.

mod auth;
mod request;
pub mod search;
pub mod url_encoding;

pub use auth::login;
pub(crate) use request::{RequestFailure, send_request};
pub use search::{create_job, get_job_status, get_results_csv, list_saved_searches};
pub use url_encoding::encode_path_segment;
