//! Search job operations.
//!
//! # What this module handles:
//! - Creating search jobs
//! - Getting job status
//! - Retrieving one row range of results as CSV
//!
//! # What this module does NOT handle:
//! - Waiting for job completion (see [`crate::poll`])
//! - Saved searches (see [`super::saved`])

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthHeader;
use crate::endpoints::encode_path_segment;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{JobId, JobStatus, SplunkResponse};
use crate::query::redact_query;

/// Create a new search job. `query` is submitted exactly as given.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth: &AuthHeader,
    query: &str,
) -> Result<JobId> {
    // Security: Log only redacted query to avoid exposing sensitive data (tokens, PII, etc.)
    debug!("Creating search job: {}", redact_query(query));

    let url = format!("{}/services/search/jobs", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", auth.value())
        .query(&[("output_mode", "json")])
        .form(&[("search", query)]);
    let response = send_request(builder, "/services/search/jobs")
        .await
        .map_err(|f| ClientError::Submission {
            message: f.message(),
            status: f.status(),
        })?;

    let resp: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ClientError::Submission {
            message: format!("malformed response body: {e}"),
            status: None,
        })?;

    // Splunk can return either:
    // - `{ "sid": "<sid>" }` (common on newer versions / certain output modes)
    // - `{ "entry": [ { "content": { "sid": "<sid>" } } ] }` (older/alternate shape)
    let sid = resp
        .get("sid")
        .and_then(|v| v.as_str())
        .or_else(|| {
            resp.get("entry")?
                .get(0)?
                .get("content")?
                .get("sid")?
                .as_str()
        })
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ClientError::Submission {
            message: "Missing sid in response".to_string(),
            status: None,
        })?;

    debug!("Created search job {}", sid);
    Ok(JobId::new(sid))
}

/// Get the status of a search job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth: &AuthHeader,
    sid: &JobId,
) -> Result<JobStatus> {
    debug!("Getting status for job: {}", sid);

    let poll_error = |message: String, status: Option<u16>| ClientError::Poll {
        sid: sid.to_string(),
        message,
        status,
    };

    let url = format!(
        "{}/services/search/jobs/{}",
        base_url,
        encode_path_segment(sid.as_str())
    );
    let builder = client
        .get(&url)
        .header("Authorization", auth.value())
        .query(&[("output_mode", "json")]);
    let response = send_request(builder, "/services/search/jobs/{sid}")
        .await
        .map_err(|f| poll_error(f.message(), f.status()))?;

    let resp: SplunkResponse<JobStatus> = response
        .json()
        .await
        .map_err(|e| poll_error(format!("Failed to parse job status: {e}"), None))?;

    resp.entry
        .into_iter()
        .next()
        .map(|entry| entry.content)
        .ok_or_else(|| poll_error("job status response has no entry".to_string(), None))
}

/// Get one contiguous row range of a finished job's results as CSV bytes.
///
/// `count = 0` asks Splunk for every row from `offset` onward.
pub async fn get_results_csv(
    client: &Client,
    base_url: &str,
    auth: &AuthHeader,
    sid: &JobId,
    offset: usize,
    count: usize,
) -> Result<Vec<u8>> {
    debug!(sid = %sid, offset, count, "Fetching result range");

    let fetch_error = |message: String, status: Option<u16>| ClientError::Fetch {
        sid: sid.to_string(),
        offset,
        count,
        message,
        status,
    };

    // Trailing slash is part of the results path.
    let url = format!(
        "{}/services/search/jobs/{}/results/",
        base_url,
        encode_path_segment(sid.as_str())
    );
    let builder = client
        .get(&url)
        .header("Authorization", auth.value())
        .query(&[
            ("output_mode", "csv".to_string()),
            ("offset", offset.to_string()),
            ("count", count.to_string()),
        ]);
    let response = send_request(builder, "/services/search/jobs/{sid}/results/")
        .await
        .map_err(|f| fetch_error(f.message(), f.status()))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| fetch_error(format!("failed to read response body: {e}"), None))?;

    debug!(sid = %sid, offset, bytes = body.len(), "Fetched result range");
    Ok(body.to_vec())
}
