//! Search job submission and completion.

use std::time::Duration;
use tracing::{debug, info};

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{JobId, JobStatus};
use crate::poll::{self, Clock, TokioClock};
use crate::query::{normalize_query, redact_query};

impl SplunkClient {
    /// Normalize `query` and submit it as a new search job.
    ///
    /// A blank query is rejected before any request is sent.
    pub async fn submit(&self, query: &str) -> Result<JobId> {
        if query.trim().is_empty() {
            return Err(ClientError::Submission {
                message: "query is empty".to_string(),
                status: None,
            });
        }

        let normalized = normalize_query(query);
        info!("Submitting search {}", redact_query(&normalized));
        endpoints::create_job(&self.http, &self.base_url, &self.auth, &normalized).await
    }

    /// Check a job's status once.
    pub async fn poll_once(&self, sid: &JobId) -> Result<JobStatus> {
        endpoints::get_job_status(&self.http, &self.base_url, &self.auth, sid).await
    }

    /// Poll until the job is done or `timeout` elapses, using wall-clock time.
    pub async fn wait_until_done(
        &self,
        sid: &JobId,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<JobStatus> {
        self.wait_until_done_with_clock(sid, poll_interval, timeout, &TokioClock)
            .await
    }

    /// Poll until the job is done or `timeout` elapses, reading time from `clock`.
    pub async fn wait_until_done_with_clock<C: Clock>(
        &self,
        sid: &JobId,
        poll_interval: Duration,
        timeout: Duration,
        clock: &C,
    ) -> Result<JobStatus> {
        debug!(sid = %sid, ?poll_interval, ?timeout, "Waiting for job");
        poll::wait_until_done(clock, sid, poll_interval, timeout, move || self.poll_once(sid)).await
    }
}
