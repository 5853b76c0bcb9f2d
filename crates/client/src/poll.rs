//! Waiting for search jobs to finish.
//!
//! Responsibilities:
//! - Repeatedly check a job's status until it reports done.
//! - Enforce a client-side ceiling on the total wait.
//!
//! Does NOT handle:
//! - Cancelling the remote job when the ceiling is hit.
//! - Backoff; the interval between checks is fixed.
//!
//! Invariants:
//! - Returns immediately after the first status that reports done, without sleeping.
//! - Time is read and slept through a [`Clock`] so tests can drive it.

use std::future::Future;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{JobId, JobStatus};

/// Source of time for the wait loop.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Wall-clock time backed by `tokio::time`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Call `poll` until it reports done, sleeping `poll_interval` between calls.
///
/// Fails with [`ClientError::Timeout`] when a not-done status arrives after
/// more than `timeout` has elapsed since the first call. Errors from `poll`
/// are returned unchanged.
pub async fn wait_until_done<C, F, Fut>(
    clock: &C,
    sid: &JobId,
    poll_interval: Duration,
    timeout: Duration,
    mut poll: F,
) -> Result<JobStatus>
where
    C: Clock,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<JobStatus>>,
{
    let start = clock.now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let status = poll().await?;

        if status.is_done {
            debug!(
                sid = %sid,
                attempt,
                result_count = status.result_count,
                "Job completed"
            );
            return Ok(status);
        }

        let elapsed = clock.now().saturating_duration_since(start);
        if elapsed > timeout {
            debug!(sid = %sid, attempt, ?elapsed, "Gave up waiting for job");
            return Err(ClientError::Timeout {
                sid: sid.to_string(),
                waited: elapsed,
            });
        }

        debug!(sid = %sid, attempt, "Job not done yet");
        clock.sleep(poll_interval).await;
    }
}
