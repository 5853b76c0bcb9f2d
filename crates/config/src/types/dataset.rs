//! Partitioning and job polling settings.

use crate::constants::{DEFAULT_CHUNKSIZE, DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_MS};
use std::num::NonZeroUsize;
use std::time::Duration;

/// How a search's results are split into partitions and how long to wait for the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Maximum number of rows per partition.
    pub chunksize: NonZeroUsize,
    /// Sleep between successive job status checks.
    pub poll_interval: Duration,
    /// Ceiling on the total time spent waiting for the job to finish.
    pub max_wait: Duration,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            chunksize: NonZeroUsize::new(DEFAULT_CHUNKSIZE).unwrap_or(NonZeroUsize::MIN),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
        }
    }
}
