//! Partition boundaries over a finished job's result set.

use splunk_client::JobId;
use std::num::NonZeroUsize;

/// One contiguous row range `[offset, offset + count)` of a job's results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionSpec {
    pub job_id: JobId,
    pub offset: usize,
    pub count: usize,
}

impl PartitionSpec {
    /// One past the last row in this partition.
    pub fn end(&self) -> usize {
        self.offset + self.count
    }
}

/// Split `result_count` rows into `ceil(result_count / chunksize)` ordered ranges.
///
/// Every range holds `chunksize` rows except possibly the last. Zero rows
/// yield zero partitions.
pub fn compute_partitions(
    job_id: &JobId,
    result_count: usize,
    chunksize: NonZeroUsize,
) -> Vec<PartitionSpec> {
    let chunksize = chunksize.get();
    (0..result_count)
        .step_by(chunksize)
        .map(|offset| PartitionSpec {
            job_id: job_id.clone(),
            offset,
            count: chunksize.min(result_count - offset),
        })
        .collect()
}
