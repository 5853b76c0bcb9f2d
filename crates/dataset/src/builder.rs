//! Schema sampling and per-partition materialization.
//!
//! Both functions are stateless: they take the client, job and options they
//! need and touch nothing shared, so partitions can be fetched concurrently
//! from any number of callers.

use arrow::datatypes::SchemaRef;
use splunk_client::{JobId, ParseOptions, SplunkClient, Table};
use splunk_config::constants::SCHEMA_SAMPLE_ROWS;
use tracing::debug;

use crate::error::Result;
use crate::partition::PartitionSpec;

/// Infer the dataset schema from the first rows of a finished job.
///
/// The sampled rows are discarded; only column names and types are kept.
pub async fn build_schema(
    client: &SplunkClient,
    job_id: &JobId,
    options: &ParseOptions,
) -> Result<SchemaRef> {
    let sample = client
        .fetch_table(job_id, 0, SCHEMA_SAMPLE_ROWS, options)
        .await?;
    debug!(
        sid = %job_id,
        sampled_rows = sample.num_rows(),
        columns = sample.num_columns(),
        "Inferred dataset schema"
    );
    Ok(sample.schema())
}

/// Fetch and parse one partition against the shared schema.
///
/// Nothing is cached; calling this twice fetches the range twice.
pub async fn materialize_partition(
    client: &SplunkClient,
    spec: &PartitionSpec,
    schema: &SchemaRef,
    options: &ParseOptions,
) -> Result<Table> {
    let table = client
        .fetch_table_with_schema(&spec.job_id, spec.offset, spec.count, schema, options)
        .await?;
    debug!(
        sid = %spec.job_id,
        offset = spec.offset,
        count = spec.count,
        rows = table.num_rows(),
        "Materialized partition"
    );
    Ok(table)
}
