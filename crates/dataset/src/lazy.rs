//! Lazy, restartable view over a resolved dataset's partitions.
//!
//! Nothing is fetched until a partition is asked for, and every pass
//! re-fetches. Streams are driven entirely by the caller's polling; no tasks
//! are spawned.

use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use splunk_client::{ClientError, ParseOptions, SplunkClient, Table};

use crate::builder::materialize_partition;
use crate::error::{DatasetError, Result};
use crate::partition::PartitionSpec;

/// Partitions of a resolved dataset, keyed by index.
#[derive(Debug, Clone, Copy)]
pub struct LazyPartitions<'a> {
    client: &'a SplunkClient,
    schema: &'a SchemaRef,
    partitions: &'a [PartitionSpec],
    options: &'a ParseOptions,
}

impl<'a> LazyPartitions<'a> {
    pub(crate) fn new(
        client: &'a SplunkClient,
        schema: &'a SchemaRef,
        partitions: &'a [PartitionSpec],
        options: &'a ParseOptions,
    ) -> Self {
        Self {
            client,
            schema,
            partitions,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Schema shared by every partition.
    pub fn schema(&self) -> &'a SchemaRef {
        self.schema
    }

    pub fn specs(&self) -> &'a [PartitionSpec] {
        self.partitions
    }

    /// Fetch partition `index`.
    pub async fn get(&self, index: usize) -> Result<Table> {
        let spec = self
            .partitions
            .get(index)
            .ok_or(DatasetError::PartitionOutOfRange {
                index,
                partition_count: self.len(),
            })?;
        materialize_partition(self.client, spec, self.schema, self.options).await
    }

    /// Every partition in order, one fetch at a time.
    pub fn stream(&self) -> impl Stream<Item = Result<(usize, Table)>> + 'a {
        self.stream_buffered(1)
    }

    /// Every partition in order, with up to `limit` fetches in flight.
    ///
    /// A `limit` of 0 is treated as 1.
    pub fn stream_buffered(&self, limit: usize) -> impl Stream<Item = Result<(usize, Table)>> + 'a {
        let this = *self;
        stream::iter(0..self.len())
            .map(move |index| async move { this.get(index).await.map(|table| (index, table)) })
            .buffered(limit.max(1))
    }

    /// Fetch every partition and concatenate them into one table.
    pub async fn collect(&self) -> Result<Table> {
        let tables: Vec<Table> = self
            .stream()
            .map_ok(|(_, table)| table)
            .try_collect()
            .await?;

        concat_batches(self.schema, &tables).map_err(|e| {
            DatasetError::Client(ClientError::Parse {
                sid: self.partitions.first().map(|p| p.job_id.to_string()),
                offset: None,
                count: None,
                message: format!("failed to concatenate partitions: {e}"),
            })
        })
    }
}
