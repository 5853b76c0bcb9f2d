//! The dataset facade.
//!
//! Responsibilities:
//! - Hold the query, connection settings and partitioning options of one search.
//! - Resolve the schema and partition list exactly once, on first request.
//! - Hand out partitions by index once resolved.
//!
//! Does NOT handle:
//! - Cancelling or deleting the remote job; the server expires it.
//! - Caching partition data; every read re-fetches its row range.
//!
//! Invariants:
//! - No network activity happens before the first `schema()` call.
//! - Concurrent first calls share one resolution; later calls reuse it.
//! - A failed resolution leaves the dataset unopened and may be retried.
//! - Partition `i` maps to the same row range for the life of the dataset.

use arrow::datatypes::{DataType, SchemaRef};
use splunk_client::{
    Clock, Credentials, JobId, ParseOptions, SplunkClient, SplunkClientBuilder, Table, TokioClock,
    redact_query,
};
use splunk_config::{Config, DatasetConfig};
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::builder::build_schema;
use crate::error::{DatasetError, Result};
use crate::lazy::LazyPartitions;
use crate::partition::{PartitionSpec, compute_partitions};

/// Partitioning, polling and parsing settings for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOptions {
    /// Maximum rows per partition.
    pub chunksize: NonZeroUsize,
    pub poll_interval: Duration,
    /// Ceiling on the time spent waiting for the job.
    pub max_wait: Duration,
    pub parse: ParseOptions,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self::from(&DatasetConfig::default())
    }
}

impl From<&DatasetConfig> for DatasetOptions {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            chunksize: config.chunksize,
            poll_interval: config.poll_interval,
            max_wait: config.max_wait,
            parse: ParseOptions::default(),
        }
    }
}

impl DatasetOptions {
    pub fn with_chunksize(mut self, chunksize: NonZeroUsize) -> Self {
        self.chunksize = chunksize;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }
}

/// Schema report for a resolved dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    pub schema: SchemaRef,
    pub partition_count: usize,
    /// Row count reported by the job when it finished.
    pub result_count: usize,
    /// Always false: the count is a snapshot and partitions are not re-counted.
    pub row_count_known: bool,
}

impl DatasetSchema {
    pub fn column_names(&self) -> Vec<&str> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    pub fn column_types(&self) -> Vec<&DataType> {
        self.schema.fields().iter().map(|f| f.data_type()).collect()
    }
}

/// Lifecycle of a [`SplunkDataset`].
///
/// Partitions become available at the moment the schema resolves, so there
/// is no separate state for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetState {
    /// Only settings are held; nothing has been sent to the server.
    Unopened,
    /// The job finished, the schema is known and partitions can be read.
    SchemaResolved,
}

enum Connection {
    Pending(SplunkClientBuilder),
    Ready(SplunkClient),
}

struct Resolved {
    client: SplunkClient,
    job_id: JobId,
    schema: SchemaRef,
    result_count: usize,
    partitions: Vec<PartitionSpec>,
}

/// A Splunk search exposed as a partitioned table.
///
/// ```rust,ignore
/// use splunk_dataset::SplunkDataset;
///
/// let dataset = SplunkDataset::open(
///     "index=main sourcetype=access_combined",
///     "https://localhost:8089",
///     ("admin", "changeme").into(),
///     NonZeroUsize::new(10_000).unwrap(),
/// );
/// let schema = dataset.schema().await?;
/// let first = dataset.get_partition(0).await?;
/// ```
pub struct SplunkDataset<C: Clock = TokioClock> {
    query: String,
    connection: Connection,
    options: DatasetOptions,
    clock: C,
    resolved: OnceCell<Resolved>,
}

impl SplunkDataset<TokioClock> {
    /// Describe a dataset by query, server, credentials and chunk size.
    ///
    /// Nothing is sent until [`SplunkDataset::schema`] is called.
    pub fn open(
        query: impl Into<String>,
        base_url: impl Into<String>,
        credentials: Credentials,
        chunksize: NonZeroUsize,
    ) -> Self {
        let builder = SplunkClient::builder()
            .base_url(base_url.into())
            .credentials(credentials);
        Self::unopened(
            query.into(),
            Connection::Pending(builder),
            DatasetOptions::default().with_chunksize(chunksize),
        )
    }

    /// Describe a dataset using loaded configuration for connection and options.
    pub fn from_config(query: impl Into<String>, config: &Config) -> Self {
        Self::unopened(
            query.into(),
            Connection::Pending(SplunkClient::builder().from_config(config)),
            DatasetOptions::from(&config.dataset),
        )
    }

    /// Describe a dataset over an already-authenticated client.
    pub fn with_client(
        query: impl Into<String>,
        client: SplunkClient,
        options: DatasetOptions,
    ) -> Self {
        Self::unopened(query.into(), Connection::Ready(client), options)
    }

    fn unopened(query: String, connection: Connection, options: DatasetOptions) -> Self {
        Self {
            query,
            connection,
            options,
            clock: TokioClock,
            resolved: OnceCell::new(),
        }
    }
}

impl<C: Clock> SplunkDataset<C> {
    /// Replace the partitioning and parsing options.
    ///
    /// Any resolved schema and partitions are dropped, since they were built
    /// with the old options; the next [`SplunkDataset::schema`] call resolves again.
    pub fn with_options(mut self, options: DatasetOptions) -> Self {
        self.options = options;
        self.resolved = OnceCell::new();
        self
    }

    /// Use `clock` for the job wait instead of wall-clock time.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> SplunkDataset<C2> {
        SplunkDataset {
            query: self.query,
            connection: self.connection,
            options: self.options,
            clock,
            resolved: self.resolved,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> &DatasetOptions {
        &self.options
    }

    pub fn state(&self) -> DatasetState {
        if self.resolved.initialized() {
            DatasetState::SchemaResolved
        } else {
            DatasetState::Unopened
        }
    }

    /// Resolve the dataset if needed and report its schema.
    ///
    /// The first call authenticates (when the connection is not yet
    /// established), submits the query, waits for the job, samples the
    /// schema and computes partitions. Later calls return the cached result.
    pub async fn schema(&self) -> Result<DatasetSchema> {
        let resolved = self.resolved.get_or_try_init(|| self.resolve()).await?;
        Ok(DatasetSchema {
            schema: resolved.schema.clone(),
            partition_count: resolved.partitions.len(),
            result_count: resolved.result_count,
            row_count_known: false,
        })
    }

    async fn resolve(&self) -> Result<Resolved> {
        info!("Resolving dataset for query {}", redact_query(&self.query));

        let client = match &self.connection {
            Connection::Ready(client) => client.clone(),
            Connection::Pending(builder) => builder.clone().connect().await?,
        };

        let job_id = client.submit(&self.query).await?;
        let status = client
            .wait_until_done_with_clock(
                &job_id,
                self.options.poll_interval,
                self.options.max_wait,
                &self.clock,
            )
            .await?;

        let schema = build_schema(&client, &job_id, &self.options.parse).await?;
        let partitions = compute_partitions(&job_id, status.result_count, self.options.chunksize);

        info!(
            sid = %job_id,
            result_count = status.result_count,
            partitions = partitions.len(),
            chunksize = self.options.chunksize.get(),
            "Dataset resolved"
        );

        Ok(Resolved {
            client,
            job_id,
            schema,
            result_count: status.result_count,
            partitions,
        })
    }

    fn resolved(&self) -> Result<&Resolved> {
        self.resolved.get().ok_or(DatasetError::NotResolved)
    }

    /// Job backing the dataset, once resolved.
    pub fn job_id(&self) -> Option<&JobId> {
        self.resolved.get().map(|r| &r.job_id)
    }

    pub fn partition_count(&self) -> Result<usize> {
        Ok(self.resolved()?.partitions.len())
    }

    /// Row ranges of every partition, in order.
    pub fn partitions(&self) -> Result<&[PartitionSpec]> {
        Ok(&self.resolved()?.partitions)
    }

    /// Fetch partition `index`.
    ///
    /// # Errors
    ///
    /// [`DatasetError::NotResolved`] before [`SplunkDataset::schema`] has
    /// succeeded, [`DatasetError::PartitionOutOfRange`] for an index outside
    /// `[0, partition_count)`, otherwise fetch and parse failures.
    pub async fn get_partition(&self, index: usize) -> Result<Table> {
        debug!(index, "Partition requested");
        self.to_lazy_collection()?.get(index).await
    }

    /// All partitions as a lazy, restartable collection.
    pub fn to_lazy_collection(&self) -> Result<LazyPartitions<'_>> {
        let resolved = self.resolved()?;
        Ok(LazyPartitions::new(
            &resolved.client,
            &resolved.schema,
            &resolved.partitions,
            &self.options.parse,
        ))
    }
}
