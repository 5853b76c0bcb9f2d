//! A Splunk search exposed as a lazily-evaluated, partitioned table.
//!
//! Opening a [`SplunkDataset`] does no network work. The first
//! [`SplunkDataset::schema`] call authenticates, runs the search to
//! completion, samples the first rows for a schema and splits the result
//! set into fixed-size [`PartitionSpec`]s. Partitions are then fetched on
//! demand, each one independently and without caching.

mod builder;
mod dataset;
mod error;
mod lazy;
mod partition;

pub use builder::{build_schema, materialize_partition};
pub use dataset::{DatasetOptions, DatasetSchema, DatasetState, SplunkDataset};
pub use error::{DatasetError, Result};
pub use lazy::LazyPartitions;
pub use partition::{PartitionSpec, compute_partitions};
