//! Error types for dataset operations.

use splunk_client::ClientError;
use thiserror::Error;

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors raised while resolving or reading a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Authentication, job or fetch failure from the underlying client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Partitions were requested before the schema was resolved.
    #[error("Dataset schema has not been resolved yet; call schema() first")]
    NotResolved,

    /// Partition index outside `[0, partition_count)`.
    #[error("Partition {index} is out of range (dataset has {partition_count} partitions)")]
    PartitionOutOfRange {
        index: usize,
        partition_count: usize,
    },
}

impl DatasetError {
    /// Whether the dataset was used in the wrong state rather than failing remotely.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            Self::NotResolved | Self::PartitionOutOfRange { .. }
        )
    }

    /// The client error behind this failure, if any.
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl From<splunk_config::ConfigError> for DatasetError {
    fn from(err: splunk_config::ConfigError) -> Self {
        Self::Client(err.into())
    }
}
