//! Typed error enum for the storage layer.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection or protocol failure talking to a remote node.
    #[error("{node}: {source}")]
    Remote {
        node: String,
        #[source]
        source: redis::RedisError,
    },

    /// Remote node did not answer in time.
    #[error("{node}: no response after {after:?}")]
    Timeout { node: String, after: Duration },

    /// Connection target could not be turned into a client.
    #[error("invalid remote target {target}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: redis::RedisError,
    },
}

impl StorageError {
    /// Whether the failure came from the network rather than configuration.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Remote { source, .. } => {
                source.is_io_error() || source.is_connection_dropped() || source.is_timeout()
            },
            Self::Timeout { .. } => true,
            Self::InvalidTarget { .. } => false,
        }
    }
}
