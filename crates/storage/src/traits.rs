//! Storage capability traits.

use async_trait::async_trait;
use guestbook_core::ListSnapshot;

use crate::error::StorageError;

/// Named, append-only lists of strings.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Append `value` to the list at `key` and return the list afterwards.
    async fn append(&self, key: &str, value: &str) -> Result<ListSnapshot, StorageError>;

    /// Whole list at `key`; empty if the key was never written.
    async fn read_all(&self, key: &str) -> Result<ListSnapshot, StorageError>;

    /// Human-readable status of the backend.
    async fn info(&self) -> Result<String, StorageError>;
}

/// One remote node of a replicated deployment.
#[async_trait]
pub trait ListHandle: Send + Sync {
    /// Name used in logs and error messages, e.g. `primary remote-master:6379`.
    fn label(&self) -> &str;

    /// Append and read back the list in one round trip.
    async fn push_and_fetch(&self, key: &str, value: &str) -> Result<Vec<String>, StorageError>;

    async fn fetch_all(&self, key: &str) -> Result<Vec<String>, StorageError>;

    /// Raw `INFO` text.
    async fn server_info(&self) -> Result<String, StorageError>;

    /// Release the underlying connection. Later calls may reconnect.
    async fn close(&self) {}
}
