use std::sync::Arc;

use guestbook_core::ListSnapshot;
use guestbook_storage::{ListStore, StorageBackend};

use crate::ServiceError;

/// Guestbook operations over whichever backend was selected at startup.
///
/// Keys and values are passed through untouched: empty strings, long
/// strings and special characters are all stored verbatim.
pub struct GuestbookService {
    storage: Arc<StorageBackend>,
}

impl GuestbookService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn read_list(&self, key: &str) -> Result<ListSnapshot, ServiceError> {
        let snapshot = self.storage.read_all(key).await?;
        tracing::debug!(key, len = snapshot.len(), source = %snapshot.source, "read list");
        Ok(snapshot)
    }

    pub async fn append(&self, key: &str, value: &str) -> Result<ListSnapshot, ServiceError> {
        let snapshot = self.storage.append(key, value).await?;
        tracing::debug!(key, len = snapshot.len(), "appended to list");
        Ok(snapshot)
    }

    /// Raw status text from the backend.
    pub async fn backend_info(&self) -> Result<String, ServiceError> {
        Ok(self.storage.info().await?)
    }

    #[must_use]
    pub fn backend_kind(&self) -> &'static str {
        self.storage.kind()
    }

    pub async fn shutdown(&self) {
        self.storage.shutdown().await;
    }
}
