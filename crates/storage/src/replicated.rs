//! Primary/replica list store.
//!
//! Writes always go to the primary. Reads try the replica first and fall
//! back to the primary on any replica error, with no retry: availability
//! wins over freshness, and a stale replica answer is returned as-is.

use std::sync::Arc;

use async_trait::async_trait;
use guestbook_core::{ListSnapshot, ReadSource, RemoteTarget};

use crate::error::StorageError;
use crate::redis_handle::RedisHandle;
use crate::traits::{ListHandle, ListStore};

pub struct ReplicatedStore {
    primary: Arc<dyn ListHandle>,
    replica: Arc<dyn ListHandle>,
}

impl ReplicatedStore {
    #[must_use]
    pub fn new(primary: Arc<dyn ListHandle>, replica: Arc<dyn ListHandle>) -> Self {
        Self { primary, replica }
    }

    /// Build Redis handles for both nodes. Does not dial either of them.
    pub fn open(primary: &RemoteTarget, replica: &RemoteTarget) -> Result<Self, StorageError> {
        Ok(Self::new(
            Arc::new(RedisHandle::open("primary", primary)?),
            Arc::new(RedisHandle::open("replica", replica)?),
        ))
    }

    pub async fn close(&self) {
        self.replica.close().await;
        self.primary.close().await;
    }
}

impl std::fmt::Debug for ReplicatedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplicatedStore")
            .field("primary", &self.primary.label())
            .field("replica", &self.replica.label())
            .finish()
    }
}

#[async_trait]
impl ListStore for ReplicatedStore {
    async fn append(&self, key: &str, value: &str) -> Result<ListSnapshot, StorageError> {
        let items = self.primary.push_and_fetch(key, value).await?;
        Ok(ListSnapshot::new(items, ReadSource::Primary))
    }

    async fn read_all(&self, key: &str) -> Result<ListSnapshot, StorageError> {
        match self.replica.fetch_all(key).await {
            Ok(items) => return Ok(ListSnapshot::new(items, ReadSource::Replica)),
            Err(e) => {
                tracing::warn!(
                    key,
                    error = %e,
                    unreachable = e.is_unavailable(),
                    "replica read failed, reading from primary"
                );
            },
        }
        let items = self.primary.fetch_all(key).await?;
        Ok(ListSnapshot::new(items, ReadSource::Primary))
    }

    async fn info(&self) -> Result<String, StorageError> {
        self.primary.server_info().await
    }
}
