//! Redis connection handle for one node.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use guestbook_core::RemoteTarget;
use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::traits::ListHandle;

/// Backstop for a dial that neither connects nor gets refused.
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Upper bound on a single command round trip.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Lazily connected handle to a Redis node.
///
/// Nothing is dialled until the first command, so an unreachable replica
/// does not prevent startup. Each dial is a single attempt: a refused
/// connection fails the call at once instead of backing off and retrying.
pub struct RedisHandle {
    label: String,
    client: redis::Client,
    conn: Mutex<Option<ConnectionManager>>,
}

impl RedisHandle {
    /// `role` is a short name such as `primary` or `replica`.
    pub fn open(role: &str, target: &RemoteTarget) -> Result<Self, StorageError> {
        let client = redis::Client::open(target.connection_url()).map_err(|source| {
            StorageError::InvalidTarget { target: target.to_string(), source }
        })?;
        Ok(Self { label: format!("{role} {target}"), client, conn: Mutex::new(None) })
    }

    async fn connection(&self) -> Result<ConnectionManager, StorageError> {
        if let Some(conn) = self.conn.lock().await.as_ref() {
            return Ok(conn.clone());
        }

        // Dial without holding the lock; a concurrent winner is kept.
        let config = ConnectionManagerConfig::new().set_number_of_retries(0);
        let conn = self
            .bounded(
                CONNECT_TIMEOUT,
                ConnectionManager::new_with_config(self.client.clone(), config),
            )
            .await?;
        tracing::debug!(node = %self.label, "connected");
        Ok(self.conn.lock().await.get_or_insert(conn).clone())
    }

    async fn bounded<T, F>(&self, limit: Duration, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => {
                result.map_err(|source| StorageError::Remote { node: self.label.clone(), source })
            },
            Err(_) => Err(StorageError::Timeout { node: self.label.clone(), after: limit }),
        }
    }
}

impl std::fmt::Debug for RedisHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisHandle").field("label", &self.label).finish_non_exhaustive()
    }
}

#[async_trait]
impl ListHandle for RedisHandle {
    fn label(&self) -> &str {
        &self.label
    }

    async fn push_and_fetch(&self, key: &str, value: &str) -> Result<Vec<String>, StorageError> {
        let mut conn = self.connection().await?;
        // MULTI/EXEC so the returned list is the one our RPUSH produced.
        let (items,): (Vec<String>,) = self
            .bounded(
                COMMAND_TIMEOUT,
                redis::pipe()
                    .atomic()
                    .rpush(key, value)
                    .ignore()
                    .lrange(key, 0, -1)
                    .query_async(&mut conn),
            )
            .await?;
        Ok(items)
    }

    async fn fetch_all(&self, key: &str) -> Result<Vec<String>, StorageError> {
        let mut conn = self.connection().await?;
        let items: Vec<String> = self.bounded(COMMAND_TIMEOUT, conn.lrange(key, 0, -1)).await?;
        Ok(items)
    }

    async fn server_info(&self) -> Result<String, StorageError> {
        let mut conn = self.connection().await?;
        let info: String =
            self.bounded(COMMAND_TIMEOUT, redis::cmd("INFO").query_async(&mut conn)).await?;
        Ok(info)
    }

    async fn close(&self) {
        if self.conn.lock().await.take().is_some() {
            tracing::info!(node = %self.label, "closed remote connection");
        }
    }
}
