//! Volatile in-process list store.

use std::collections::HashMap;

use async_trait::async_trait;
use guestbook_core::constants::MEMORY_BACKEND_INFO;
use guestbook_core::{ListSnapshot, ReadSource};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::ListStore;

/// Lists kept in process memory, lost on exit.
///
/// Appends hold the write lock for the whole read-modify-write so
/// concurrent requests never lose entries.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn append(&self, key: &str, value: &str) -> Result<ListSnapshot, StorageError> {
        let mut lists = self.lists.write().await;
        let items = lists.entry(key.to_owned()).or_default();
        items.push(value.to_owned());
        Ok(ListSnapshot::new(items.clone(), ReadSource::Memory))
    }

    async fn read_all(&self, key: &str) -> Result<ListSnapshot, StorageError> {
        let lists = self.lists.read().await;
        let items = lists.get(key).cloned().unwrap_or_default();
        Ok(ListSnapshot::new(items, ReadSource::Memory))
    }

    async fn info(&self) -> Result<String, StorageError> {
        Ok(MEMORY_BACKEND_INFO.to_owned())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let store = MemoryStore::new();
        for value in ["v1", "v2", "v2", "v3"] {
            store.append("k", value).await.unwrap();
        }

        let snapshot = store.read_all("k").await.unwrap();
        assert_eq!(snapshot.items, vec!["v1", "v2", "v2", "v3"]);
        assert_eq!(snapshot.source, ReadSource::Memory);
    }

    #[tokio::test]
    async fn test_append_returns_updated_list() {
        let store = MemoryStore::new();
        let first = store.append("greetings", "hi").await.unwrap();
        assert_eq!(first.items, vec!["hi"]);

        let second = store.append("greetings", "there").await.unwrap();
        assert_eq!(second.items, vec!["hi", "there"]);
    }

    #[tokio::test]
    async fn test_unknown_key_reads_empty() {
        let store = MemoryStore::new();
        let snapshot = store.read_all("never-written").await.unwrap();
        assert!(snapshot.is_empty());
        assert!(store.lists.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let store = MemoryStore::new();
        store.append("a", "1").await.unwrap();
        store.append("b", "2").await.unwrap();
        store.append("a", "3").await.unwrap();

        assert_eq!(store.read_all("a").await.unwrap().items, vec!["1", "3"]);
        assert_eq!(store.read_all("b").await.unwrap().items, vec!["2"]);
        assert_eq!(store.lists.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_values_accepted_verbatim() {
        let store = MemoryStore::new();
        store.append("", "").await.unwrap();
        store.append("", "héllo wörld / ?&=").await.unwrap();

        let snapshot = store.read_all("").await.unwrap();
        assert_eq!(snapshot.items, vec!["", "héllo wörld / ?&="]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_lose_nothing() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.append("shared", &format!("entry-{i}")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut items = store.read_all("shared").await.unwrap().items;
        assert_eq!(items.len(), 50);
        items.sort();
        items.dedup();
        assert_eq!(items.len(), 50);
    }

    #[tokio::test]
    async fn test_info_is_fixed_text() {
        let store = MemoryStore::new();
        assert_eq!(store.info().await.unwrap(), "In-memory datastore (not Redis)");
    }
}
