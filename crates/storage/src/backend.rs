//! Backend selected once at startup, with enum dispatch.

use async_trait::async_trait;
use guestbook_core::{BackendConfig, ListSnapshot};

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::replicated::ReplicatedStore;
use crate::traits::ListStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Remote(s) => <ReplicatedStore as ListStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStore as ListStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Remote(ReplicatedStore),
    Memory(MemoryStore),
}

impl StorageBackend {
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, StorageError> {
        match config {
            BackendConfig::Remote { primary, replica } => {
                Ok(Self::Remote(ReplicatedStore::open(primary, replica)?))
            },
            BackendConfig::Memory => Ok(Self::memory()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Memory(_) => "memory",
        }
    }

    /// Release remote connections. Memory contents are simply dropped with
    /// the process.
    pub async fn shutdown(&self) {
        if let Self::Remote(store) = self {
            store.close().await;
        }
    }
}

#[async_trait]
impl ListStore for StorageBackend {
    async fn append(&self, key: &str, value: &str) -> Result<ListSnapshot, StorageError> {
        dispatch!(self, append(key, value))
    }

    async fn read_all(&self, key: &str) -> Result<ListSnapshot, StorageError> {
        dispatch!(self, read_all(key))
    }

    async fn info(&self) -> Result<String, StorageError> {
        dispatch!(self, info())
    }
}
