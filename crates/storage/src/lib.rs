//! Storage layer for the guestbook
//!
//! Two interchangeable list stores behind the [`ListStore`] trait:
//! a replicated remote store (writes to the primary, reads preferring the
//! replica) and a volatile in-process store. [`StorageBackend`] picks one
//! at startup and dispatches to it for the rest of the process lifetime.

mod backend;
mod error;
mod memory;
mod redis_handle;
mod replicated;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use redis_handle::RedisHandle;
pub use replicated::ReplicatedStore;
pub use traits::{ListHandle, ListStore};
