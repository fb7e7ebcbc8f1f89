//! Typed error enum for the service layer.

use guestbook_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (unreachable node, protocol error, timeout).
    #[error("{0}")]
    Storage(#[from] StorageError),
}
