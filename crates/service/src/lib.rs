//! Service layer for the guestbook
//!
//! Sits between the HTTP handlers and the storage backend.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod guestbook_service;

pub use error::ServiceError;
pub use guestbook_service::GuestbookService;
