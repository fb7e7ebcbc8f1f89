//! HTTP surface for the guestbook.
//!
//! Five plain-text routes over [`GuestbookService`] plus an embedded landing
//! page. Every route answers `200 OK` with `text/plain`: list results are
//! JSON text, failures are a single human-readable error line.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

mod handlers;
mod reply;
mod viewer;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use guestbook_service::GuestbookService;

pub use reply::{PlainText, READ_SOURCE_HEADER};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and injected through the router; handlers never
/// reach for global state.
pub struct AppState {
    pub guestbook_service: Arc<GuestbookService>,
    /// Reported by `/hello`.
    pub hostname: String,
}

impl AppState {
    #[must_use]
    pub fn new(guestbook_service: Arc<GuestbookService>, hostname: impl Into<String>) -> Self {
        Self { guestbook_service, hostname: hostname.into() }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/lrange/{key}", get(handlers::lists::lrange))
        .route("/rpush/{key}/{value}", get(handlers::lists::rpush))
        .route("/info", get(handlers::system::info))
        .route("/env", get(handlers::system::env))
        .route("/hello", get(handlers::system::hello))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
