//! Plain-text responses.
//!
//! Successful list reads and writes render JSON text, failures render an
//! error line; both go out as `200 OK` with a `text/plain` content type so
//! existing clients keep working unchanged.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use guestbook_core::{to_flat_json, ReadSource};

/// Names the node that served a list read: `replica`, `primary` or `memory`.
pub const READ_SOURCE_HEADER: &str = "x-guestbook-read-source";

#[derive(Debug)]
pub struct PlainText {
    body: String,
    read_source: Option<ReadSource>,
}

impl PlainText {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into(), read_source: None }
    }

    /// JSON rendering of `value`, or `"<context>: <err>\n"` if it cannot be
    /// serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T, context: &str) -> Self {
        match to_flat_json(value) {
            Ok(body) => Self::new(body),
            Err(e) => {
                tracing::error!(error = %e, "{context}");
                Self::new(format!("{context}: {e}\n"))
            },
        }
    }

    #[must_use]
    pub fn with_read_source(mut self, source: ReadSource) -> Self {
        self.read_source = Some(source);
        self
    }
}

impl IntoResponse for PlainText {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body,
        )
            .into_response();
        if let Some(source) = self.read_source {
            response
                .headers_mut()
                .insert(READ_SOURCE_HEADER, HeaderValue::from_static(source.as_str()));
        }
        response
    }
}
