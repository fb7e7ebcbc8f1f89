use axum::extract::State;
use std::sync::Arc;

use guestbook_core::environment_snapshot;

use crate::reply::PlainText;
use crate::AppState;

/// Backend status: raw `INFO` output in remote mode, a fixed line otherwise.
pub async fn info(State(state): State<Arc<AppState>>) -> PlainText {
    match state.guestbook_service.backend_info().await {
        Ok(info) => PlainText::new(format!("{info}\n")),
        Err(e) => {
            tracing::warn!(error = %e, "info failed");
            PlainText::new(format!("Error getting DB info: {e}\n"))
        },
    }
}

pub async fn env() -> PlainText {
    let environment = environment_snapshot();
    match guestbook_core::to_flat_json(&environment) {
        Ok(body) => PlainText::new(body),
        Err(e) => {
            tracing::error!(error = %e, "failed to render environment");
            PlainText::new(format!("Error marshalling env vars: {e}"))
        },
    }
}

pub async fn hello(State(state): State<Arc<AppState>>) -> PlainText {
    PlainText::new(format!(
        "Hello from guestbook. Your app is up! (Hostname: {})\n",
        state.hostname
    ))
}
