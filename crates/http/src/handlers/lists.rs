use axum::extract::{Path, State};
use std::sync::Arc;

use crate::reply::PlainText;
use crate::AppState;

const MARSHAL_ERROR: &str = "Error marshalling list";

pub async fn lrange(State(state): State<Arc<AppState>>, Path(key): Path<String>) -> PlainText {
    match state.guestbook_service.read_list(&key).await {
        Ok(snapshot) => {
            PlainText::json(&snapshot.items, MARSHAL_ERROR).with_read_source(snapshot.source)
        },
        Err(e) => {
            tracing::warn!(key, error = %e, "lrange failed");
            PlainText::new(format!("Error getting list: {e}\n"))
        },
    }
}

pub async fn rpush(
    State(state): State<Arc<AppState>>,
    Path((key, value)): Path<(String, String)>,
) -> PlainText {
    match state.guestbook_service.append(&key, &value).await {
        Ok(snapshot) => PlainText::json(&snapshot.items, MARSHAL_ERROR),
        Err(e) => {
            tracing::warn!(key, error = %e, "rpush failed");
            PlainText::new(format!("Error adding to list: {e}\n"))
        },
    }
}
