//! Guestbook landing page - embedded HTML/JS
//!
//! Polls `lrange/guestbook` every second and submits entries through
//! `rpush/guestbook/<entry>`.

use axum::response::Html;

pub const VIEWER_HTML: &str = include_str!("viewer.html");

pub async fn serve_viewer() -> Html<&'static str> {
    Html(VIEWER_HTML)
}
