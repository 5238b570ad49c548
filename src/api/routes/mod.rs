//! API routes module

pub mod analytics;
pub mod chat;
pub mod knowledge;
pub mod session;
pub mod settings;
pub mod voice;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::state::{SharedSession, SharedState};

/// Look up an existing session or produce a 404 response for it.
pub(crate) fn find_session(state: &SharedState, id: &str) -> Result<SharedSession, Response> {
    state
        .read()
        .expect("Unable to read shared state")
        .session(id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Session {} not found", id)).into_response())
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Session lifecycle routes
        .nest("/session", session::router())
        // Chat routes
        .nest("/chat", chat::router())
        // Per-session language and feature level
        .nest("/settings", settings::router())
        // FAQ and office details
        .nest("/knowledge", knowledge::router())
        // Per-session usage
        .nest("/analytics", analytics::router())
        // Voice placeholder
        .nest("/voice", voice::router())
}
