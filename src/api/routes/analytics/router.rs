//! Router for the analytics API

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};

use super::public;
use crate::api::routes::find_session;
use crate::api::state::SharedState;

/// Usage numbers for a session
async fn analytics(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let session = match find_session(&state, &id) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let session = session.lock().await;

    Json(public::AnalyticsResponse {
        total_queries: session.query_count,
        active_level: session.feature_level.to_string(),
        session_started: session.created_at,
    })
    .into_response()
}

/// Create the analytics router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{id}", get(analytics))
}
