//! Router for the session lifecycle API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use uuid::Uuid;

use super::public;
use crate::api::state::SharedState;

/// Start a new session with a server generated ID
async fn create_session(State(state): State<SharedState>) -> Json<public::SessionCreatedResponse> {
    let session_id = Uuid::new_v4().to_string();
    state
        .write()
        .expect("Unable to write shared state")
        .get_or_create_session(&session_id);
    Json(public::SessionCreatedResponse { session_id })
}

/// End a session, discarding its conversation and remote chat
async fn end_session(State(state): State<SharedState>, Path(id): Path<String>) -> StatusCode {
    let removed = state
        .write()
        .expect("Unable to write shared state")
        .remove_session(&id);
    match removed {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

/// Create the session router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}", delete(end_session))
}
