//! Router for the voice API. Voice input is not implemented, this only
//! reports whether the session's feature level unlocks it.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use super::public;
use crate::api::routes::find_session;
use crate::api::state::SharedState;

async fn voice_status(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let session = match find_session(&state, &id) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let level = session.lock().await.feature_level;

    if !level.voice_enabled() {
        return (
            StatusCode::FORBIDDEN,
            "Please enable Level 3 to access Voice Features.",
        )
            .into_response();
    }

    Json(public::VoiceStatusResponse {
        status: String::from("Ready to receive voice input..."),
    })
    .into_response()
}

/// Create the voice router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{id}", get(voice_status))
}
