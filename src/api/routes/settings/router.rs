//! Router for the settings API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use super::public;
use crate::ai::chat::{FeatureLevel, SessionState};
use crate::api::routes::find_session;
use crate::api::state::SharedState;
use crate::office::{SUPPORTED_LANGUAGES, is_supported_language};

fn settings_response(session: &SessionState) -> public::SettingsResponse {
    public::SettingsResponse {
        language: session.language.clone(),
        feature_level: session.feature_level,
        feature_label: session.feature_level.label().to_string(),
    }
}

fn bad_request(msg: String) -> Response {
    (StatusCode::BAD_REQUEST, msg).into_response()
}

/// Get the selected language and feature level of a session
async fn get_settings(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match find_session(&state, &id) {
        Ok(session) => Json(settings_response(&*session.lock().await)).into_response(),
        Err(resp) => resp,
    }
}

/// Change the language and/or feature level of a session. Nothing is
/// changed if either value is invalid.
async fn update_settings(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::UpdateSettingsRequest>,
) -> Response {
    let session = match find_session(&state, &id) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Some(language) = &payload.language {
        if !is_supported_language(language) {
            return bad_request(format!(
                "Unsupported language {}. Choose one of: {}",
                language,
                SUPPORTED_LANGUAGES.join(", ")
            ));
        }
    }
    let feature_level = match payload.feature_level.map(FeatureLevel::try_from) {
        Some(Ok(level)) => Some(level),
        Some(Err(msg)) => return bad_request(msg),
        None => None,
    };

    let mut session = session.lock().await;
    if let Some(language) = payload.language {
        session.language = language;
    }
    if let Some(level) = feature_level {
        session.feature_level = level;
    }
    session.touch();

    Json(settings_response(&session)).into_response()
}

/// Create the settings router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{id}", get(get_settings).put(update_settings))
}
