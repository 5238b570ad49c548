//! Router for the chat API

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::ai::chat::ChatError;
use crate::api::routes::find_session;
use crate::api::state::SharedState;

/// Get the conversation for a session
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let session = match find_session(&state, &id) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let transcript = session.lock().await.conversation.clone();

    axum::Json(public::ChatTranscriptResponse { transcript }).into_response()
}

/// Send a message for a session, creating the session if it doesn't
/// exist yet, and respond with the assistant's reply
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let (session, dispatcher) = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        (
            shared_state.get_or_create_session(&payload.session_id),
            shared_state.dispatcher.clone(),
        )
    };

    let mut session = session.lock().await;

    let result = dispatcher.submit(&mut session, &payload.message).await;
    match result {
        Ok(reply) => Ok(
            axum::Json(public::ChatResponse::new(&reply, session.query_count)).into_response(),
        ),
        Err(e @ ChatError::MissingCredential) => {
            tracing::error!("Chat unavailable: {}", e);
            Ok((StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Clear the conversation and drop the remote chat for a session
async fn clear_chat(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let (session, dispatcher) = match find_session(&state, &id) {
        Ok(session) => (
            session,
            state
                .read()
                .expect("Unable to read shared state")
                .dispatcher
                .clone(),
        ),
        Err(resp) => return resp,
    };

    dispatcher.clear(&mut *session.lock().await);

    StatusCode::NO_CONTENT.into_response()
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
        .route("/{id}/clear", post(clear_chat))
}
