//! Router for the knowledge base API

use axum::{Json, Router, extract::State, routing::get};
use axum_extra::extract::Query;

use super::public;
use crate::api::state::SharedState;
use crate::office::DEFAULT_LANGUAGE;

/// Office details and the FAQ entries for a language. Languages
/// without entries get the default language's FAQ.
async fn knowledge_base(
    State(state): State<SharedState>,
    Query(params): Query<public::KnowledgeQuery>,
) -> Json<public::KnowledgeResponse> {
    let dispatcher = state
        .read()
        .expect("Unable to read shared state")
        .dispatcher
        .clone();
    let language = params
        .language
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let faqs = dispatcher.faqs().entries_for(&language).to_vec();

    Json(public::KnowledgeResponse {
        office: dispatcher.office().clone(),
        language,
        faqs,
    })
}

/// Create the knowledge base router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(knowledge_base))
}
