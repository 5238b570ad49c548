use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::ai::chat::{ChatSessionManager, Dispatcher};
use crate::api::state::{AppState, SharedState};
use crate::core::AppConfig;
use crate::gemini::GeminiBackend;
use crate::jobs::{ExpireIdleSessions, spawn_periodic_job};

pub fn app(shared_state: SharedState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        // API routes
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

/// Build the application state with the Gemini backend from `config`
pub fn app_state(config: AppConfig) -> AppState {
    let backend = GeminiBackend::new(
        &config.gemini_api_hostname,
        Duration::from_secs(config.request_timeout_secs),
    );
    let manager = ChatSessionManager::new(
        Arc::new(backend),
        config.gemini_api_key.clone(),
        &config.gemini_model,
    );
    let dispatcher = Dispatcher::new(manager, config.office.clone());
    AppState::new(dispatcher, config)
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, chat requests will fail until it is");
    }

    let shared_state = Arc::new(RwLock::new(app_state(config)));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::debug!("Server started. Listening on {}", listener.local_addr()?);

    // Sessions end when the user goes away, which the server only
    // notices as inactivity
    let ttl_secs = shared_state
        .read()
        .expect("Unable to read shared state")
        .config
        .session_ttl_secs;
    spawn_periodic_job(Arc::clone(&shared_state), ExpireIdleSessions::for_ttl(ttl_secs));

    axum::serve(listener, app).await?;

    Ok(())
}
