//! Test utilities for integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use axum::{Router, body::Body};

use helpdesk::ai::chat::{
    BoxedRemoteChat, ChatBackend, ChatSessionManager, Dispatcher, RemoteChat, RemoteError,
};
use helpdesk::api::{AppState, SharedState, app};
use helpdesk::core::AppConfig;
use helpdesk::office::OfficeInfo;

/// What the fake model does with the next message it receives.
pub enum Scripted {
    Reply(&'static str),
    Closed,
    Fail(&'static str),
}

#[derive(Default)]
struct Recorder {
    script: VecDeque<Scripted>,
    sessions_created: usize,
    sent: Vec<String>,
}

/// A chat backend that answers from a script and records what it was
/// asked to do. Once the script runs out every message gets "OK".
#[derive(Clone, Default)]
pub struct FakeBackend(Arc<Mutex<Recorder>>);

impl FakeBackend {
    pub fn with_script(script: Vec<Scripted>) -> Self {
        let backend = Self::default();
        backend.0.lock().unwrap().script = script.into();
        backend
    }

    pub fn sessions_created(&self) -> usize {
        self.0.lock().unwrap().sessions_created
    }

    pub fn sent(&self) -> Vec<String> {
        self.0.lock().unwrap().sent.clone()
    }
}

struct FakeChat(Arc<Mutex<Recorder>>);

#[async_trait]
impl RemoteChat for FakeChat {
    async fn send_message(&mut self, message: &str) -> Result<String, RemoteError> {
        let mut recorder = self.0.lock().unwrap();
        recorder.sent.push(message.to_string());
        match recorder.script.pop_front() {
            Some(Scripted::Reply(text)) => Ok(text.to_string()),
            Some(Scripted::Closed) => Err(RemoteError::SessionClosed(
                "client has been closed".to_string(),
            )),
            Some(Scripted::Fail(msg)) => Err(RemoteError::Api {
                status: 500,
                message: msg.to_string(),
            }),
            None => Ok("OK".to_string()),
        }
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn create_session(
        &self,
        _api_key: &str,
        _model: &str,
    ) -> Result<BoxedRemoteChat, RemoteError> {
        self.0.lock().unwrap().sessions_created += 1;
        Ok(Box::new(FakeChat(Arc::clone(&self.0))))
    }
}

pub fn test_config(api_key: Option<&str>) -> AppConfig {
    AppConfig {
        gemini_api_hostname: String::from("http://localhost:1"),
        gemini_api_key: api_key.map(String::from),
        gemini_model: String::from("gemini-test"),
        request_timeout_secs: 5,
        session_ttl_secs: 3600,
        office: OfficeInfo::default(),
    }
}

/// Creates a test application router backed by `backend` along with
/// the shared state so tests can inspect sessions directly.
pub fn test_app_with(backend: &FakeBackend, api_key: Option<&str>) -> (Router, SharedState) {
    let config = test_config(api_key);
    let manager = ChatSessionManager::new(
        Arc::new(backend.clone()),
        config.gemini_api_key.clone(),
        &config.gemini_model,
    );
    let dispatcher = Dispatcher::new(manager, config.office.clone());
    let shared_state = Arc::new(RwLock::new(AppState::new(dispatcher, config)));
    (app(Arc::clone(&shared_state)), shared_state)
}

/// Creates a test application router with a fake backend that always
/// replies "OK".
pub fn test_app() -> Router {
    test_app_with(&FakeBackend::default(), Some("test-api-key")).0
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .uri(uri)
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}
