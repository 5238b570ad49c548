//! Seams between the chat core and a hosted conversational model.
//! A backend creates remote chat sessions, a remote chat sends one
//! user turn at a time and keeps whatever history the service needs.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// The remote session can no longer be used and has to be
    /// replaced before anything else can be sent.
    #[error("chat session is closed: {0}")]
    SessionClosed(String),

    #[error("{status}: {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RemoteError {
    pub fn is_session_closed(&self) -> bool {
        matches!(self, RemoteError::SessionClosed(_))
    }
}

#[async_trait]
pub trait RemoteChat: Send + Sync {
    /// Send a user message and return the model's reply text.
    async fn send_message(&mut self, message: &str) -> Result<String, RemoteError>;

    /// Release the session. Sending after this fails with
    /// `RemoteError::SessionClosed`.
    fn close(&mut self) {}
}

pub type BoxedRemoteChat = Box<dyn RemoteChat + Send + Sync + 'static>;

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn create_session(
        &self,
        api_key: &str,
        model: &str,
    ) -> Result<BoxedRemoteChat, RemoteError>;
}

pub type SharedChatBackend = Arc<dyn ChatBackend + Send + Sync + 'static>;
