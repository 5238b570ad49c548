use std::time::Duration;

use async_trait::async_trait;

use super::core::{Content, Role, generate_content};
use crate::ai::chat::{BoxedRemoteChat, ChatBackend, RemoteChat, RemoteError};

/// A conversation with a Gemini model. The REST API is stateless so
/// the session keeps the history itself and sends all of it on each
/// turn. History only grows when a turn succeeds.
pub struct GeminiChat {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    timeout: Duration,
    history: Vec<Content>,
    closed: bool,
}

impl GeminiChat {
    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

#[async_trait]
impl RemoteChat for GeminiChat {
    async fn send_message(&mut self, message: &str) -> Result<String, RemoteError> {
        if self.closed {
            return Err(RemoteError::SessionClosed(format!(
                "chat with {} was closed",
                self.model
            )));
        }

        let mut contents = self.history.clone();
        contents.push(Content::new(Role::User, message));

        tracing::debug!(
            "Sending message to {} with {} prior turns",
            self.model,
            self.history.len()
        );
        let reply = generate_content(
            &self.client,
            &contents,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            self.timeout,
        )
        .await?;

        contents.push(Content::new(Role::Model, &reply));
        self.history = contents;

        Ok(reply)
    }

    fn close(&mut self) {
        self.closed = true;
        self.history.clear();
    }
}

/// Creates `GeminiChat` sessions that share one HTTP connection pool.
#[derive(Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_hostname: String,
    timeout: Duration,
}

impl GeminiBackend {
    pub fn new(api_hostname: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            timeout,
        }
    }

    pub fn new_chat(&self, api_key: &str, model: &str) -> GeminiChat {
        GeminiChat {
            client: self.client.clone(),
            api_hostname: self.api_hostname.clone(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout: self.timeout,
            history: Vec::new(),
            closed: false,
        }
    }
}

#[async_trait]
impl ChatBackend for GeminiBackend {
    async fn create_session(
        &self,
        api_key: &str,
        model: &str,
    ) -> Result<BoxedRemoteChat, RemoteError> {
        tracing::info!("Creating Gemini chat session for model {}", model);
        Ok(Box::new(self.new_chat(api_key, model)))
    }
}
