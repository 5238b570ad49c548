use handlebars::RenderError;
use thiserror::Error;

use super::manager::{ChatSessionManager, SessionError};
use super::remote::RemoteError;
use super::session::SessionState;
use crate::ai::prompt::system_instruction;
use crate::office::{FaqTable, OfficeInfo};

/// Failures that stop an interaction outright. Anything that goes
/// wrong talking to the model is turned into an error reply instead.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing API Key: set GEMINI_API_KEY in the environment or secrets.toml")]
    MissingCredential,

    #[error("Failed to render system instruction: {0}")]
    Prompt(#[from] RenderError),
}

fn error_reply(err: &RemoteError) -> String {
    format!("Error: {}", err)
}

/// Sends user messages to the remote model on behalf of a session.
///
/// Every message is prefixed with the full system instruction for the
/// session's language. When the remote chat turns out to be closed the
/// session gets a fresh one and the message is retried once, but only
/// the raw user message is sent on that retry.
///
/// Use `Dispatcher::new` with a `ChatSessionManager` and the office
/// details. The FAQ table is derived from the office.
#[derive(Clone)]
pub struct Dispatcher {
    manager: ChatSessionManager,
    office: OfficeInfo,
    faqs: FaqTable,
}

impl Dispatcher {
    pub fn new(manager: ChatSessionManager, office: OfficeInfo) -> Self {
        let faqs = FaqTable::for_office(&office);
        Self {
            manager,
            office,
            faqs,
        }
    }

    pub fn manager(&self) -> &ChatSessionManager {
        &self.manager
    }

    pub fn office(&self) -> &OfficeInfo {
        &self.office
    }

    pub fn faqs(&self) -> &FaqTable {
        &self.faqs
    }

    /// Get the model's reply to `user_input`. Remote failures come back
    /// as `Ok("Error: ...")`; only a missing credential or a broken
    /// prompt template are returned as `Err`.
    pub async fn respond(
        &self,
        state: &mut SessionState,
        user_input: &str,
    ) -> Result<String, ChatError> {
        let language = state.language.clone();

        let chat = match self.manager.active(state).await {
            Ok(chat) => chat,
            Err(SessionError::MissingCredential) => return Err(ChatError::MissingCredential),
            Err(SessionError::Remote(e)) => {
                tracing::error!("Failed to create remote chat: {}", e);
                return Ok(error_reply(&e));
            }
        };

        let instruction = system_instruction(&language, &self.faqs, &self.office)?;
        let message = format!("{}\n\nUser: {}", instruction, user_input);

        let result = chat.send_message(&message).await;
        match result {
            Ok(reply) => Ok(reply),
            Err(e) if e.is_session_closed() => {
                tracing::warn!("Remote chat closed ({}), retrying with a new session", e);
                self.retry_with_new_session(state, user_input).await
            }
            Err(e) => {
                tracing::error!("Remote chat error: {}", e);
                Ok(error_reply(&e))
            }
        }
    }

    async fn retry_with_new_session(
        &self,
        state: &mut SessionState,
        user_input: &str,
    ) -> Result<String, ChatError> {
        let chat = match self.manager.recreate(state).await {
            Ok(chat) => chat,
            Err(SessionError::MissingCredential) => return Err(ChatError::MissingCredential),
            Err(SessionError::Remote(e)) => return Ok(error_reply(&e)),
        };

        // NOTE: The system instruction is not included here so the
        // retried turn reaches the model without the office context.
        chat.send_message(user_input).await.or_else(|e| {
            tracing::error!("Retry after closed session failed: {}", e);
            Ok(error_reply(&e))
        })
    }

    /// Run one round trip for the session and record it: the user turn
    /// and the reply are appended and the query count goes up by one.
    /// Nothing is recorded when an error is returned.
    pub async fn submit(
        &self,
        state: &mut SessionState,
        user_input: &str,
    ) -> Result<String, ChatError> {
        state.touch();
        let reply = self.respond(state, user_input).await?;
        state.record_exchange(user_input, &reply);
        Ok(reply)
    }

    /// Clear the session's conversation and drop its remote chat.
    pub fn clear(&self, state: &mut SessionState) {
        self.manager.reset(state);
    }
}
