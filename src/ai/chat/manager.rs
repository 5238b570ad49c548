use super::remote::{BoxedRemoteChat, RemoteError, SharedChatBackend};
use super::session::SessionState;

/// Owns the lifecycle of a session's remote chat handle. The handle
/// itself lives in `SessionState`; the manager only knows how to
/// create, replace, and drop it.
#[derive(Clone)]
pub struct ChatSessionManager {
    backend: SharedChatBackend,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug)]
pub enum SessionError {
    /// No credential to create a remote session with. Fatal.
    MissingCredential,
    Remote(RemoteError),
}

impl ChatSessionManager {
    pub fn new(backend: SharedChatBackend, api_key: Option<String>, model: &str) -> Self {
        Self {
            backend,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn create(&self) -> Result<BoxedRemoteChat, SessionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SessionError::MissingCredential)?;
        self.backend
            .create_session(api_key, &self.model)
            .await
            .map_err(SessionError::Remote)
    }

    /// The session's remote chat, created first if there isn't one.
    pub async fn active<'a>(
        &self,
        state: &'a mut SessionState,
    ) -> Result<&'a mut BoxedRemoteChat, SessionError> {
        let chat = match state.chat_handle.take() {
            Some(chat) => chat,
            None => {
                tracing::info!("No remote chat for session, creating one");
                self.create().await?
            }
        };
        Ok(state.chat_handle.insert(chat))
    }

    /// Close and discard the current remote chat and put a new one in
    /// its place. If creating the new one fails the session is left
    /// without a handle.
    pub async fn recreate<'a>(
        &self,
        state: &'a mut SessionState,
    ) -> Result<&'a mut BoxedRemoteChat, SessionError> {
        if let Some(mut old) = state.chat_handle.take() {
            old.close();
        }
        tracing::info!("Recreating remote chat for session");
        let chat = self.create().await?;
        Ok(state.chat_handle.insert(chat))
    }

    /// Clear the conversation. The remote chat goes with it and is
    /// created again on the next message.
    pub fn reset(&self, state: &mut SessionState) {
        if let Some(mut old) = state.chat_handle.take() {
            old.close();
        }
        state.conversation.clear();
        tracing::info!("Cleared conversation");
    }
}
