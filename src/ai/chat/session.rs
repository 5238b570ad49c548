use chrono::{DateTime, Utc};

use super::models::{ConversationTurn, FeatureLevel, Role};
use super::remote::BoxedRemoteChat;
use crate::office::DEFAULT_LANGUAGE;

/// Everything that belongs to one user's session. Created on first
/// interaction and dropped when the session ends.
pub struct SessionState {
    pub conversation: Vec<ConversationTurn>,
    pub query_count: u64,
    pub language: String,
    pub feature_level: FeatureLevel,
    // `Some` only after a remote session was created since the last
    // reset. Replaced wholesale, never mutated into a new session.
    pub chat_handle: Option<BoxedRemoteChat>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            conversation: Vec::new(),
            query_count: 0,
            language: DEFAULT_LANGUAGE.to_string(),
            feature_level: FeatureLevel::default(),
            chat_handle: None,
            created_at: now,
            last_active: now,
        }
    }

    pub fn has_chat_handle(&self) -> bool {
        self.chat_handle.is_some()
    }

    /// Record one round trip: the user turn, then the reply.
    pub fn record_exchange(&mut self, user_input: &str, reply: &str) {
        self.conversation
            .push(ConversationTurn::new(Role::User, user_input));
        self.conversation
            .push(ConversationTurn::new(Role::Assistant, reply));
        self.query_count += 1;
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn idle_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_active).num_seconds()
    }
}
