//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::ai::chat::ConversationTurn;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub query_count: u64,
}

impl ChatResponse {
    pub fn new(message: &str, query_count: u64) -> Self {
        Self {
            message: message.into(),
            query_count,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<ConversationTurn>,
}
