//! Public types for the voice API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct VoiceStatusResponse {
    pub status: String,
}
