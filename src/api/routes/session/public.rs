//! Public types for the session API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}
