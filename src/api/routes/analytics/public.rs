//! Public types for the analytics API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub total_queries: u64,
    // Rendered as "L1", "L2", or "L3"
    pub active_level: String,
    pub session_started: DateTime<Utc>,
}
