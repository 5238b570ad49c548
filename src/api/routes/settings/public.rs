//! Public types for the settings API
use serde::{Deserialize, Serialize};

use crate::ai::chat::FeatureLevel;

#[derive(Serialize, Deserialize)]
pub struct SettingsResponse {
    pub language: String,
    pub feature_level: FeatureLevel,
    pub feature_label: String,
}

/// Fields left out are not changed. `feature_level` is taken as a raw
/// number so an out of range value can be reported as a bad request.
#[derive(Serialize, Deserialize, Default)]
pub struct UpdateSettingsRequest {
    pub language: Option<String>,
    pub feature_level: Option<u8>,
}
