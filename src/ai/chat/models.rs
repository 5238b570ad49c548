//! The core models for a support conversation.
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

/// UI gating flag. Only the voice placeholder looks at it.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum FeatureLevel {
    #[default]
    Faq = 1,
    Enhanced = 2,
    Voice = 3,
}

impl FeatureLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FeatureLevel::Faq => "Level 1: FAQ",
            FeatureLevel::Enhanced => "Level 2: Enhanced",
            FeatureLevel::Voice => "Level 3: Voice",
        }
    }

    pub fn voice_enabled(&self) -> bool {
        *self >= FeatureLevel::Voice
    }
}

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "L{}", u8::from(*self))
    }
}

impl From<FeatureLevel> for u8 {
    fn from(level: FeatureLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for FeatureLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FeatureLevel::Faq),
            2 => Ok(FeatureLevel::Enhanced),
            3 => Ok(FeatureLevel::Voice),
            other => Err(format!("Feature level must be 1, 2, or 3, got {}", other)),
        }
    }
}
