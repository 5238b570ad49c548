//! Client for the Google Gemini `generateContent` REST API.

mod chat;
mod core;

pub use self::chat::*;
pub use self::core::*;
