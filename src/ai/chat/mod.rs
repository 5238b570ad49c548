//! Support conversations: per-session state, the lifecycle of the
//! remote chat behind it, and the dispatcher that ties them together.

mod core;
mod manager;
pub mod models;
mod remote;
mod session;

pub use self::core::{ChatError, Dispatcher};
pub use manager::{ChatSessionManager, SessionError};
pub use models::{ConversationTurn, FeatureLevel, Role};
pub use remote::{BoxedRemoteChat, ChatBackend, RemoteChat, RemoteError, SharedChatBackend};
pub use session::SessionState;
