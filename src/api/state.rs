use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::ai::chat::{Dispatcher, SessionState};
use crate::core::AppConfig;

/// A single user's session. Locked for the whole of a request so turns
/// within a session never interleave.
pub type SharedSession = Arc<Mutex<SessionState>>;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    // Every live session keyed by the id the client sends
    pub sessions: HashMap<String, SharedSession>,
    pub dispatcher: Arc<Dispatcher>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, config: AppConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            dispatcher: Arc::new(dispatcher),
            config,
        }
    }

    pub fn session(&self, id: &str) -> Option<SharedSession> {
        self.sessions.get(id).cloned()
    }

    pub fn get_or_create_session(&mut self, id: &str) -> SharedSession {
        self.sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                tracing::info!("Starting session {}", id);
                Arc::new(Mutex::new(SessionState::new()))
            })
            .clone()
    }

    pub fn remove_session(&mut self, id: &str) -> Option<SharedSession> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            tracing::info!("Ended session {}", id);
        }
        removed
    }

    /// Drop sessions idle for at least the configured TTL. Sessions
    /// locked by a request in flight are left alone. Returns how many
    /// were dropped.
    pub fn expire_idle_sessions(&mut self, now: DateTime<Utc>) -> usize {
        // TTLs past i64::MAX seconds never expire anything
        let ttl_secs = i64::try_from(self.config.session_ttl_secs).unwrap_or(i64::MAX);
        let before = self.sessions.len();
        self.sessions.retain(|id, session| match session.try_lock() {
            Ok(s) => {
                let keep = s.idle_secs(now) < ttl_secs;
                if !keep {
                    tracing::info!("Expiring idle session {}", id);
                }
                keep
            }
            Err(_) => true,
        });
        before - self.sessions.len()
    }
}
