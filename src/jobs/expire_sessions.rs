use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::PeriodicJob;
use crate::api::SharedState;

/// Drops sessions idle for longer than the configured TTL. The TTL
/// itself is read from the app config on each run.
#[derive(Debug)]
pub struct ExpireIdleSessions {
    interval: Duration,
}

impl ExpireIdleSessions {
    /// Check a few times per TTL, at most once a minute
    pub fn for_ttl(ttl_secs: u64) -> Self {
        Self {
            interval: Duration::from_secs((ttl_secs / 4).clamp(1, 60)),
        }
    }
}

#[async_trait]
impl PeriodicJob for ExpireIdleSessions {
    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run_job(&self, state: &SharedState) {
        let expired = state
            .write()
            .expect("Unable to write shared state")
            .expire_idle_sessions(Utc::now());
        if expired > 0 {
            tracing::info!("Expired {} idle sessions", expired);
        }
    }
}
