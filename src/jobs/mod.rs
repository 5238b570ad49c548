//! Background jobs that run on an interval for the life of the server.

use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::api::SharedState;

mod expire_sessions;
pub use expire_sessions::ExpireIdleSessions;

#[async_trait]
pub trait PeriodicJob: Send + Sync + 'static {
    fn interval(&self) -> Duration;

    async fn run_job(&self, state: &SharedState);
}

/// Run `job` in its own tokio task every `job.interval()`. The first
/// run happens one interval after spawning.
pub fn spawn_periodic_job<J: PeriodicJob>(state: SharedState, job: J) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = job.interval();
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            job.run_job(&state).await;
        }
    })
}
