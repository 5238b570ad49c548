use anyhow::Result;

use crate::api;
use crate::core::AppConfig;
use crate::core::logging::init_tracing;

pub async fn run(host: String, port: String) -> Result<()> {
    init_tracing();
    let config = AppConfig::default();
    api::serve(host, port, config).await
}
