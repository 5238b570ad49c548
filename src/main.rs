use anyhow::Result;
use helpdesk::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
