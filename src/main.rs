use anyhow::Result;
use dbprobe::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::start().await
}
