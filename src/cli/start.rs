use super::{commands, dispatch};
use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Main orchestrator - Pure orchestration with no business logic
///
/// Four-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Initialize Telemetry: Set up structured logging/tracing
/// 3. Dispatch: Convert `ArgMatches` into typed Action enum
/// 4. Execute: Run the action's business logic
///
/// # Errors
///
/// Returns an error if any step in the flow fails
pub async fn start() -> Result<()> {
    // 1. Parse: Extract CLI arguments
    let matches = commands::new().get_matches();

    // 2. Initialize Telemetry, logs go to stderr so stdout stays
    //    parseable JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 3. Dispatch: Convert ArgMatches into typed Action enum
    let action = dispatch::dispatch(&matches)?;

    // 4. Execute: Run the action's business logic
    action.execute().await?;

    Ok(())
}
