use super::Action;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<()> {
    match action {
        Action::Check { config } => crate::probe::check(&config).await,
        Action::Inspect { config } => crate::probe::inspect(&config).await,
        Action::Serve {
            config,
            listen,
            port,
        } => crate::server::start(&config, listen, port).await,
    }
}
