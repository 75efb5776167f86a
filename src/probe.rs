use anyhow::Result;
use std::path::Path;

use crate::{config::ConnectionConfig, queries::mysql, response::InspectionReport};

/// Run the basic connectivity check and report on stdout
///
/// The configuration summary is printed before the connection attempt so
/// a failing run still shows which server was probed. An unreadable
/// configuration file aborts before any connection is made.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or the
/// connection attempt fails
pub async fn check(config_path: &Path) -> Result<()> {
    let config = ConnectionConfig::load(config_path)?;

    println!("Using configuration from {}:", config_path.display());
    println!("Host: {}", config.host);
    println!("Database: {}", config.database);
    println!("Username: {}", config.username);

    mysql::ping(&config).await?;

    println!("Database connection established successfully.");

    Ok(())
}

/// Inspect the configured database and print the full report as JSON
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read, the
/// connection fails, or a schema-level query fails
pub async fn inspect(config_path: &Path) -> Result<()> {
    let config = ConnectionConfig::load(config_path)?;

    let introspection = mysql::introspect(&config).await?;
    let report = InspectionReport::new(introspection);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[tokio::test]
    async fn test_check_missing_config_aborts() {
        let result = check(Path::new("/nonexistent/dbprobe.conf")).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("could not read configuration file")
        );
    }

    #[tokio::test]
    async fn test_inspect_missing_config_aborts() {
        let result = inspect(Path::new("/nonexistent/dbprobe.conf")).await;
        assert!(result.is_err());
    }
}
