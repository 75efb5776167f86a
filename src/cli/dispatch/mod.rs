use crate::cli::actions::Action;
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::{net::IpAddr, path::PathBuf};

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if the listen address does not parse as an IP address
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    // Extract config path (always present thanks to the default value)
    let config = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .context("config file path is required")?;

    match matches.subcommand() {
        Some(("inspect", _)) => Ok(Action::Inspect { config }),

        Some(("serve", sub)) => {
            // Extract and validate listen address
            let listen = sub
                .get_one::<String>("listen")
                .map(|addr| {
                    addr.parse::<IpAddr>()
                        .with_context(|| format!("Invalid IP address: {addr}"))
                })
                .transpose()?;

            // Extract port with default
            let port = sub.get_one::<u16>("port").copied().unwrap_or(8080);

            Ok(Action::Serve {
                config,
                listen,
                port,
            })
        }

        // `check` explicitly, or no subcommand at all
        _ => Ok(Action::Check { config }),
    }
}
