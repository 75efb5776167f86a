mod run;

use std::{net::IpAddr, path::PathBuf};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Check {
        config: PathBuf,
    },
    Inspect {
        config: PathBuf,
    },
    Serve {
        config: PathBuf,
        listen: Option<IpAddr>,
        port: u16,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
