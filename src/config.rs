use anyhow::{Context, Result};
use std::{env, fs, path::Path};

/// File read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "dbprobe.conf";

/// Connection parameters for the probed `MySQL` server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            database: "app_db".to_string(),
            username: "root".to_string(),
            password: String::new(),
        }
    }
}

impl ConnectionConfig {
    /// Read connection parameters from a `key=value` file, then apply
    /// `DBPROBE_*` environment overrides on top.
    ///
    /// Keys are matched case-insensitively, missing or empty keys keep
    /// their defaults (only the password may be set empty), unknown keys
    /// and `#` comments are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read configuration file {}", path.display()))?;

        let mut config = Self::parse(&content);
        config.apply_env();

        Ok(config)
    }

    /// Defaults plus `DBPROBE_*` environment overrides, no file involved
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim();
                // Only the password may be set to an empty string, the
                // other fields keep their defaults instead
                match key.trim().to_lowercase().as_str() {
                    "host" if !value.is_empty() => value.clone_into(&mut config.host),
                    "database" if !value.is_empty() => value.clone_into(&mut config.database),
                    "username" if !value.is_empty() => value.clone_into(&mut config.username),
                    "password" => value.clone_into(&mut config.password),
                    _ => {}
                }
            }
        }

        config
    }

    fn apply_env(&mut self) {
        if let Ok(host) = env::var("DBPROBE_HOST")
            && !host.is_empty()
        {
            self.host = host;
        }
        if let Ok(database) = env::var("DBPROBE_DATABASE")
            && !database.is_empty()
        {
            self.database = database;
        }
        if let Ok(username) = env::var("DBPROBE_USERNAME")
            && !username.is_empty()
        {
            self.username = username;
        }
        if let Ok(password) = env::var("DBPROBE_PASSWORD") {
            self.password = password;
        }
    }
}
