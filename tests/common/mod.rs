#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use dbprobe::config::ConnectionConfig;
use std::{env, io::Write, path::PathBuf, process::Command};
use tempfile::NamedTempFile;

pub const MYSQL_HOST: &str = "localhost";
pub const MYSQL_DATABASE: &str = "testdb";
pub const MYSQL_USERNAME: &str = "dbprobe";
pub const MYSQL_PASSWORD: &str = "secret";

pub fn skip_if_no_mysql() -> bool {
    env::var("SKIP_MYSQL_TESTS").is_ok()
}

/// Connection settings matching the test container
pub fn mysql_config() -> ConnectionConfig {
    ConnectionConfig {
        host: MYSQL_HOST.to_string(),
        database: MYSQL_DATABASE.to_string(),
        username: MYSQL_USERNAME.to_string(),
        password: MYSQL_PASSWORD.to_string(),
    }
}

/// Connection settings pointing at a host that cannot resolve, so
/// probes fail fast without any database around
pub fn unreachable_config() -> ConnectionConfig {
    ConnectionConfig {
        host: "db.invalid".to_string(),
        ..ConnectionConfig::default()
    }
}

/// Write a temporary configuration file holding the given content
pub fn write_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("failed to write temp config");
    file.flush().expect("failed to flush temp config");
    file
}

pub fn dbprobe_binary_path() -> PathBuf {
    env::var_os("CARGO_BIN_EXE_dbprobe")
        .map_or_else(|| PathBuf::from("target/debug/dbprobe"), PathBuf::from)
}

/// Command for the binary with ambient configuration stripped so each
/// test controls exactly what the process sees
pub fn dbprobe_command() -> Command {
    let mut cmd = Command::new(dbprobe_binary_path());
    for var in [
        "DBPROBE_CONFIG",
        "DBPROBE_HOST",
        "DBPROBE_DATABASE",
        "DBPROBE_USERNAME",
        "DBPROBE_PASSWORD",
        "DBPROBE_LISTEN",
        "DBPROBE_PORT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Generate a unique table name for a test
/// Uses the test name and thread ID to ensure uniqueness across parallel tests
pub fn test_table_name(test_name: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let thread_id = std::thread::current().id();
    let mut hasher = DefaultHasher::new();
    test_name.hash(&mut hasher);
    format!("{thread_id:?}").hash(&mut hasher);

    format!("dbprobe_test_{:x}", hasher.finish())
}
