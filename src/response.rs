use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{config::ConnectionConfig, queries::Introspection};

/// Body returned by a successful basic connectivity check
#[derive(Serialize, Debug)]
pub struct CheckReport {
    pub status: &'static str,
    pub message: String,
    pub database: String,
    pub host: String,
}

impl CheckReport {
    #[must_use]
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            status: "success",
            message: "Database connection established successfully.".to_string(),
            database: config.database.clone(),
            host: config.host.clone(),
        }
    }
}

/// Body returned by a successful introspection run
#[derive(Serialize, Debug)]
pub struct InspectionReport {
    pub status: &'static str,
    pub message: String,
    pub database: String,
    pub mysql_version: String,
    pub tables: Vec<String>,
    pub table_counts: BTreeMap<String, i64>,
    pub total_tables: usize,
    pub timestamp: String,
}

impl InspectionReport {
    /// `total_tables` always reflects the full table list, even when some
    /// row counts are missing from `table_counts`.
    #[must_use]
    pub fn new(introspection: Introspection) -> Self {
        let total_tables = introspection.tables.len();

        Self {
            status: "success",
            message: "Database connection successful!".to_string(),
            database: introspection.database,
            mysql_version: introspection.version,
            tables: introspection.tables,
            table_counts: introspection.table_counts,
            total_tables,
            timestamp: now_timestamp(),
        }
    }
}

/// Body returned when a probe fails; `error` and `timestamp` only appear
/// on the introspection variant
#[derive(Serialize, Debug)]
pub struct ErrorReport {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorReport {
    /// Failure envelope for the basic check, driver error kept verbatim
    #[must_use]
    pub fn connection(err: &anyhow::Error) -> Self {
        Self {
            status: "error",
            message: format!("Database connection failed: {err:#}"),
            error: None,
            timestamp: None,
        }
    }

    /// Failure envelope for the introspection run
    #[must_use]
    pub fn introspection(err: &anyhow::Error) -> Self {
        Self {
            status: "error",
            message: "Database connection failed!".to_string(),
            error: Some(format!("{err:#}")),
            timestamp: Some(now_timestamp()),
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
