use anyhow::{Context, Result};
use sqlx::{
    ConnectOptions, Connection, MySqlConnection,
    mysql::MySqlConnectOptions,
};
use std::collections::BTreeMap;
use tracing::warn;

use super::Introspection;
use crate::config::ConnectionConfig;

/// Open a single connection using the configured credentials
///
/// No pooling: each probe stands up one connection, uses it, and closes
/// it again. Errors carry the driver message untouched so callers can
/// surface it verbatim.
async fn connect(config: &ConnectionConfig) -> Result<MySqlConnection> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .username(&config.username)
        .password(&config.password)
        .database(&config.database);

    Ok(options.connect().await?)
}

/// Verify the server accepts connections and answers a trivial query
///
/// # Errors
///
/// Returns an error if the connection cannot be established or the
/// liveness query fails
pub async fn ping(config: &ConnectionConfig) -> Result<()> {
    let mut conn = connect(config).await?;

    let _: i64 = sqlx::query_scalar("SELECT 1")
        .fetch_one(&mut conn)
        .await
        .context("Liveness query failed")?;

    // Gracefully close connection to avoid "Connection reset by peer" errors in server logs
    let _ = conn.close().await;

    Ok(())
}

/// Collect the schema inventory: current database, server version,
/// table list, and per-table row counts.
///
/// A table whose count query fails stays in `tables` but is left out of
/// `table_counts`; the failure is logged and the walk continues.
///
/// # Errors
///
/// Returns an error if the connection cannot be established or one of
/// the schema-level queries fails
pub async fn introspect(config: &ConnectionConfig) -> Result<Introspection> {
    let mut conn = connect(config).await?;

    let (database, version): (Option<String>, String) =
        sqlx::query_as("SELECT DATABASE(), VERSION()")
            .fetch_one(&mut conn)
            .await
            .context("Failed to fetch database name and version")?;

    let tables: Vec<String> = sqlx::query_scalar("SHOW TABLES")
        .fetch_all(&mut conn)
        .await
        .context("Failed to list tables")?;

    let mut table_counts = BTreeMap::new();
    for table in &tables {
        let count_sql = format!("SELECT COUNT(*) FROM `{}`", table.replace('`', "``"));
        match sqlx::query_scalar::<_, i64>(&count_sql)
            .fetch_one(&mut conn)
            .await
        {
            Ok(count) => {
                table_counts.insert(table.clone(), count);
            }
            Err(err) => warn!("skipping row count for `{table}`: {err}"),
        }
    }

    let _ = conn.close().await;

    Ok(Introspection {
        database: database.unwrap_or_else(|| config.database.clone()),
        version,
        tables,
        table_counts,
    })
}
