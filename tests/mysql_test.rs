#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use dbprobe::queries::mysql;
use sqlx::{ConnectOptions, MySqlConnection, mysql::MySqlConnectOptions};

/// Direct connection for creating and dropping test fixtures
async fn raw_conn() -> MySqlConnection {
    MySqlConnectOptions::new()
        .host(common::MYSQL_HOST)
        .username(common::MYSQL_USERNAME)
        .password(common::MYSQL_PASSWORD)
        .database(common::MYSQL_DATABASE)
        .connect()
        .await
        .expect("failed to connect to the test database")
}

#[tokio::test]
#[ignore = "requires running MySQL container"]
async fn test_ping() {
    if common::skip_if_no_mysql() {
        return;
    }

    let result = mysql::ping(&common::mysql_config()).await;
    assert!(result.is_ok(), "ping failed: {result:?}");
}

#[tokio::test]
#[ignore = "requires running MySQL container"]
async fn test_ping_invalid_credentials() {
    if common::skip_if_no_mysql() {
        return;
    }

    let mut config = common::mysql_config();
    config.password = "wrong-password".to_string();

    let result = mysql::ping(&config).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires running MySQL container"]
async fn test_ping_unknown_database() {
    if common::skip_if_no_mysql() {
        return;
    }

    let mut config = common::mysql_config();
    config.database = "dbprobe_no_such_db".to_string();

    let result = mysql::ping(&config).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires running MySQL container"]
async fn test_introspect_counts_rows() {
    if common::skip_if_no_mysql() {
        return;
    }

    let table_name = common::test_table_name("test_introspect_counts_rows");
    let mut conn = raw_conn().await;

    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {table_name} (id INT PRIMARY KEY AUTO_INCREMENT, name TEXT)"
    ))
    .execute(&mut conn)
    .await
    .expect("failed to create fixture table");

    for name in ["a", "b", "c"] {
        sqlx::query(&format!("INSERT INTO {table_name} (name) VALUES (?)"))
            .bind(name)
            .execute(&mut conn)
            .await
            .expect("failed to insert fixture row");
    }

    let result = mysql::introspect(&common::mysql_config()).await;

    sqlx::query(&format!("DROP TABLE IF EXISTS {table_name}"))
        .execute(&mut conn)
        .await
        .expect("failed to drop fixture table");

    let introspection = result.expect("introspection failed");
    assert_eq!(introspection.database, common::MYSQL_DATABASE);
    assert!(!introspection.version.is_empty());
    assert!(introspection.tables.contains(&table_name));
    assert_eq!(introspection.table_counts.get(&table_name), Some(&3));
}

#[tokio::test]
#[ignore = "requires running MySQL container"]
async fn test_introspect_skips_uncountable_tables() {
    if common::skip_if_no_mysql() {
        return;
    }

    let base_name = common::test_table_name("test_introspect_skips_base");
    let view_name = common::test_table_name("test_introspect_skips_view");
    let mut conn = raw_conn().await;

    // A view whose base table is gone still shows up in SHOW TABLES but
    // cannot be counted
    sqlx::query(&format!("CREATE TABLE {base_name} (id INT)"))
        .execute(&mut conn)
        .await
        .expect("failed to create base table");
    sqlx::query(&format!(
        "CREATE VIEW {view_name} AS SELECT * FROM {base_name}"
    ))
    .execute(&mut conn)
    .await
    .expect("failed to create view");
    sqlx::query(&format!("DROP TABLE {base_name}"))
        .execute(&mut conn)
        .await
        .expect("failed to drop base table");

    let result = mysql::introspect(&common::mysql_config()).await;

    sqlx::query(&format!("DROP VIEW IF EXISTS {view_name}"))
        .execute(&mut conn)
        .await
        .expect("failed to drop view");

    let introspection = result.expect("introspection failed");
    assert!(introspection.tables.contains(&view_name));
    assert!(!introspection.table_counts.contains_key(&view_name));
}
