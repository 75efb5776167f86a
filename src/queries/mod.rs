pub mod mysql;

use std::collections::BTreeMap;

/// Snapshot of the probed database collected in a single pass
#[derive(Debug, Clone)]
pub struct Introspection {
    /// Schema the connection landed in
    pub database: String,
    /// Server version string
    pub version: String,
    /// Tables in the order the server lists them
    pub tables: Vec<String>,
    /// Row count per table; tables whose count query failed are omitted
    pub table_counts: BTreeMap<String, i64>,
}
