// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema snapshot types
//!
//! This module defines the immutable snapshot shape pushed into the engine by
//! the host. The wire payload is a flat object:
//!
//! ```json
//! {
//!   "tables":  [{ "name": "orders" }],
//!   "columns": [{ "name": "order_id", "type": "INTEGER", "table": "orders" }]
//! }
//! ```
//!
//! Snapshots are value types: once constructed they are never mutated, only
//! replaced wholesale through [`crate::SchemaCache::update`].

use serde::{Deserialize, Serialize};

/// A table known to the connected database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name as reported by the introspection service
    pub name: String,
}

impl TableInfo {
    /// Create a new table entry
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A column known to the connected database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,

    /// Declared SQL type, verbatim from the introspection service
    #[serde(rename = "type")]
    pub data_type: String,

    /// Owning table name; empty when the service could not attribute the column
    #[serde(default)]
    pub table: String,
}

impl ColumnInfo {
    /// Create a new column entry
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            table: table.into(),
        }
    }

    /// Whether the owning table of this column is known
    pub fn has_table(&self) -> bool {
        !self.table.is_empty()
    }
}

/// A complete, immutable view of the remote schema
///
/// The empty snapshot is legal and is the state of a freshly constructed
/// engine; completion degrades to keyword and generic-column suggestions
/// until the first push arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// All tables, in service order
    #[serde(default)]
    pub tables: Vec<TableInfo>,

    /// All columns across all tables, in service order
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

impl SchemaSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table (builder style)
    pub fn with_table(mut self, name: impl Into<String>) -> Self {
        self.tables.push(TableInfo::new(name));
        self
    }

    /// Add a column (builder style)
    ///
    /// # Arguments
    ///
    /// * `name` - Column name
    /// * `data_type` - Declared SQL type
    /// * `table` - Owning table name (empty string when unknown)
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        data_type: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        self.columns.push(ColumnInfo::new(name, data_type, table));
        self
    }

    /// Whether the snapshot carries no schema information at all
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.columns.is_empty()
    }

    /// Iterate over table names
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Iterate over the columns attributed to `table` (case-insensitive)
    pub fn columns_of<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a ColumnInfo> {
        self.columns
            .iter()
            .filter(move |c| c.table.eq_ignore_ascii_case(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_push_payload() {
        let payload = r#"{
            "tables": [{ "name": "orders" }, { "name": "customers" }],
            "columns": [
                { "name": "order_id", "type": "INTEGER", "table": "orders" },
                { "name": "email", "type": "TEXT", "table": "customers" }
            ]
        }"#;

        let snapshot: SchemaSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(snapshot.tables.len(), 2);
        assert_eq!(snapshot.columns.len(), 2);
        assert_eq!(snapshot.columns[0].data_type, "INTEGER");
        assert_eq!(snapshot.columns[0].table, "orders");
    }

    #[test]
    fn test_serialize_renames_data_type() {
        let snapshot = SchemaSnapshot::new().with_column("id", "BIGINT", "users");
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["columns"][0]["type"], "BIGINT");
        assert!(json["columns"][0].get("data_type").is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot: SchemaSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());

        let snapshot: SchemaSnapshot =
            serde_json::from_str(r#"{ "tables": [{ "name": "t" }] }"#).unwrap();
        assert_eq!(snapshot.tables.len(), 1);
        assert!(snapshot.columns.is_empty());
    }

    #[test]
    fn test_column_without_table_attribution() {
        let payload = r#"{ "columns": [{ "name": "total", "type": "NUMERIC" }] }"#;
        let snapshot: SchemaSnapshot = serde_json::from_str(payload).unwrap();
        assert!(!snapshot.columns[0].has_table());
    }

    #[test]
    fn test_columns_of_is_case_insensitive() {
        let snapshot = SchemaSnapshot::new()
            .with_column("order_id", "INTEGER", "Orders")
            .with_column("email", "TEXT", "customers");

        let cols: Vec<_> = snapshot.columns_of("orders").collect();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].name, "order_id");
    }

    #[test]
    fn test_table_names_iterates_in_order() {
        let snapshot = SchemaSnapshot::new().with_table("a").with_table("b");
        let names: Vec<_> = snapshot.table_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
