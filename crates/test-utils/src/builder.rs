// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Fluent construction of schema snapshots for tests.

use sqlsense_schema::SchemaSnapshot;

/// Builds a [`SchemaSnapshot`] table by table
///
/// # Examples
///
/// ```rust
/// use sqlsense_test_utils::SnapshotBuilder;
///
/// let snapshot = SnapshotBuilder::new()
///     .with_table("users", &[("id", "INTEGER"), ("email", "TEXT")])
///     .build();
/// assert_eq!(snapshot.tables.len(), 1);
/// assert_eq!(snapshot.columns.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: SchemaSnapshot,
}

impl SnapshotBuilder {
    /// Start an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table and its columns as `(name, type)` pairs
    pub fn with_table(mut self, name: &str, columns: &[(&str, &str)]) -> Self {
        self.snapshot = self.snapshot.with_table(name);
        for (column, data_type) in columns {
            self.snapshot = self.snapshot.with_column(*column, *data_type, name);
        }
        self
    }

    /// Add a column with no owning table, as unattributed introspection
    /// services report them
    pub fn with_orphan_column(mut self, name: &str, data_type: &str) -> Self {
        self.snapshot = self.snapshot.with_column(name, data_type, "");
        self
    }

    /// Finish and return the snapshot
    pub fn build(self) -> SchemaSnapshot {
        self.snapshot
    }
}

/// The shop schema most scenario tests run against
pub fn standard_snapshot() -> SchemaSnapshot {
    SnapshotBuilder::new()
        .with_table(
            "orders",
            &[
                ("order_id", "INTEGER"),
                ("order_date", "DATE"),
                ("customer_id", "INTEGER"),
                ("total", "NUMERIC"),
            ],
        )
        .with_table(
            "customers",
            &[
                ("customer_id", "INTEGER"),
                ("name", "TEXT"),
                ("email", "TEXT"),
            ],
        )
        .with_table(
            "products",
            &[
                ("product_id", "INTEGER"),
                ("name", "TEXT"),
                ("price", "NUMERIC"),
            ],
        )
        .build()
}
