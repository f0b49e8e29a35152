// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query-context extraction
//!
//! Derives the set of table names the current buffer references by scanning
//! for the clause keywords that introduce a table name. The scan is textual,
//! not tree-based, so it keeps working while the statement is mid-edit and
//! the parse tree is broken; the cost is that names inside string literals or
//! comments are picked up too.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// One pattern per introducing clause. Each captures an optionally
// schema-qualified identifier; only the final segment is kept.
static FROM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bFROM\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)").unwrap()
});
static JOIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bJOIN\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)").unwrap()
});
static UPDATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bUPDATE\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)").unwrap()
});
static INSERT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bINSERT\s+INTO\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)")
        .unwrap()
});
static DELETE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bDELETE\s+FROM\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)")
        .unwrap()
});

/// Extract the referenced table names from `text`
///
/// Names are lower-cased and stripped to their final `.`-segment, so
/// `FROM Analytics.Events` contributes `events`. The extraction is pure and
/// idempotent; callers re-run it per completion pass rather than caching.
pub fn extract_tables(text: &str) -> HashSet<String> {
    let mut tables = HashSet::new();

    let patterns = [
        &*FROM_PATTERN,
        &*JOIN_PATTERN,
        &*UPDATE_PATTERN,
        &*INSERT_PATTERN,
        &*DELETE_PATTERN,
    ];

    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            if let Some(name) = caps.get(1) {
                let last_segment = name.as_str().split('.').next_back().unwrap_or("");
                if !last_segment.is_empty() {
                    tables.insert(last_segment.to_lowercase());
                }
            }
        }
    }

    tables
}

/// The tables a query references, as seen by the completion scorer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    /// Lower-cased, unqualified table names
    pub referenced_tables: HashSet<String>,
}

impl QueryContext {
    /// Build the context for the given buffer text
    pub fn of(text: &str) -> Self {
        Self {
            referenced_tables: extract_tables(text),
        }
    }

    /// Whether `table` is referenced by the query (case-insensitive)
    pub fn references(&self, table: &str) -> bool {
        self.referenced_tables.contains(&table.to_lowercase())
    }

    /// Whether the context references no tables at all
    pub fn is_empty(&self) -> bool {
        self.referenced_tables.is_empty()
    }
}
