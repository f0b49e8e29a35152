// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static keyword and generic-column catalogs
//!
//! These catalogs back the schema-independent completion sources and the
//! misspelling heuristic. They are deliberately dialect-neutral.

/// A SQL keyword offered by completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlKeyword {
    /// The keyword text, upper-cased
    pub label: &'static str,
    /// Short documentation shown next to the suggestion
    pub description: &'static str,
}

const fn kw(label: &'static str, description: &'static str) -> SqlKeyword {
    SqlKeyword { label, description }
}

/// The keyword catalog, in rough statement order
pub const KEYWORDS: &[SqlKeyword] = &[
    kw("SELECT", "Retrieve data from tables"),
    kw("INSERT", "Insert new rows into a table"),
    kw("UPDATE", "Modify existing rows in a table"),
    kw("DELETE", "Delete rows from a table"),
    kw("CREATE", "Create database objects"),
    kw("ALTER", "Modify database objects"),
    kw("DROP", "Remove database objects"),
    kw("TRUNCATE", "Remove all rows from a table"),
    kw("FROM", "Specify the source table"),
    kw("WHERE", "Filter rows by condition"),
    kw("JOIN", "Combine rows from two tables"),
    kw("INNER JOIN", "Rows with matches in both tables"),
    kw("LEFT JOIN", "All left rows plus matches from the right"),
    kw("RIGHT JOIN", "All right rows plus matches from the left"),
    kw("FULL JOIN", "All rows from both tables"),
    kw("CROSS JOIN", "Cartesian product of two tables"),
    kw("ON", "Join condition"),
    kw("USING", "Join on identically named columns"),
    kw("AS", "Alias a table or column"),
    kw("AND", "Both conditions must hold"),
    kw("OR", "Either condition must hold"),
    kw("NOT", "Negate a condition"),
    kw("IN", "Match against a list of values"),
    kw("EXISTS", "True when a subquery returns rows"),
    kw("BETWEEN", "Match a value range"),
    kw("LIKE", "Pattern match with wildcards"),
    kw("IS", "Compare against NULL or booleans"),
    kw("NULL", "The absent value"),
    kw("DISTINCT", "Drop duplicate rows"),
    kw("GROUP BY", "Aggregate rows by column values"),
    kw("ORDER BY", "Sort the result set"),
    kw("HAVING", "Filter aggregated groups"),
    kw("LIMIT", "Cap the number of returned rows"),
    kw("OFFSET", "Skip leading rows"),
    kw("ASC", "Ascending sort order"),
    kw("DESC", "Descending sort order"),
    kw("UNION", "Combine result sets, dropping duplicates"),
    kw("ALL", "Keep duplicates in set operations"),
    kw("ANY", "Compare against any subquery row"),
    kw("CASE", "Conditional expression"),
    kw("WHEN", "Condition arm of a CASE"),
    kw("THEN", "Result arm of a CASE"),
    kw("ELSE", "Fallback arm of a CASE"),
    kw("END", "Close a CASE expression"),
    kw("VALUES", "Literal row values for INSERT"),
    kw("SET", "Column assignments for UPDATE"),
    kw("INTO", "Target table of an INSERT"),
    kw("TABLE", "Table object"),
    kw("VIEW", "Stored query object"),
    kw("INDEX", "Lookup structure on columns"),
    kw("PRIMARY KEY", "Unique row identifier constraint"),
    kw("FOREIGN KEY", "Reference to another table's key"),
    kw("REFERENCES", "Constraint target table"),
    kw("DEFAULT", "Value used when none is given"),
    kw("CONSTRAINT", "Named table rule"),
    kw("COUNT", "Count rows or values"),
    kw("SUM", "Sum numeric values"),
    kw("AVG", "Average numeric values"),
    kw("MIN", "Smallest value"),
    kw("MAX", "Largest value"),
    kw("CAST", "Convert a value to another type"),
    kw("COALESCE", "First non-NULL argument"),
    kw("WITH", "Common table expression"),
];

/// Column names common enough to suggest without schema knowledge
pub const GENERIC_COLUMNS: &[&str] = &[
    "id",
    "name",
    "email",
    "created_at",
    "updated_at",
    "deleted_at",
    "user_id",
    "status",
    "type",
    "description",
    "title",
    "uuid",
    "amount",
    "count",
];

/// Whether `word` is exactly a catalog keyword (case-insensitive)
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS
        .iter()
        .any(|k| k.label.eq_ignore_ascii_case(word))
}
