// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQL text fixtures shared across tests.

/// A clean single-table query
pub const SIMPLE_SELECT: &str = "SELECT order_id, total FROM orders WHERE total > 100";

/// A clean two-table join
pub const JOIN_QUERY: &str = "SELECT o.order_id, c.name \
FROM orders o \
JOIN customers c ON o.customer_id = c.customer_id";

/// A query with one known keyword misspelling
pub const MISSPELLED_QUERY: &str = "SELEC * FROM orders";

/// Structurally broken input, mid-edit
pub const BROKEN_QUERY: &str = "SELECT FROM FROM ((";

/// Comment-only buffer; validation must reject it
pub const COMMENT_ONLY: &str = "-- just notes\n   -- nothing to run\n";

/// A ten-line script for execution-error line mapping
pub const TEN_LINE_SCRIPT: &str = "SELECT 1;\nSELECT 2;\nSELECT 3;\nSELECT 4;\nSELECT 5;\n\
SELECT 6;\nSELECT 7;\nSELECT 8;\nSELECT 9;\nSELECT 10;";
