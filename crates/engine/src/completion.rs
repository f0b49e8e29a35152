// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion provider
//!
//! ## Overview
//!
//! Four candidate sources feed one pool:
//!
//! 1. the static keyword catalog
//! 2. generic common-column names
//! 3. schema tables
//! 4. schema columns, boosted when their owning table is referenced by the
//!    query context
//!
//! Scores are additive and intentionally coarse. Schema tables outrank plain
//! keyword matches, and columns of tables the query already references
//! outrank everything else. The pool is deduplicated by `(kind, label)`
//! keeping the best score, ordered, and truncated to the configured maximum.
//!
//! ## Scoring
//!
//! ```text
//! keyword          prefix 1.0, exact 2.0
//! generic column   prefix 0.5
//! schema table     prefix 3.0
//! schema column    base 1.0
//!                  +3.0 owning table referenced / +2.0 owning table known
//!                  +2.0 exact, +1.0 prefix (stacking)
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;
use sqlsense_schema::SchemaSnapshot;
use tracing::debug;

use crate::config::EngineConfig;
use crate::context::QueryContext;
use crate::keywords;

/// What a completion candidate stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// SQL keyword
    Keyword,
    /// Table from the schema snapshot
    Table,
    /// Column, from the schema snapshot or the generic catalog
    Column,
}

/// A single ranked completion suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionCandidate {
    /// Text inserted on accept
    pub label: String,
    /// Candidate kind
    pub kind: CandidateKind,
    /// Short description shown alongside the label
    pub info: String,
    /// Relevance; higher sorts first
    pub score: f64,
    /// Secondary detail, e.g. a column's declared type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Longest `[A-Za-z0-9_]` run ending at `cursor`, or `None` if the cursor
/// does not follow a word character
///
/// `cursor` must lie on a char boundary within `text`; the engine facade
/// validates that before calling in.
pub fn prefix_at(text: &str, cursor: usize) -> Option<&str> {
    let head = &text[..cursor];
    let start = prefix_start(head);
    if start == cursor {
        None
    } else {
        Some(&head[start..])
    }
}

fn prefix_start(head: &str) -> usize {
    for (idx, c) in head.char_indices().rev() {
        if !is_word_char(c) {
            return idx + c.len_utf8();
        }
    }
    0
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Produces ranked completion candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionProvider;

impl CompletionProvider {
    /// Create a new provider
    pub fn new() -> Self {
        Self
    }

    /// Complete at `cursor`, returning `None` when there is no prefix
    ///
    /// The provider itself never fails: an empty snapshot simply contributes
    /// no table or column candidates.
    pub fn complete(
        &self,
        text: &str,
        cursor: usize,
        schema: &SchemaSnapshot,
        context: &QueryContext,
        config: &EngineConfig,
    ) -> Option<Vec<CompletionCandidate>> {
        let prefix = prefix_at(text, cursor)?;
        let prefix = prefix.to_lowercase();

        let mut pool: Vec<CompletionCandidate> = Vec::new();
        self.collect_keywords(&prefix, &mut pool);
        self.collect_generic_columns(&prefix, &mut pool);
        self.collect_tables(&prefix, schema, &mut pool);
        self.collect_columns(&prefix, schema, context, &mut pool);

        let mut results = dedup_best(pool);
        results.sort_by(compare_candidates);
        results.truncate(config.max_completions);

        debug!(
            prefix = %prefix,
            candidates = results.len(),
            "completion computed"
        );
        Some(results)
    }

    fn collect_keywords(&self, prefix: &str, pool: &mut Vec<CompletionCandidate>) {
        for keyword in keywords::KEYWORDS {
            let label = keyword.label.to_lowercase();
            if !label.starts_with(prefix) {
                continue;
            }
            let score = if label.len() == prefix.len() {
                2.0
            } else {
                1.0
            };
            pool.push(CompletionCandidate {
                label: keyword.label.to_string(),
                kind: CandidateKind::Keyword,
                info: keyword.description.to_string(),
                score,
                detail: None,
            });
        }
    }

    fn collect_generic_columns(&self, prefix: &str, pool: &mut Vec<CompletionCandidate>) {
        for name in keywords::GENERIC_COLUMNS {
            if !name.starts_with(prefix) {
                continue;
            }
            pool.push(CompletionCandidate {
                label: (*name).to_string(),
                kind: CandidateKind::Column,
                info: "common column".to_string(),
                score: 0.5,
                detail: None,
            });
        }
    }

    fn collect_tables(
        &self,
        prefix: &str,
        schema: &SchemaSnapshot,
        pool: &mut Vec<CompletionCandidate>,
    ) {
        for table in &schema.tables {
            if !table.name.to_lowercase().starts_with(prefix) {
                continue;
            }
            pool.push(CompletionCandidate {
                label: table.name.clone(),
                kind: CandidateKind::Table,
                info: "table".to_string(),
                score: 3.0,
                detail: None,
            });
        }
    }

    fn collect_columns(
        &self,
        prefix: &str,
        schema: &SchemaSnapshot,
        context: &QueryContext,
        pool: &mut Vec<CompletionCandidate>,
    ) {
        for column in &schema.columns {
            let name = column.name.to_lowercase();
            let is_prefix = name.starts_with(prefix);
            let is_exact = name == prefix;
            let is_substring = prefix.len() > 2 && name.contains(prefix);
            if !(is_prefix || is_exact || is_substring) {
                continue;
            }

            let mut score = 1.0;
            if context.references(&column.table) {
                score += 3.0;
            } else if column.has_table() {
                score += 2.0;
            }
            if is_exact {
                score += 2.0;
            }
            if is_prefix {
                score += 1.0;
            }

            let info = if column.has_table() {
                format!("column of {}", column.table)
            } else {
                "column".to_string()
            };
            pool.push(CompletionCandidate {
                label: column.name.clone(),
                kind: CandidateKind::Column,
                info,
                score,
                detail: Some(column.data_type.clone()),
            });
        }
    }
}

fn dedup_best(pool: Vec<CompletionCandidate>) -> Vec<CompletionCandidate> {
    let mut best: HashMap<(CandidateKind, String), CompletionCandidate> = HashMap::new();
    for candidate in pool {
        match best.entry((candidate.kind, candidate.label.clone())) {
            Entry::Occupied(mut slot) => {
                if candidate.score > slot.get().score {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }
    best.into_values().collect()
}

fn compare_candidates(a: &CompletionCandidate, b: &CompletionCandidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.label.len().cmp(&b.label.len()))
        .then_with(|| a.label.cmp(&b.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(
        text: &str,
        schema: &SchemaSnapshot,
        config: &EngineConfig,
    ) -> Option<Vec<CompletionCandidate>> {
        let context = QueryContext::of(text);
        CompletionProvider::new().complete(text, text.len(), schema, &context, config)
    }

    fn shop_schema() -> SchemaSnapshot {
        SchemaSnapshot::new()
            .with_table("orders")
            .with_table("customers")
            .with_column("order_id", "INTEGER", "orders")
            .with_column("order_date", "DATE", "orders")
            .with_column("total", "NUMERIC", "orders")
            .with_column("customer_id", "INTEGER", "customers")
            .with_column("name", "TEXT", "customers")
    }

    #[test]
    fn test_prefix_extraction() {
        assert_eq!(prefix_at("SELECT * FROM ord", 17), Some("ord"));
        assert_eq!(prefix_at("SELECT", 3), Some("SEL"));
        assert_eq!(prefix_at("SELECT ", 7), None);
        assert_eq!(prefix_at("", 0), None);
        assert_eq!(prefix_at("count(user_1", 12), Some("user_1"));
        assert_eq!(prefix_at("a(b", 2), None);
    }

    #[test]
    fn test_no_prefix_returns_none() {
        let schema = shop_schema();
        let config = EngineConfig::default();
        assert!(complete("SELECT * FROM orders WHERE ", &schema, &config).is_none());
    }

    #[test]
    fn test_keyword_scores() {
        let schema = SchemaSnapshot::new();
        let config = EngineConfig::default();

        let results = complete("sel", &schema, &config).unwrap();
        let select = results.iter().find(|c| c.label == "SELECT").unwrap();
        assert_eq!(select.kind, CandidateKind::Keyword);
        assert_eq!(select.score, 1.0);

        let results = complete("select", &schema, &config).unwrap();
        let select = results.iter().find(|c| c.label == "SELECT").unwrap();
        assert_eq!(select.score, 2.0);
    }

    #[test]
    fn test_generic_columns_surface_without_schema() {
        let schema = SchemaSnapshot::new();
        let config = EngineConfig::default();

        let results = complete("SELECT crea", &schema, &config).unwrap();
        let created = results.iter().find(|c| c.label == "created_at").unwrap();
        assert_eq!(created.kind, CandidateKind::Column);
        assert_eq!(created.score, 0.5);
    }

    #[test]
    fn test_referenced_table_columns_outrank_everything() {
        let schema = shop_schema();
        let config = EngineConfig::default();

        let results = complete("SELECT * FROM orders WHERE ord", &schema, &config).unwrap();
        let labels: Vec<&str> = results.iter().map(|c| c.label.as_str()).collect();
        // Columns of the referenced table (5.0, shorter label first), then
        // the table itself (3.0), then the keyword (1.0).
        assert_eq!(labels, vec!["order_id", "order_date", "orders", "ORDER BY"]);

        let order_id = &results[0];
        assert_eq!(order_id.score, 5.0);
        assert_eq!(order_id.detail.as_deref(), Some("INTEGER"));
        assert_eq!(order_id.info, "column of orders");
    }

    #[test]
    fn test_known_but_unreferenced_table_scores_lower() {
        let schema = shop_schema();
        let config = EngineConfig::default();

        // customers is not referenced by the query.
        let results = complete("SELECT * FROM orders WHERE customer_i", &schema, &config).unwrap();
        let customer_id = results.iter().find(|c| c.label == "customer_id").unwrap();
        // base 1.0 + known table 2.0 + prefix 1.0
        assert_eq!(customer_id.score, 4.0);
    }

    #[test]
    fn test_exact_column_match_stacks_bonuses() {
        let schema = shop_schema();
        let config = EngineConfig::default();

        let results = complete("SELECT * FROM orders WHERE total", &schema, &config).unwrap();
        let total = results.iter().find(|c| c.label == "total").unwrap();
        // base 1.0 + referenced 3.0 + exact 2.0 + prefix 1.0
        assert_eq!(total.score, 7.0);
    }

    #[test]
    fn test_substring_match_requires_three_chars() {
        let schema = shop_schema();
        let config = EngineConfig::default();

        // "tal" is a substring of "total" but not a prefix.
        let results = complete("SELECT * FROM customers WHERE tal", &schema, &config).unwrap();
        let total = results.iter().find(|c| c.label == "total").unwrap();
        // base 1.0 + known unreferenced table 2.0, no prefix or exact bonus
        assert_eq!(total.score, 3.0);

        // Two characters never match by substring.
        let results = complete("SELECT * FROM customers WHERE ta", &schema, &config);
        assert!(
            results
                .unwrap()
                .iter()
                .all(|c| c.label != "total" || c.kind != CandidateKind::Column)
        );
    }

    #[test]
    fn test_duplicate_labels_keep_best_score() {
        let schema = SchemaSnapshot::new().with_column("name", "TEXT", "customers");
        let config = EngineConfig::default();

        // "name" is both a generic column and a schema column.
        let results = complete("SELECT * FROM customers WHERE nam", &schema, &config).unwrap();
        let names: Vec<&CompletionCandidate> =
            results.iter().filter(|c| c.label == "name").collect();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].score, 5.0);
    }

    #[test]
    fn test_ties_break_by_label_length_then_lexical() {
        let schema = SchemaSnapshot::new()
            .with_table("t_bb")
            .with_table("t_aa")
            .with_table("t_a");
        let config = EngineConfig::default();

        let results = complete("SELECT * FROM t_", &schema, &config).unwrap();
        let tables: Vec<&str> = results
            .iter()
            .filter(|c| c.kind == CandidateKind::Table)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(tables, vec!["t_a", "t_aa", "t_bb"]);
    }

    #[test]
    fn test_truncates_to_max_completions() {
        let schema = shop_schema();
        let config = EngineConfig {
            max_completions: 2,
            ..EngineConfig::default()
        };

        let results = complete("SELECT * FROM orders WHERE ord", &schema, &config).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label, "order_id");
    }

    #[test]
    fn test_empty_schema_still_offers_keywords() {
        let schema = SchemaSnapshot::new();
        let config = EngineConfig::default();

        let results = complete("SELECT * FROM orders WHERE ord", &schema, &config).unwrap();
        let labels: Vec<&str> = results.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["ORDER BY"]);
    }
}
