// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Diagnostics and the diagnostic publisher
//!
//! ## Overview
//!
//! Diagnostics are plain byte-offset records; the host maps them onto its own
//! rendering (squiggles, gutter markers). The publisher owns the one visible
//! set and moves between three states:
//!
//! ```text
//! Clean ──publish(non-empty)──> LocalErrors
//!   ^  ^                           |
//!   |  └──────── clear() ──────────┤
//!   |                              v
//!   └── clear() ── ExecutionError <┘ (highlight_line)
//! ```
//!
//! Every transition replaces the whole set; local and execution diagnostics
//! are never merged. Entries that no longer fit the document at publication
//! time are dropped, not clamped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;

/// Source tag for misspelling diagnostics
pub const SPELLCHECK_SOURCE: &str = "sql-spellcheck";

/// Source tag for structural syntax diagnostics
pub const SYNTAX_SOURCE: &str = "sql-syntax";

/// Source tag for remote execution-error highlights
pub const EXECUTION_SOURCE: &str = "sql-execution-error";

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Definite problem
    Error,
    /// Possible problem
    Warning,
    /// Informational note
    Info,
}

/// A single reported problem, spanning `from..to` in document bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Span start, inclusive
    pub from: usize,
    /// Span end, exclusive; equal to `from` for zero-width markers
    pub to: usize,
    /// Severity level
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
    /// Producing detector, one of the `*_SOURCE` constants
    pub source: String,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit severity
    pub fn new(
        from: usize,
        to: usize,
        severity: Severity,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            severity,
            message: message.into(),
            source: source.into(),
        }
    }

    /// Create an error diagnostic
    pub fn error(
        from: usize,
        to: usize,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::new(from, to, Severity::Error, message, source)
    }

    /// Create a warning diagnostic
    pub fn warning(
        from: usize,
        to: usize,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::new(from, to, Severity::Warning, message, source)
    }
}

/// Owner of the currently visible diagnostic set
#[derive(Debug, Clone, Default)]
pub struct DiagnosticPublisher {
    current: Vec<Diagnostic>,
}

impl DiagnosticPublisher {
    /// Create a publisher with no visible diagnostics
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible set with `diagnostics`
    ///
    /// Entries that do not satisfy `from <= to <= doc_len` are stale against
    /// the current document and are dropped rather than clamped.
    pub fn publish(&mut self, diagnostics: Vec<Diagnostic>, doc_len: usize) {
        let total = diagnostics.len();
        let kept: Vec<Diagnostic> = diagnostics
            .into_iter()
            .filter(|d| d.from <= d.to && d.to <= doc_len)
            .collect();
        if kept.len() < total {
            debug!(dropped = total - kept.len(), "dropped stale diagnostics");
        }
        self.current = kept;
    }

    /// Replace the visible set with a single whole-line execution marker
    ///
    /// `line` is 1-based, as reported by the remote query engine. Values
    /// below 1 are ignored and leave the current set untouched; values past
    /// the end of the document clamp to the last line.
    pub fn highlight_line(&mut self, line: i64, document: &Document) {
        if line < 1 {
            debug!(line, "ignoring execution error on out-of-range line");
            return;
        }

        // Saturate oversized values so 32-bit targets clamp instead of wrapping.
        let clamped = usize::try_from(line).unwrap_or(usize::MAX).min(document.line_count());
        let (from, to) = document.line_span(clamped - 1);
        self.current = vec![Diagnostic::error(
            from,
            to,
            format!("Syntax error on line {clamped}"),
            EXECUTION_SOURCE,
        )];
    }

    /// Publish the empty set
    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// The currently visible diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_line_document() -> Document {
        let text = (1..=10)
            .map(|n| format!("SELECT {n} FROM t{n}"))
            .collect::<Vec<_>>()
            .join("\n");
        Document::new(&text).unwrap()
    }

    #[test]
    fn test_publish_replaces_set() {
        let mut publisher = DiagnosticPublisher::new();
        publisher.publish(vec![Diagnostic::error(0, 5, "first", SYNTAX_SOURCE)], 100);
        publisher.publish(vec![Diagnostic::error(2, 7, "second", SYNTAX_SOURCE)], 100);

        assert_eq!(publisher.diagnostics().len(), 1);
        assert_eq!(publisher.diagnostics()[0].message, "second");
    }

    #[test]
    fn test_publish_drops_stale_entries() {
        let mut publisher = DiagnosticPublisher::new();
        publisher.publish(
            vec![
                Diagnostic::error(0, 5, "fits", SYNTAX_SOURCE),
                Diagnostic::error(90, 120, "past the end", SYNTAX_SOURCE),
                Diagnostic::error(8, 4, "inverted", SYNTAX_SOURCE),
            ],
            100,
        );

        assert_eq!(publisher.diagnostics().len(), 1);
        assert_eq!(publisher.diagnostics()[0].message, "fits");
    }

    #[test]
    fn test_highlight_line_clamps_past_end() {
        let document = ten_line_document();
        let mut publisher = DiagnosticPublisher::new();
        publisher.highlight_line(999, &document);

        let diags = publisher.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Syntax error on line 10");
        assert_eq!(diags[0].source, EXECUTION_SOURCE);

        let (from, to) = document.line_span(9);
        assert_eq!((diags[0].from, diags[0].to), (from, to));
    }

    #[test]
    fn test_highlight_line_clamps_values_past_usize_range() {
        // 1 << 32 is the first value a 32-bit usize cast would wrap to zero.
        let document = ten_line_document();
        let mut publisher = DiagnosticPublisher::new();
        publisher.highlight_line(1_i64 << 32, &document);

        let diags = publisher.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Syntax error on line 10");
    }

    #[test]
    fn test_highlight_line_below_one_is_a_no_op() {
        let document = ten_line_document();
        let mut publisher = DiagnosticPublisher::new();
        publisher.publish(
            vec![Diagnostic::error(0, 6, "existing", SYNTAX_SOURCE)],
            document.len_bytes(),
        );

        publisher.highlight_line(0, &document);
        assert_eq!(publisher.diagnostics()[0].message, "existing");

        publisher.highlight_line(-3, &document);
        assert_eq!(publisher.diagnostics()[0].message, "existing");
    }

    #[test]
    fn test_highlight_line_overwrites_previous_highlight() {
        let document = ten_line_document();
        let mut publisher = DiagnosticPublisher::new();

        publisher.highlight_line(2, &document);
        publisher.highlight_line(5, &document);

        let diags = publisher.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Syntax error on line 5");
    }

    #[test]
    fn test_clear_empties_the_set() {
        let document = ten_line_document();
        let mut publisher = DiagnosticPublisher::new();
        publisher.highlight_line(1, &document);
        publisher.clear();
        assert!(publisher.diagnostics().is_empty());
    }

    #[test]
    fn test_constructors_set_severity_and_fields() {
        let err = Diagnostic::error(0, 4, "bad syntax", SYNTAX_SOURCE);
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.source, SYNTAX_SOURCE);

        let warn = Diagnostic::warning(2, 6, "suspicious word", SPELLCHECK_SOURCE);
        assert_eq!(warn.severity, Severity::Warning);
        assert_eq!((warn.from, warn.to), (2, 6));
        assert_eq!(warn.message, "suspicious word");
    }

    #[test]
    fn test_serde_shape() {
        let diag = Diagnostic::error(3, 9, "bad", SPELLCHECK_SOURCE);
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["from"], 3);
        assert_eq!(json["to"], 9);
        assert_eq!(json["severity"], "error");
        assert_eq!(json["source"], "sql-spellcheck");
    }
}
