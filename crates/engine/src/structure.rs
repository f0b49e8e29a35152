// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Structural validity checking
//!
//! Walks the document's parse tree and turns recovery artifacts into
//! diagnostics: ERROR nodes become syntax errors, statement nodes that
//! collapsed to zero width become incomplete-statement markers. The checker
//! never parses; it only reads the tree the document already maintains.

use tracing::debug;

use crate::diagnostics::{Diagnostic, SYNTAX_SOURCE};
use crate::document::Document;

// Recursion guard against degenerate trees from heavy error recovery.
const MAX_DEPTH: usize = 100;

// Longest slice of broken source quoted in a message.
const MAX_ERROR_DISPLAY_LEN: usize = 60;

/// Walks parse trees for structural problems
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralChecker;

impl StructuralChecker {
    /// Create a new checker
    pub fn new() -> Self {
        Self
    }

    /// Collect structural diagnostics for the document's current tree
    pub fn check(&self, document: &Document) -> Vec<Diagnostic> {
        let text = document.get_value();
        let mut diagnostics = Vec::new();
        collect(document.root(), &text, &mut diagnostics, 0);
        diagnostics.sort_by_key(|d| d.from);

        if !diagnostics.is_empty() {
            debug!(count = diagnostics.len(), "structural problems detected");
        }
        diagnostics
    }
}

fn collect(node: tree_sitter::Node, text: &str, out: &mut Vec<Diagnostic>, depth: usize) {
    if depth > MAX_DEPTH {
        return;
    }

    if node.is_error() {
        // Zero-width ERROR nodes carry no source text worth reporting.
        if node.start_byte() < node.end_byte() {
            out.push(syntax_error_diagnostic(&node, text));
        }
        return;
    }

    if is_statement_kind(node.kind()) && node.start_byte() == node.end_byte() {
        out.push(incomplete_statement_diagnostic(node.start_byte(), text.len()));
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, text, out, depth + 1);
    }
}

fn syntax_error_diagnostic(node: &tree_sitter::Node, text: &str) -> Diagnostic {
    let start = node.start_byte();
    let end = node.end_byte().min(text.len());
    let raw = text.get(start..end).unwrap_or("");
    Diagnostic::error(
        node.start_byte(),
        node.end_byte(),
        error_message(raw),
        SYNTAX_SOURCE,
    )
}

fn incomplete_statement_diagnostic(start: usize, doc_len: usize) -> Diagnostic {
    Diagnostic::error(
        start,
        (start + 10).min(doc_len),
        "Incomplete SQL statement",
        SYNTAX_SOURCE,
    )
}

fn error_message(raw: &str) -> String {
    let display = raw.trim();
    let display = match display.char_indices().nth(MAX_ERROR_DISPLAY_LEN) {
        Some((idx, _)) => &display[..idx],
        None => display,
    };
    format!("Syntax error: unexpected \"{display}\"")
}

fn is_statement_kind(kind: &str) -> bool {
    kind == "statement" || kind.ends_with("_statement")
}
