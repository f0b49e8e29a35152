// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Tree-sitter parsing integration
//!
//! ## Overview
//!
//! Wraps tree-sitter with the bundled SQL grammar and exposes full and
//! incremental parsing. Parse failures never surface as diagnostics here;
//! the structural checker walks the returned tree for ERROR nodes instead.
//!
//! ## Usage
//!
//! ```rust
//! use sqlsense_engine::parsing::SqlParser;
//!
//! let parser = SqlParser::new().unwrap();
//! let (tree, metadata) = parser.parse("SELECT * FROM users", None).unwrap();
//! assert!(!tree.root_node().kind().is_empty());
//! let _ = metadata.parse_time_ms;
//! ```

use std::time::Instant;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Information about one parse pass
#[derive(Debug, Clone)]
pub struct ParseMetadata {
    /// When the parse finished
    pub parsed_at: std::time::SystemTime,

    /// Time taken to parse (milliseconds)
    pub parse_time_ms: u64,

    /// Whether the tree contains ERROR or missing nodes
    pub has_errors: bool,
}

/// SQL parser handle
///
/// Holds the loaded grammar; an actual `tree_sitter::Parser` is created per
/// parse call, which keeps this type cheap to share and free of interior
/// mutability.
#[derive(Clone)]
pub struct SqlParser {
    language: tree_sitter::Language,
}

impl SqlParser {
    /// Load the SQL grammar and verify it against the linked tree-sitter
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Grammar` when the grammar ABI does not match the
    /// linked tree-sitter runtime.
    pub fn new() -> EngineResult<Self> {
        let language: tree_sitter::Language = tree_sitter_sequel::LANGUAGE.into();
        let loaded = Self { language };

        // Fail at construction rather than on the first parse.
        loaded.create_parser()?;
        Ok(loaded)
    }

    fn create_parser(&self) -> EngineResult<tree_sitter::Parser> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| EngineError::Grammar(e.to_string()))?;
        Ok(parser)
    }

    /// Parse `text`, reusing `old_tree` for incremental speed when given
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ParseFailed` if tree-sitter yields no tree.
    pub fn parse(
        &self,
        text: &str,
        old_tree: Option<&tree_sitter::Tree>,
    ) -> EngineResult<(tree_sitter::Tree, ParseMetadata)> {
        let start = Instant::now();
        let mut parser = self.create_parser()?;

        let tree = parser.parse(text, old_tree).ok_or(EngineError::ParseFailed)?;

        let parse_time_ms = start.elapsed().as_millis() as u64;
        let has_errors = tree.root_node().has_error();
        debug!(
            bytes = text.len(),
            parse_time_ms, has_errors, "parsed document"
        );

        Ok((
            tree,
            ParseMetadata {
                parsed_at: std::time::SystemTime::now(),
                parse_time_ms,
                has_errors,
            },
        ))
    }

    /// Re-parse after an edit, seeding tree-sitter with the edited old tree
    ///
    /// # Arguments
    ///
    /// - `old_tree`: The tree from before the edit
    /// - `text`: The complete new text
    /// - `edit`: The edit that transformed the old text into `text`
    pub fn parse_with_edit(
        &self,
        old_tree: &tree_sitter::Tree,
        text: &str,
        edit: &tree_sitter::InputEdit,
    ) -> EngineResult<(tree_sitter::Tree, ParseMetadata)> {
        debug!(
            start_byte = edit.start_byte,
            old_end_byte = edit.old_end_byte,
            new_end_byte = edit.new_end_byte,
            "incremental parse"
        );

        let mut edited = old_tree.clone();
        edited.edit(edit);
        self.parse(text, Some(&edited))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_loads_grammar() {
        assert!(SqlParser::new().is_ok());
    }

    #[test]
    fn test_parse_valid_select() {
        let parser = SqlParser::new().unwrap();
        let (tree, metadata) = parser.parse("SELECT * FROM users;", None).unwrap();
        assert!(!tree.root_node().has_error());
        assert!(!metadata.has_errors);
    }

    #[test]
    fn test_parse_broken_text_reports_errors_in_tree() {
        let parser = SqlParser::new().unwrap();
        let (tree, metadata) = parser.parse("SELECT FROM FROM ((", None).unwrap();
        assert!(tree.root_node().has_error());
        assert!(metadata.has_errors);
    }

    #[test]
    fn test_parse_empty_text() {
        let parser = SqlParser::new().unwrap();
        let (tree, _) = parser.parse("", None).unwrap();
        assert_eq!(tree.root_node().start_byte(), 0);
        assert_eq!(tree.root_node().end_byte(), 0);
    }

    #[test]
    fn test_incremental_parse_tracks_appended_text() {
        let parser = SqlParser::new().unwrap();
        let before = "SELECT * FROM users";
        let after = "SELECT * FROM users WHERE id = 1";
        let (old_tree, _) = parser.parse(before, None).unwrap();

        let edit = tree_sitter::InputEdit {
            start_byte: before.len(),
            old_end_byte: before.len(),
            new_end_byte: after.len(),
            start_position: tree_sitter::Point::new(0, before.len()),
            old_end_position: tree_sitter::Point::new(0, before.len()),
            new_end_position: tree_sitter::Point::new(0, after.len()),
        };

        let (new_tree, _) = parser.parse_with_edit(&old_tree, after, &edit).unwrap();
        assert_eq!(new_tree.root_node().end_byte(), after.len());
    }
}
