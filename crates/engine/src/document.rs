// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Document management
//!
//! ## Overview
//!
//! The engine serves exactly one buffer. `Document` pairs the text (a rope,
//! so edits stay cheap) with the parse tree for that text and keeps the two
//! in lock-step:
//!
//! - `set_value` replaces everything and parses from scratch
//! - `apply_edit` splices a byte range and re-parses incrementally
//!
//! All offsets in and out of this module are byte offsets. Reads always
//! reflect the text as of the call; there is no version handshake.

use ropey::Rope;

use crate::error::{EngineError, EngineResult};
use crate::parsing::{ParseMetadata, SqlParser};

/// The single text buffer and its parse state
pub struct Document {
    content: Rope,
    tree: tree_sitter::Tree,
    parser: SqlParser,
    parse_metadata: ParseMetadata,
}

impl Document {
    /// Create a document from initial text
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Grammar` when the SQL grammar cannot be loaded.
    pub fn new(text: &str) -> EngineResult<Self> {
        let parser = SqlParser::new()?;
        let (tree, parse_metadata) = parser.parse(text, None)?;
        Ok(Self {
            content: Rope::from_str(text),
            tree,
            parser,
            parse_metadata,
        })
    }

    /// Replace the entire buffer content
    pub fn set_value(&mut self, text: &str) -> EngineResult<()> {
        self.content = Rope::from_str(text);
        let (tree, metadata) = self.parser.parse(text, None)?;
        self.tree = tree;
        self.parse_metadata = metadata;
        Ok(())
    }

    /// The buffer content, byte-for-byte as last written
    pub fn get_value(&self) -> String {
        self.content.to_string()
    }

    /// Buffer length in bytes
    pub fn len_bytes(&self) -> usize {
        self.content.len_bytes()
    }

    /// Number of lines; a trailing newline opens a final empty line
    pub fn line_count(&self) -> usize {
        self.content.len_lines()
    }

    /// Splice `text` over the byte range `from..to` and re-parse incrementally
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidRange` when the range does not fit the
    /// document and `EngineError::NotCharBoundary` when either offset points
    /// into a multi-byte character.
    pub fn apply_edit(&mut self, from: usize, to: usize, text: &str) -> EngineResult<()> {
        let length = self.len_bytes();
        if from > to || to > length {
            return Err(EngineError::InvalidRange { from, to, length });
        }
        self.check_char_boundary(from)?;
        self.check_char_boundary(to)?;

        let start_position = self.point_at(from);
        let old_end_position = self.point_at(to);

        let start_char = self.content.byte_to_char(from);
        let end_char = self.content.byte_to_char(to);
        self.content.remove(start_char..end_char);
        self.content.insert(start_char, text);

        let new_end_byte = from + text.len();
        let edit = tree_sitter::InputEdit {
            start_byte: from,
            old_end_byte: to,
            new_end_byte,
            start_position,
            old_end_position,
            new_end_position: self.point_at(new_end_byte),
        };

        let new_text = self.get_value();
        let (tree, metadata) = self.parser.parse_with_edit(&self.tree, &new_text, &edit)?;
        self.tree = tree;
        self.parse_metadata = metadata;
        Ok(())
    }

    /// Root node of the current parse tree
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Metadata from the most recent parse
    pub fn parse_metadata(&self) -> &ParseMetadata {
        &self.parse_metadata
    }

    /// Byte span of line `line` (0-based), excluding the line terminator
    ///
    /// Out-of-range lines clamp to the last line.
    pub fn line_span(&self, line: usize) -> (usize, usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        let start = self.content.line_to_byte(line);
        let text = self.content.line(line).to_string();
        let content_len = text.trim_end_matches(['\n', '\r']).len();
        (start, start + content_len)
    }

    fn point_at(&self, byte: usize) -> tree_sitter::Point {
        let line = self.content.byte_to_line(byte);
        let line_start = self.content.line_to_byte(line);
        tree_sitter::Point::new(line, byte - line_start)
    }

    fn check_char_boundary(&self, byte: usize) -> EngineResult<()> {
        let round_trip = self.content.char_to_byte(self.content.byte_to_char(byte));
        if round_trip != byte {
            return Err(EngineError::NotCharBoundary(byte));
        }
        Ok(())
    }
}
