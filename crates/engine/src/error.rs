// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for engine operations
//!
//! Advisory conditions (syntax errors, misspellings, execution-line reports)
//! are never errors; they travel as diagnostics. `EngineError` covers the
//! conditions a correct host should not produce, plus grammar loading.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during engine operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Completion was requested outside the document
    #[error("Cursor offset {offset} is outside the document (length {length})")]
    CursorOutOfBounds {
        /// Requested cursor offset in bytes
        offset: usize,
        /// Current document length in bytes
        length: usize,
    },

    /// An edit range does not fit the current document
    #[error("Edit range {from}..{to} is invalid for a document of length {length}")]
    InvalidRange {
        /// Edit start offset in bytes
        from: usize,
        /// Edit end offset in bytes
        to: usize,
        /// Current document length in bytes
        length: usize,
    },

    /// An offset points into the middle of a multi-byte character
    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    /// The SQL grammar could not be loaded into the parser
    #[error("Failed to load SQL grammar: {0}")]
    Grammar(String),

    /// The parser returned no tree at all
    #[error("Parser produced no tree")]
    ParseFailed,

    /// The engine was constructed with an invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}
