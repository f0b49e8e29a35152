// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Engine facade
//!
//! ## Overview
//!
//! `Engine` owns the document, the schema cache, the detectors, and the
//! diagnostic publisher, and exposes the operations a host wires to its
//! editor events:
//!
//! ```text
//! host edit events ──> set_value / apply_edit ──> relint ──> publisher
//! schema fetches   ──> apply_schema           ──> cache
//! completion keys  ──> complete               ──> provider (reads cache)
//! query engine     ──> report_execution_error ──> publisher
//! run button       ──> validate_document
//! ```
//!
//! Every operation is synchronous and runs on the caller's thread. The only
//! asynchronous collaborator, the schema fetch, happens outside the engine;
//! its result enters through `apply_schema` on the caller's thread like
//! everything else.
//!
//! ## Usage
//!
//! ```rust
//! use sqlsense_engine::{Engine, EngineConfig};
//! use sqlsense_schema::SchemaSnapshot;
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! engine.apply_schema(SchemaSnapshot::new().with_table("orders"));
//! engine.set_value("SELECT * FROM ord").unwrap();
//!
//! let candidates = engine.complete(17).unwrap().unwrap();
//! assert_eq!(candidates[0].label, "orders");
//! ```

use sqlsense_schema::{SchemaCache, SchemaSnapshot};
use tracing::debug;

use crate::completion::{CompletionCandidate, CompletionProvider};
use crate::config::EngineConfig;
use crate::context::QueryContext;
use crate::diagnostics::{Diagnostic, DiagnosticPublisher};
use crate::document::Document;
use crate::error::{EngineError, EngineResult};
use crate::spellcheck::MisspellingDetector;
use crate::structure::StructuralChecker;
use crate::validate::{Validation, validate};

/// The authoring intelligence engine for a single SQL buffer
pub struct Engine {
    config: EngineConfig,
    document: Document,
    schema: SchemaCache,
    publisher: DiagnosticPublisher,
    spellcheck: MisspellingDetector,
    structure: StructuralChecker,
    provider: CompletionProvider,
}

impl Engine {
    /// Create an engine with an empty document and empty schema
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` for an invalid configuration and
    /// `EngineError::Grammar` when the SQL grammar cannot be loaded.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let document = Document::new("")?;
        let spellcheck = MisspellingDetector::new(config.min_similarity);

        Ok(Self {
            config,
            document,
            schema: SchemaCache::new(),
            publisher: DiagnosticPublisher::new(),
            spellcheck,
            structure: StructuralChecker::new(),
            provider: CompletionProvider::new(),
        })
    }

    /// Replace the schema snapshot used by completion
    ///
    /// Pushes apply in arrival order and replace wholesale; an empty snapshot
    /// degrades completion to keyword mode.
    pub fn apply_schema(&mut self, snapshot: SchemaSnapshot) {
        self.schema.update(snapshot);
    }

    /// Replace the buffer content and republish diagnostics
    pub fn set_value(&mut self, text: &str) -> EngineResult<()> {
        self.document.set_value(text)?;
        self.relint();
        Ok(())
    }

    /// The buffer content, byte-for-byte as last written
    pub fn get_value(&self) -> String {
        self.document.get_value()
    }

    /// Splice `text` over the byte range `from..to` and republish diagnostics
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidRange` or `EngineError::NotCharBoundary`
    /// for ranges that do not fit the current document.
    pub fn apply_edit(&mut self, from: usize, to: usize, text: &str) -> EngineResult<()> {
        self.document.apply_edit(from, to, text)?;
        self.relint();
        Ok(())
    }

    /// Compute completion candidates at a byte offset
    ///
    /// Returns `Ok(None)` when no identifier prefix ends at the cursor.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::CursorOutOfBounds` or
    /// `EngineError::NotCharBoundary` for cursors a correct host should never
    /// send.
    pub fn complete(&self, cursor: usize) -> EngineResult<Option<Vec<CompletionCandidate>>> {
        let text = self.document.get_value();
        if cursor > text.len() {
            return Err(EngineError::CursorOutOfBounds {
                offset: cursor,
                length: text.len(),
            });
        }
        if !text.is_char_boundary(cursor) {
            return Err(EngineError::NotCharBoundary(cursor));
        }

        let snapshot = self.schema.read();
        let context = QueryContext::of(&text);
        Ok(self
            .provider
            .complete(&text, cursor, &snapshot, &context, &self.config))
    }

    /// Highlight the line a remote execution error points at
    ///
    /// `line` is 1-based; values below 1 are ignored, values past the end
    /// clamp to the last line. The highlight replaces all local diagnostics
    /// until the next text change or `clear_diagnostics`.
    pub fn report_execution_error(&mut self, line: i64) {
        self.publisher.highlight_line(line, &self.document);
    }

    /// Drop all published diagnostics
    pub fn clear_diagnostics(&mut self) {
        self.publisher.clear();
    }

    /// The currently published diagnostics, for the host to render
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.publisher.diagnostics()
    }

    /// Check whether the buffer holds anything executable
    pub fn validate_document(&self) -> Validation {
        validate(&self.document.get_value())
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the document, for hosts that need line geometry
    pub fn document(&self) -> &Document {
        &self.document
    }

    // Recompute local diagnostics from the current text and publish them,
    // replacing whatever was visible before.
    fn relint(&mut self) {
        let mut diagnostics = self.structure.check(&self.document);
        if self.config.spellcheck_enabled {
            diagnostics.extend(self.spellcheck.scan(&self.document.get_value()));
        }
        debug!(count = diagnostics.len(), "republishing diagnostics");
        self.publisher
            .publish(diagnostics, self.document.len_bytes());
    }
}
