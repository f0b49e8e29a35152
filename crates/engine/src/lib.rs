// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQLSense - Engine
//!
//! In-editor authoring intelligence for a single SQL buffer. The engine
//! detects syntax and spelling problems as text changes, offers ranked
//! schema-aware completion, and maps remote execution errors back onto the
//! offending source line.
//!
//! ## Architecture
//!
//! ```text
//!                  ┌────────────┐
//!   text edits ──> │  Document  │─ tree ─> StructuralChecker ─┐
//!                  └────────────┘                             ├─> DiagnosticPublisher
//!                        │ text ───> MisspellingDetector ─────┘
//!                        │
//!                        └ text ───> QueryContext ──┐
//!                                                   ├─> CompletionProvider
//!   schema pushes ──> SchemaCache ── snapshot ──────┘
//! ```
//!
//! The pieces are plain synchronous values wired together by [`Engine`];
//! hosts with their own event loops can also drive the components directly.
//!
//! ## Quick start
//!
//! ```rust
//! use sqlsense_engine::{Engine, EngineConfig};
//! use sqlsense_schema::SchemaSnapshot;
//!
//! let mut engine = Engine::new(EngineConfig::default())?;
//!
//! engine.apply_schema(
//!     SchemaSnapshot::new()
//!         .with_table("users")
//!         .with_column("email", "TEXT", "users"),
//! );
//!
//! engine.set_value("SELECT em FROM users")?;
//! let candidates = engine.complete(9)?.unwrap();
//! assert_eq!(candidates[0].label, "email");
//! # Ok::<(), sqlsense_engine::EngineError>(())
//! ```

pub mod completion;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod document;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod parsing;
pub mod spellcheck;
pub mod structure;
pub mod validate;

// Re-exports
pub use completion::{CandidateKind, CompletionCandidate, CompletionProvider};
pub use config::{ConfigError, EngineConfig};
pub use context::QueryContext;
pub use diagnostics::{
    Diagnostic, DiagnosticPublisher, EXECUTION_SOURCE, SPELLCHECK_SOURCE, SYNTAX_SOURCE, Severity,
};
pub use document::Document;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use spellcheck::MisspellingDetector;
pub use structure::StructuralChecker;
pub use validate::{Validation, validate};
