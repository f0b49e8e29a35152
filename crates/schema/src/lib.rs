// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQLSense - Schema Layer
//!
//! This crate provides the schema knowledge used by the SQLSense engine.
//! Schema information is pushed into the engine as immutable snapshots and
//! never queried live from a database:
//!
//! - **Snapshots**: flat table/column listings produced by a remote
//!   introspection service
//! - **Cache**: the single mutable slot holding the most recent snapshot
//! - **Provider**: the async boundary trait the host drives to fetch fresh
//!   snapshots
//!
//! ## Architecture
//!
//! ```text
//! SchemaProvider (async, host-driven)
//!        |
//!        v  SchemaSnapshot (immutable)
//!   SchemaCache  --- Arc<SchemaSnapshot> ---> completion / context readers
//! ```
//!
//! The cache replaces its snapshot wholesale on every update; readers hold an
//! `Arc` to the snapshot they started with, so a concurrent replacement never
//! tears a read.
//!
//! ## Usage
//!
//! ```rust
//! use sqlsense_schema::{SchemaCache, SchemaSnapshot};
//!
//! let mut cache = SchemaCache::new();
//! cache.update(SchemaSnapshot::new().with_table("orders"));
//! assert_eq!(cache.read().tables.len(), 1);
//! ```

pub mod cache;
pub mod provider;
pub mod snapshot;

// Re-exports
pub use cache::SchemaCache;
pub use provider::{SchemaError, SchemaProvider, SchemaResult};
pub use snapshot::{ColumnInfo, SchemaSnapshot, TableInfo};
