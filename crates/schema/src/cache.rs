// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema cache
//!
//! The cache is the single slot holding the snapshot completion reads from.
//! Updates replace the snapshot wholesale; there is no merging, diffing, or
//! invalidation. Readers receive an `Arc` to the snapshot current at the time
//! of the call, so a replacement landing mid-read never tears.
//!
//! Pushes are applied in arrival order. A stale fetch that resolves after a
//! newer one still wins; the generation counter in the debug log is the
//! breadcrumb for diagnosing that ordering.

use std::sync::Arc;

use tracing::debug;

use crate::snapshot::SchemaSnapshot;

/// Holds the most recently pushed schema snapshot
#[derive(Debug)]
pub struct SchemaCache {
    current: Arc<SchemaSnapshot>,
    generation: u64,
}

impl SchemaCache {
    /// Create a cache holding the empty snapshot
    pub fn new() -> Self {
        Self {
            current: Arc::new(SchemaSnapshot::default()),
            generation: 0,
        }
    }

    /// Replace the stored snapshot unconditionally
    ///
    /// Every push is applied, including empty snapshots; an empty snapshot
    /// degrades completion to keyword mode rather than erroring.
    pub fn update(&mut self, snapshot: SchemaSnapshot) {
        self.generation += 1;
        debug!(
            generation = self.generation,
            tables = snapshot.tables.len(),
            columns = snapshot.columns.len(),
            "replacing schema snapshot"
        );
        self.current = Arc::new(snapshot);
    }

    /// The current snapshot
    ///
    /// The returned `Arc` stays valid across later updates; callers keep
    /// reading the snapshot they started with.
    pub fn read(&self) -> Arc<SchemaSnapshot> {
        Arc::clone(&self.current)
    }

    /// Number of updates applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for SchemaCache {
    fn default() -> Self {
        Self::new()
    }
}
