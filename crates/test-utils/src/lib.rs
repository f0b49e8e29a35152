// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQLSense - Test Utilities
//!
//! Shared fixtures for engine and schema tests: a fluent snapshot builder,
//! the standard shop schema most scenario tests run against, and a handful
//! of SQL text fixtures.

pub mod builder;
pub mod fixtures;

// Re-exports
pub use builder::{SnapshotBuilder, standard_snapshot};
