// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema provider boundary
//!
//! This module defines the async trait the host implements against its
//! schema-introspection service. The engine itself never awaits; the host
//! drives a fetch in the background and pushes the result into the engine
//! when it resolves.

use serde::Serialize;
use thiserror::Error;

use crate::snapshot::SchemaSnapshot;

/// Result type alias for schema provider operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while fetching a schema snapshot
///
/// A failed fetch is advisory: the engine keeps its previous snapshot and
/// completion keeps working from it.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
pub enum SchemaError {
    /// The introspection request itself failed
    #[error("Failed to fetch schema: {0}")]
    FetchFailed(String),

    /// The introspection service is not reachable
    #[error("Schema introspection service unavailable")]
    Unavailable,

    /// The service answered with a payload that does not match the snapshot shape
    #[error("Malformed schema payload: {0}")]
    Malformed(String),
}

/// Async source of schema snapshots
///
/// Implementations wrap whatever transport the host uses to reach its
/// introspection service. Fetches are fire-and-forget from the engine's point
/// of view: the host awaits the future and applies the resulting snapshot via
/// the engine's schema push operation, in arrival order.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use sqlsense_schema::{SchemaProvider, SchemaResult, SchemaSnapshot};
///
/// struct FixedProvider(SchemaSnapshot);
///
/// #[async_trait]
/// impl SchemaProvider for FixedProvider {
///     async fn fetch_snapshot(&self) -> SchemaResult<SchemaSnapshot> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Fetch a complete snapshot of the remote schema
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Unavailable` if the service cannot be reached,
    /// `SchemaError::FetchFailed` if the introspection request fails, and
    /// `SchemaError::Malformed` if the response does not parse.
    async fn fetch_snapshot(&self) -> SchemaResult<SchemaSnapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SchemaCache;

    struct StaticProvider {
        snapshot: SchemaSnapshot,
    }

    #[async_trait::async_trait]
    impl SchemaProvider for StaticProvider {
        async fn fetch_snapshot(&self) -> SchemaResult<SchemaSnapshot> {
            Ok(self.snapshot.clone())
        }
    }

    struct FailingProvider;

    #[async_trait::async_trait]
    impl SchemaProvider for FailingProvider {
        async fn fetch_snapshot(&self) -> SchemaResult<SchemaSnapshot> {
            Err(SchemaError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_fetch_then_push_into_cache() {
        let provider = StaticProvider {
            snapshot: SchemaSnapshot::new()
                .with_table("orders")
                .with_column("order_id", "INTEGER", "orders"),
        };

        let mut cache = SchemaCache::new();
        let snapshot = provider.fetch_snapshot().await.unwrap();
        cache.update(snapshot);

        assert_eq!(cache.read().tables.len(), 1);
        assert_eq!(cache.read().columns.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_untouched() {
        let mut cache = SchemaCache::new();
        cache.update(SchemaSnapshot::new().with_table("orders"));

        let result = FailingProvider.fetch_snapshot().await;
        assert_eq!(result.unwrap_err(), SchemaError::Unavailable);

        // The host only pushes on success; the previous snapshot survives.
        assert_eq!(cache.read().tables.len(), 1);
        assert_eq!(cache.generation(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = SchemaError::FetchFailed("connection reset".to_string());
        assert_eq!(err.to_string(), "Failed to fetch schema: connection reset");
        assert_eq!(
            SchemaError::Unavailable.to_string(),
            "Schema introspection service unavailable"
        );
    }
}
