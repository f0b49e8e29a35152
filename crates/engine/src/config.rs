// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Engine configuration
//!
//! Configuration arrives from the host as a JSON settings object under the
//! `"sqlsense"` key, with camelCase field names:
//!
//! ```json
//! {
//!   "sqlsense": {
//!     "maxCompletions": 50,
//!     "spellcheck": true,
//!     "minSimilarity": 0.6
//!   }
//! }
//! ```
//!
//! Unknown fields are ignored; missing fields keep their defaults.

use thiserror::Error;

/// Errors from configuration validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// maxCompletions cannot be zero, a completion response needs room
    #[error("maxCompletions must be greater than zero")]
    ZeroCompletions,

    /// The misspelling similarity threshold is outside its meaningful range
    #[error("minSimilarity must be within (0.0, 1.0], got {0}")]
    SimilarityOutOfRange(f64),
}

/// Tunable engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum number of completion candidates returned per request
    pub max_completions: usize,

    /// Whether the misspelling detector runs on every text change
    pub spellcheck_enabled: bool,

    /// Similarity threshold for the likely-misspelling heuristic
    pub min_similarity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_completions: 50,
            spellcheck_enabled: true,
            min_similarity: 0.6,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a host settings object
    ///
    /// Returns `None` when the settings carry no `"sqlsense"` section at all;
    /// the caller keeps its current configuration in that case.
    pub fn from_json_settings(settings: &serde_json::Value) -> Option<Self> {
        let section = settings.get("sqlsense")?;
        let mut config = Self::default();

        if let Some(n) = section.get("maxCompletions").and_then(|v| v.as_u64()) {
            config.max_completions = n as usize;
        }
        if let Some(enabled) = section.get("spellcheck").and_then(|v| v.as_bool()) {
            config.spellcheck_enabled = enabled;
        }
        if let Some(threshold) = section.get("minSimilarity").and_then(|v| v.as_f64()) {
            config.min_similarity = threshold;
        }

        Some(config)
    }

    /// Check the configuration for out-of-range values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroCompletions` if `max_completions` is zero and
    /// `ConfigError::SimilarityOutOfRange` if `min_similarity` leaves `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_completions == 0 {
            return Err(ConfigError::ZeroCompletions);
        }
        if self.min_similarity <= 0.0 || self.min_similarity > 1.0 {
            return Err(ConfigError::SimilarityOutOfRange(self.min_similarity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_completions, 50);
        assert!(config.spellcheck_enabled);
    }

    #[test]
    fn test_from_json_settings() {
        let settings = json!({
            "sqlsense": {
                "maxCompletions": 10,
                "spellcheck": false,
                "minSimilarity": 0.8
            }
        });

        let config = EngineConfig::from_json_settings(&settings).unwrap();
        assert_eq!(config.max_completions, 10);
        assert!(!config.spellcheck_enabled);
        assert_eq!(config.min_similarity, 0.8);
    }

    #[test]
    fn test_missing_section_returns_none() {
        let settings = json!({ "editor": { "tabSize": 4 } });
        assert!(EngineConfig::from_json_settings(&settings).is_none());
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = json!({ "sqlsense": { "maxCompletions": 5 } });
        let config = EngineConfig::from_json_settings(&settings).unwrap();
        assert_eq!(config.max_completions, 5);
        assert!(config.spellcheck_enabled);
        assert_eq!(config.min_similarity, 0.6);
    }

    #[test]
    fn test_validate_rejects_zero_completions() {
        let config = EngineConfig {
            max_completions: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCompletions));
    }

    #[test]
    fn test_validate_rejects_similarity_out_of_range() {
        for value in [0.0, -0.1, 1.5] {
            let config = EngineConfig {
                min_similarity: value,
                ..EngineConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::SimilarityOutOfRange(value))
            );
        }
    }
}
