// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Pre-execution validation: is there anything here worth sending to the
//! query engine at all? Syntactic correctness is the structural checker's
//! job, not this one's.

use serde::{Deserialize, Serialize};

const EMPTY_QUERY_MESSAGE: &str = "Query is empty or contains only comments";

/// Outcome of validating a buffer before execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Whether the text contains anything executable
    pub is_valid: bool,
    /// Validation failure messages; empty when valid
    pub errors: Vec<String>,
}

impl Validation {
    /// The passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    fn empty_query() -> Self {
        Self {
            is_valid: false,
            errors: vec![EMPTY_QUERY_MESSAGE.to_string()],
        }
    }
}

/// Validate that `text` holds at least one executable line
///
/// A line counts as executable unless it is blank or starts (after leading
/// whitespace) with a `--` line comment.
pub fn validate(text: &str) -> Validation {
    let has_content = text.lines().any(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with("--")
    });

    if has_content {
        Validation::valid()
    } else {
        Validation::empty_query()
    }
}
