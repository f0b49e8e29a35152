// Copyright (c) 2026 SQLSense Contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Misspelling detection
//!
//! Two strategies live behind one detector:
//!
//! - [`MisspellingDetector::scan`] matches a fixed catalog of known keyword
//!   corruptions and produces diagnostics. High confidence, runs on every
//!   text change.
//! - [`MisspellingDetector::is_likely_misspelling`] is an edit-distance
//!   heuristic over the keyword catalog. Lower confidence, exposed as a query
//!   so hosts can power quick-fix style features without the scan growing
//!   false positives on identifiers that merely resemble keywords.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::diagnostics::{Diagnostic, SPELLCHECK_SOURCE};
use crate::keywords;

/// Default similarity threshold for the likely-misspelling heuristic
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.6;

// Known corruptions, phrase patterns ahead of their bare-word fallbacks so
// overlap suppression keeps the wider match.
static CATALOG: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bORDER\s+BUY\b", "ORDER BY"),
        (r"(?i)\bGROUP\s+BUY\b", "GROUP BY"),
        (r"(?i)\bGRUOP\s+BY\b", "GROUP BY"),
        (r"(?i)\bINNER\s+JION\b", "INNER JOIN"),
        (r"(?i)\bLEFT\s+JION\b", "LEFT JOIN"),
        (r"(?i)\bRIGHT\s+JION\b", "RIGHT JOIN"),
        (r"(?i)\bJION\b", "JOIN"),
        (r"(?i)\bSELEC\b", "SELECT"),
        (r"(?i)\bSELCT\b", "SELECT"),
        (r"(?i)\bSLECT\b", "SELECT"),
        (r"(?i)\bFORM\b", "FROM"),
        (r"(?i)\bWHER\b", "WHERE"),
        (r"(?i)\bWHRE\b", "WHERE"),
        (r"(?i)\bWEHRE\b", "WHERE"),
        (r"(?i)\bHAVNG\b", "HAVING"),
        (r"(?i)\bDISTINC\b", "DISTINCT"),
        (r"(?i)\bDELET\b", "DELETE"),
        (r"(?i)\bUPDAT\b", "UPDATE"),
        (r"(?i)\bINSER\b", "INSERT"),
        (r"(?i)\bLIMTI\b", "LIMIT"),
    ]
    .into_iter()
    .map(|(pattern, correction)| (Regex::new(pattern).unwrap(), correction))
    .collect()
});

/// Detects keyword misspellings in buffer text
#[derive(Debug, Clone)]
pub struct MisspellingDetector {
    min_similarity: f64,
}

impl Default for MisspellingDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SIMILARITY)
    }
}

impl MisspellingDetector {
    /// Create a detector with the given heuristic similarity threshold
    pub fn new(min_similarity: f64) -> Self {
        Self { min_similarity }
    }

    /// Scan `text` against the corruption catalog
    ///
    /// Every match yields an error diagnostic spanning exactly the matched
    /// text. When a phrase match and a bare-word match overlap, only the
    /// earlier catalog entry (the phrase) is reported.
    pub fn scan(&self, text: &str) -> Vec<Diagnostic> {
        let mut found: Vec<Diagnostic> = Vec::new();
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (pattern, correction) in CATALOG.iter() {
            for m in pattern.find_iter(text) {
                let overlaps = spans.iter().any(|&(f, t)| m.start() < t && f < m.end());
                if overlaps {
                    continue;
                }
                spans.push((m.start(), m.end()));
                found.push(Diagnostic::error(
                    m.start(),
                    m.end(),
                    format!(
                        "Misspelled keyword: \"{}\" (did you mean \"{}\"?)",
                        m.as_str(),
                        correction
                    ),
                    SPELLCHECK_SOURCE,
                ));
            }
        }

        found.sort_by_key(|d| d.from);
        if !found.is_empty() {
            debug!(count = found.len(), "misspellings detected");
        }
        found
    }

    /// Best keyword correction for `word`, if it plausibly is one
    ///
    /// A word qualifies when its normalized similarity to a single-word
    /// catalog keyword exceeds the configured threshold and the two share a
    /// leading 2-3 character prefix. Words shorter than three characters and
    /// exact keywords are never flagged.
    pub fn is_likely_misspelling(&self, word: &str) -> Option<&'static str> {
        if word.chars().count() < 3 {
            return None;
        }
        let lower = word.to_lowercase();
        if keywords::is_keyword(&lower) {
            return None;
        }

        let mut best: Option<(&'static str, f64)> = None;
        for keyword in keywords::KEYWORDS {
            // Phrase corruptions are the catalog patterns' job.
            if keyword.label.contains(' ') {
                continue;
            }
            let target = keyword.label.to_lowercase();
            if !shares_prefix(&lower, &target) {
                continue;
            }
            let score = similarity_score(&lower, &target);
            if score > self.min_similarity && best.is_none_or(|(_, s)| score > s) {
                best = Some((keyword.label, score));
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Levenshtein edit distance between two strings
///
/// Classic two-row dynamic programming over the shorter string's width.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let (longer, shorter) = if s1.chars().count() >= s2.chars().count() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    let longer_chars: Vec<char> = longer.chars().collect();
    let shorter_chars: Vec<char> = shorter.chars().collect();

    if shorter_chars.is_empty() {
        return longer_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=shorter_chars.len()).collect();
    let mut curr_row = vec![0; shorter_chars.len() + 1];

    for (i, &c1) in longer_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &c2) in shorter_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[shorter_chars.len()]
}

/// Normalized similarity in `[0, 1]`, where 1 is an exact match
pub fn similarity_score(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (levenshtein_distance(s1, s2) as f64 / max_len as f64)
}

fn shares_prefix(word: &str, keyword: &str) -> bool {
    let required = if word.chars().count() >= 3 && keyword.chars().count() >= 3 {
        3
    } else {
        2
    };
    let word_prefix: Vec<char> = word.chars().take(required).collect();
    let keyword_prefix: Vec<char> = keyword.chars().take(required).collect();
    word_prefix.len() == required && word_prefix == keyword_prefix
}
