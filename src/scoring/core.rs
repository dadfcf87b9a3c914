// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Five signals, each with its own weight, summed into one score:
//!
//! | Signal               | Default weight | Fires when                                  |
//! |----------------------|----------------|---------------------------------------------|
//! | Exact name           | 100            | query is a substring of the name            |
//! | Exact description    | 50             | query is a substring of the description     |
//! | Fuzzy name           | 30 × sim       | `similarity(query, name) > 0.6`             |
//! | Fuzzy word           | 10 × sim       | per (query word, description word) > 0.7    |
//! | Synonym name / desc  | 20 / 10        | per expanded term found in name / desc      |
//!
//! # Key Invariant: Exact Beats Fuzzy
//!
//! A name that contains the query earns at least `exact_name` (100). A name
//! that is only fuzzy-similar earns at most `fuzzy_name` (30) from the name
//! signal. With the defaults, exactness wins unless the fuzzy item racks up
//! 70+ points from its description alone.
//!
//! Everything is compared lowercased. No signal depends on iteration order or
//! on any other item, so scores are deterministic and items can be scored in
//! parallel.

use crate::error::ConfigError;
use crate::fuzzy::similarity;
use crate::synonyms::SynonymTable;
use crate::types::CatalogItem;
use crate::utils::{normalize, terms};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// REFERENCE WEIGHTS
// =============================================================================

/// Query is a substring of the item name.
pub const EXACT_NAME_WEIGHT: f64 = 100.0;

/// Query is a substring of the item description.
pub const EXACT_DESCRIPTION_WEIGHT: f64 = 50.0;

/// Multiplier on name similarity once it clears `FUZZY_NAME_THRESHOLD`.
pub const FUZZY_NAME_WEIGHT: f64 = 30.0;
pub const FUZZY_NAME_THRESHOLD: f64 = 0.6;

/// Multiplier on per-word description similarity once it clears `FUZZY_WORD_THRESHOLD`.
pub const FUZZY_WORD_WEIGHT: f64 = 10.0;
pub const FUZZY_WORD_THRESHOLD: f64 = 0.7;

/// Per expanded synonym term found in the name / description.
pub const SYNONYM_NAME_WEIGHT: f64 = 20.0;
pub const SYNONYM_DESCRIPTION_WEIGHT: f64 = 10.0;

/// Items must score strictly above this to appear in filtered results.
pub const MIN_SCORE: f64 = 10.0;

/// Named weights and thresholds, so tuning never touches scoring logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    pub exact_name: f64,
    pub exact_description: f64,
    pub fuzzy_name: f64,
    pub fuzzy_name_threshold: f64,
    pub fuzzy_word: f64,
    pub fuzzy_word_threshold: f64,
    pub synonym_name: f64,
    pub synonym_description: f64,
    pub min_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_name: EXACT_NAME_WEIGHT,
            exact_description: EXACT_DESCRIPTION_WEIGHT,
            fuzzy_name: FUZZY_NAME_WEIGHT,
            fuzzy_name_threshold: FUZZY_NAME_THRESHOLD,
            fuzzy_word: FUZZY_WORD_WEIGHT,
            fuzzy_word_threshold: FUZZY_WORD_THRESHOLD,
            synonym_name: SYNONYM_NAME_WEIGHT,
            synonym_description: SYNONYM_DESCRIPTION_WEIGHT,
            min_score: MIN_SCORE,
        }
    }
}

impl ScoringWeights {
    /// Weights must be finite and non-negative; thresholds must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("exact_name", self.exact_name),
            ("exact_description", self.exact_description),
            ("fuzzy_name", self.fuzzy_name),
            ("fuzzy_word", self.fuzzy_word),
            ("synonym_name", self.synonym_name),
            ("synonym_description", self.synonym_description),
            ("min_score", self.min_score),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name,
                    value,
                    expected: "finite and >= 0",
                });
            }
        }

        let thresholds = [
            ("fuzzy_name_threshold", self.fuzzy_name_threshold),
            ("fuzzy_word_threshold", self.fuzzy_word_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidWeight {
                    name,
                    value,
                    expected: "between 0 and 1",
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// QUERY PREPARATION
// =============================================================================

/// A query normalized and synonym-expanded once, then scored against many items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    text: String,
    words: Vec<String>,
    expanded: BTreeSet<String>,
    fold_diacritics: bool,
}

impl PreparedQuery {
    pub fn new(query: &str, synonyms: &SynonymTable, fold_diacritics: bool) -> Self {
        let text = normalize(query, fold_diacritics);
        let words = terms(&text).map(str::to_string).collect();
        let expanded = synonyms.expand(&text);
        Self {
            text,
            words,
            expanded,
            fold_diacritics,
        }
    }

    /// Lowercased query with whitespace collapsed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Query terms plus their synonyms.
    pub fn expanded(&self) -> &BTreeSet<String> {
        &self.expanded
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Each signal's contribution to an item's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub exact_name: f64,
    pub exact_description: f64,
    pub fuzzy_name: f64,
    pub fuzzy_words: f64,
    pub synonym_name: f64,
    pub synonym_description: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.exact_name
            + self.exact_description
            + self.fuzzy_name
            + self.fuzzy_words
            + self.synonym_name
            + self.synonym_description
    }
}

/// Score one item against a prepared query, signal by signal.
///
/// An empty query scores zero: with nothing typed there is no evidence of
/// relevance, and browse mode never scores anyway.
pub fn score_breakdown(
    item: &CatalogItem,
    query: &PreparedQuery,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    if query.is_empty() {
        return breakdown;
    }

    let name = normalize(&item.name, query.fold_diacritics);
    let description = normalize(&item.description, query.fold_diacritics);
    let q = query.text.as_str();

    if name.contains(q) {
        breakdown.exact_name = weights.exact_name;
    }
    if description.contains(q) {
        breakdown.exact_description = weights.exact_description;
    }

    let name_similarity = similarity(q, &name);
    if name_similarity > weights.fuzzy_name_threshold {
        breakdown.fuzzy_name = name_similarity * weights.fuzzy_name;
    }

    // Every qualifying pair counts, so repeated near-matches add up
    for query_word in &query.words {
        for description_word in terms(&description) {
            let s = similarity(query_word, description_word);
            if s > weights.fuzzy_word_threshold {
                breakdown.fuzzy_words += s * weights.fuzzy_word;
            }
        }
    }

    for term in &query.expanded {
        if name.contains(term.as_str()) {
            breakdown.synonym_name += weights.synonym_name;
        }
        if description.contains(term.as_str()) {
            breakdown.synonym_description += weights.synonym_description;
        }
    }

    breakdown
}

/// Total relevance of one item for a prepared query.
pub fn score(item: &CatalogItem, query: &PreparedQuery, weights: &ScoringWeights) -> f64 {
    score_breakdown(item, query, weights).total()
}
