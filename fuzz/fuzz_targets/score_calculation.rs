// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for per-item scoring.
//!
//! Every signal is a non-negative contribution, so the breakdown must sum to
//! the score and no component may ever be negative or NaN.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use toolsift::{score, score_breakdown, CatalogItem, PreparedQuery, ScoringWeights, SynonymTable};

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    name: String,
    description: String,
    query: String,
    fold_diacritics: bool,
}

fuzz_target!(|input: ScoreInput| {
    let name: String = input.name.chars().take(64).collect();
    let description: String = input.description.chars().take(256).collect();
    let query: String = input.query.chars().take(64).collect();

    let item = CatalogItem::new(name, description, 0);
    let synonyms = SynonymTable::builtin();
    let prepared = PreparedQuery::new(&query, &synonyms, input.fold_diacritics);
    let weights = ScoringWeights::default();

    let breakdown = score_breakdown(&item, &prepared, &weights);
    let parts = [
        breakdown.exact_name,
        breakdown.exact_description,
        breakdown.fuzzy_name,
        breakdown.fuzzy_words,
        breakdown.synonym_name,
        breakdown.synonym_description,
    ];
    for part in parts {
        assert!(part.is_finite() && part >= 0.0, "bad component {part}");
    }
    assert_eq!(breakdown.total(), score(&item, &prepared, &weights));

    if prepared.is_empty() {
        assert_eq!(breakdown.total(), 0.0);
    }
});
