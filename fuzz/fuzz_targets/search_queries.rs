// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes go to every search mode. Nothing may panic, every hit
//! must clear the threshold, and the three modes must agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use toolsift::testing::tool_catalog;
use toolsift::SearchEngine;

fuzz_target!(|query: &[u8]| {
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| SearchEngine::new(tool_catalog()));

    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    let grouped = engine.search_grouped(&query);
    let flat = engine.search_flat(&query);
    let first = engine.search_first(&query);

    let grouped_count: usize = grouped.iter().map(|g| g.items.len()).sum();
    assert_eq!(grouped_count, flat.len(), "grouped and flat disagree");

    if query.trim().is_empty() {
        assert!(first.is_none());
        assert_eq!(flat.len(), engine.catalog().len());
        return;
    }

    let min = engine.config().weights.min_score;
    for hit in &flat {
        let score = hit.score.expect("scored results carry a score");
        assert!(score.is_finite());
        assert!(score > min, "{score} does not clear {min}");
    }
    assert_eq!(first, flat.first().copied());
});
