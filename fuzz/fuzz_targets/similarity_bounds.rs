// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Similarity feeds straight into the score. A value outside [0, 1] or an
//! asymmetric distance would silently reorder results.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use toolsift::{levenshtein, levenshtein_within, similarity};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
    max: u8,
}

/// Keep at most `max` characters, never splitting one.
fn cap(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fuzz_target!(|input: PairInput| {
    let a = cap(&input.a, 64);
    let b = cap(&input.b, 64);

    let d = levenshtein(a, b);
    assert_eq!(d, levenshtein(b, a), "distance must be symmetric");
    assert!(d <= a.chars().count().max(b.chars().count()));

    let s = similarity(a, b);
    assert!((0.0..=1.0).contains(&s), "similarity {s} out of range");
    assert_eq!(similarity(a, a), 1.0);

    let max = input.max as usize % 16;
    assert_eq!(levenshtein_within(a, b, max), d <= max);
});
