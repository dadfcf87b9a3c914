// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase and collapse whitespace.
///
/// With `fold_diacritics`, accented letters also compare equal to their base
/// letters:
/// - "café" → "cafe"
/// - "naïve" → "naive"
///
/// Folding needs the `unicode-normalization` feature. Without it the flag is
/// ignored and only lowercasing happens.
pub fn normalize(value: &str, fold_diacritics: bool) -> String {
    let lowered = if fold_diacritics {
        fold(value)
    } else {
        value.to_lowercase()
    };
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into whitespace-separated terms.
pub fn terms(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

#[cfg(feature = "unicode-normalization")]
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
