// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! `similarity` is what scoring uses. The raw and bounded distances are
//! exported for callers that want a hard edit budget instead of a ratio.

mod levenshtein;

pub use levenshtein::*;
