// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Scoring decides how relevant one item is. This module runs that over the
//! whole catalog, applies the threshold, and hands back one of three shapes:
//! grouped by category, one flat list, or just the best match.

mod engine;

pub use engine::SearchEngine;
