// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how items get their numbers, and how numbers become order.
//!
//! Stronger evidence always carries a bigger weight. An exact name hit outranks
//! anything fuzzy, and the display order settles ties.

mod core;
pub mod ranking;

pub use core::*;
