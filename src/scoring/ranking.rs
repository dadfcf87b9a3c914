// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored items get sorted.
//!
//! Higher score first. Equal scores fall back to the catalog's display order,
//! so ties never depend on where an item sits in the backing array.

use crate::types::CatalogItem;
use std::cmp::Ordering;

/// An item with everything needed to place it in a result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub item: &'a CatalogItem,
    /// Order of the item's category. Only breaks ties in flat results.
    pub category_order: i64,
    pub score: f64,
}

/// Compare two scored items for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Item order** - ascending
/// 3. **Category order** - ascending, for flat lists mixing categories
/// 4. **Name**, then **category name** - final tiebreakers for absolute determinism
pub fn compare_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| compare_unscored(a, b))
}

/// Browse ordering: display order only, scores ignored.
pub fn compare_unscored(a: &Ranked, b: &Ranked) -> Ordering {
    a.item
        .order
        .cmp(&b.item.order)
        .then_with(|| a.category_order.cmp(&b.category_order))
        .then_with(|| a.item.name.cmp(&b.item.name))
        .then_with(|| a.item.category.cmp(&b.item.category))
}
