//! End-to-end correctness: who shows up, in which category, for which query.

use crate::common::{make_category, make_item, names, sample_catalog, shipped_engine};
use toolsift::{Catalog, SearchEngine};

// ============================================================================
// WORKED EXAMPLE
// ============================================================================

#[test]
fn test_password_returns_only_utility_tools() {
    let engine = SearchEngine::new(sample_catalog());
    let groups = engine.search_grouped("password");

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Utility Tools");
    assert_eq!(names(&groups[0].items), vec!["Password Generator"]);

    // exact name (100) + exact description (50) at minimum
    let score = groups[0].items[0].score.unwrap();
    assert!(score >= 150.0, "score {score} below 150");
}

#[test]
fn test_empty_query_returns_both_categories() {
    let engine = SearchEngine::new(sample_catalog());
    let groups = engine.search_grouped("");

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Image Tools");
    assert_eq!(names(&groups[0].items), vec!["Background Removal"]);
    assert_eq!(groups[1].name, "Utility Tools");
    assert_eq!(names(&groups[1].items), vec!["Password Generator"]);
}

// ============================================================================
// THRESHOLD
// ============================================================================

#[test]
fn test_nonsense_query_matches_nothing() {
    let engine = SearchEngine::new(sample_catalog());
    let query = "zzzzzzzz999nonsense";

    assert!(engine.search_grouped(query).is_empty());
    assert!(engine.search_flat(query).is_empty());
    assert!(engine.search_first(query).is_none());
}

#[test]
fn test_every_hit_clears_threshold() {
    let engine = shipped_engine();
    let min = engine.config().weights.min_score;

    for query in ["pdf", "image", "convert", "qr code", "colour", "zip", "crn parser"] {
        for group in engine.search_grouped(query) {
            assert!(!group.items.is_empty(), "empty group {} for {query:?}", group.name);
            for hit in &group.items {
                let score = hit.score.unwrap();
                assert!(score > min, "{} scored {score} for {query:?}", hit.name());
            }
        }
    }
}

// ============================================================================
// BROWSE
// ============================================================================

#[test]
fn test_browse_sorts_categories_and_items_by_order() {
    let catalog = Catalog::new(vec![
        make_category(
            "Second",
            20,
            vec![make_item("B2", "", 9), make_item("B1", "", -3)],
        ),
        make_category(
            "First",
            10,
            vec![make_item("A3", "", 30), make_item("A1", "", 10), make_item("A2", "", 20)],
        ),
    ])
    .unwrap();
    let engine = SearchEngine::new(catalog);

    let groups = engine.search_grouped("   ");
    assert_eq!(groups[0].name, "First");
    assert_eq!(names(&groups[0].items), vec!["A1", "A2", "A3"]);
    assert_eq!(groups[1].name, "Second");
    assert_eq!(names(&groups[1].items), vec!["B1", "B2"]);
    assert!(groups.iter().flat_map(|g| &g.items).all(|h| h.score.is_none()));
}

#[test]
fn test_browse_drops_nothing() {
    let engine = shipped_engine();
    let total: usize = engine.search_grouped("").iter().map(|g| g.items.len()).sum();
    assert_eq!(total, engine.catalog().len());
    assert_eq!(engine.search_flat("").len(), engine.catalog().len());
}

#[test]
fn test_flat_browse_orders_by_item_then_category_order() {
    let engine = SearchEngine::new(sample_catalog());
    let hits = engine.search_flat("");

    // both items have order 0; category order breaks the tie
    assert_eq!(names(&hits), vec!["Background Removal", "Password Generator"]);
    assert_eq!(hits[0].category(), "Image Tools");
}

// ============================================================================
// FIRST MATCH
// ============================================================================

#[test]
fn test_first_is_best_flat_hit() {
    let engine = shipped_engine();
    for query in ["password", "pdf", "picture", "convert", "nothing-here-xyz"] {
        let flat = engine.search_flat(query);
        assert_eq!(engine.search_first(query), flat.first().copied(), "{query:?}");
    }
    assert!(engine.search_first("").is_none());
}

#[test]
fn test_first_jumps_to_typo_target() {
    let engine = shipped_engine();
    let best = engine.search_first("curency converter").unwrap();
    assert_eq!(best.name(), "Currency Converter");
    assert_eq!(best.item.route.as_deref(), Some("/tools/currency-converter"));
}
