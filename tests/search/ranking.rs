//! Ranking: stronger evidence sorts first.

use crate::common::{make_category, make_item, names, shipped_engine};
use toolsift::{similarity, Catalog, SearchEngine, SynonymTable};

#[test]
fn test_exact_name_beats_fuzzy_name() {
    // "crontab" vs "cron tap": one substitution plus one insertion over 8 chars
    let fuzzy_name = "cron tap";
    let sim = similarity("crontab", fuzzy_name);
    assert!(sim > 0.6 && sim < 0.8, "fixture similarity drifted: {sim}");

    let catalog = Catalog::new(vec![make_category(
        "Tools",
        0,
        vec![
            make_item(fuzzy_name, "", 0),
            make_item("Crontab", "", 1),
        ],
    )])
    .unwrap();
    let engine = SearchEngine::new(catalog).with_synonyms(SynonymTable::empty());

    let hits = engine.search_flat("crontab");
    assert_eq!(names(&hits), vec!["Crontab", "cron tap"]);
    assert!(hits[0].score.unwrap() > hits[1].score.unwrap());
}

#[test]
fn test_name_hit_beats_description_hit() {
    let engine = shipped_engine();
    let hits = engine.search_flat("pdf");

    // "PDF Merger" names it; "Image to PDF" names it too; both beat description-only hits
    let top: Vec<_> = names(&hits).into_iter().take(2).collect();
    assert!(top.contains(&"PDF Merger"));
    assert!(top.contains(&"Image to PDF"));
}

#[test]
fn test_grouped_items_sorted_by_score_desc() {
    let engine = shipped_engine();
    for group in engine.search_grouped("image") {
        for pair in group.items.windows(2) {
            let (a, b) = (pair[0].score.unwrap(), pair[1].score.unwrap());
            assert!(
                a > b || (a == b && pair[0].item.order < pair[1].item.order),
                "{} ({a}) before {} ({b})",
                pair[0].name(),
                pair[1].name()
            );
        }
    }
}

#[test]
fn test_grouped_categories_follow_category_order() {
    let engine = shipped_engine();
    let groups = engine.search_grouped("generator");
    let orders: Vec<i64> = groups.iter().map(|g| g.order).collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);
}

#[test]
fn test_flat_merges_categories_before_sorting() {
    let engine = shipped_engine();
    let hits = engine.search_flat("converter");

    // every converter lives in one category, but the ranked list still has them all
    assert!(hits.len() >= 3);
    for pair in hits.windows(2) {
        assert!(pair[0].score.unwrap() >= pair[1].score.unwrap());
    }
}
