//! Synonym expansion as seen through search.

use crate::common::{make_category, make_item, names, shipped_engine};
use toolsift::{Catalog, SearchConfig, SearchEngine};

#[test]
fn test_picture_finds_image_compression() {
    let catalog = Catalog::new(vec![make_category(
        "Image Tools",
        0,
        vec![make_item(
            "Image Compression",
            "Reduce image file size",
            0,
        )],
    )])
    .unwrap();
    let engine = SearchEngine::new(catalog);
    let item = engine.catalog().items().next().unwrap();

    assert!(!item.name.to_lowercase().contains("picture"));
    assert!(!item.description.to_lowercase().contains("picture"));

    let score = engine.score(item, "picture");
    assert!(score > engine.config().weights.min_score, "score {score}");
    assert_eq!(names(&engine.search_flat("picture")), vec!["Image Compression"]);
}

#[test]
fn test_money_finds_currency_converter() {
    let engine = shipped_engine();
    let best = engine.search_first("money").unwrap();
    assert_eq!(best.name(), "Currency Converter");
}

#[test]
fn test_extra_synonyms_from_config() {
    let config = SearchConfig::from_toml_str(
        r#"
        [synonyms]
        extra = { secret = ["vault"] }
        "#,
    )
    .unwrap();
    let engine = shipped_engine().with_config(config);

    let expanded = engine.expand("vault");
    assert!(expanded.contains("secret"));
    // one hop only: "secret" does not chain into the password entry
    assert!(!expanded.contains("password"));
}

#[test]
fn test_single_letter_query_does_not_expand() {
    let engine = shipped_engine();
    assert_eq!(engine.expand("x").len(), 1);
}
