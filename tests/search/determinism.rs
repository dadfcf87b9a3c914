//! Determinism: same inputs, same outputs, regardless of backing order.

use crate::common::{make_category, make_item, names, shipped_engine};
use toolsift::{Catalog, SearchEngine};

fn twins(order_a: i64, order_b: i64, reversed: bool) -> Catalog {
    // identical text, so identical scores
    let a = make_item("Merge PDF A", "Merge pdf files", order_a);
    let b = make_item("Merge PDF B", "Merge pdf files", order_b);
    let items = if reversed { vec![b, a] } else { vec![a, b] };
    Catalog::new(vec![make_category("Files", 0, items)]).unwrap()
}

#[test]
fn test_ties_break_by_order_not_position() {
    for reversed in [false, true] {
        let engine = SearchEngine::new(twins(5, 2, reversed));
        let hits = engine.search_flat("merge pdf");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, hits[1].score);
        assert_eq!(names(&hits), vec!["Merge PDF B", "Merge PDF A"]);
    }
}

#[test]
fn test_repeated_searches_are_identical() {
    let engine = shipped_engine();
    for query in ["image", "text editor", "qr", "time"] {
        let first = engine.search_grouped(query);
        for _ in 0..3 {
            assert_eq!(engine.search_grouped(query), first);
        }
    }
}

#[test]
fn test_concurrent_searches_agree() {
    let engine = shipped_engine();
    let expected = engine.search_flat("converter");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.search_flat("converter")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_large_catalog_matches_sequential_expectations() {
    // big enough to take the parallel scoring path when it is compiled in
    let items = (0..2000)
        .map(|i| make_item(&format!("Tool {i}"), &format!("Utility number {i}"), 2000 - i))
        .chain(std::iter::once(make_item("Password Vault", "Store passwords", 5000)))
        .collect();
    let engine = SearchEngine::new(Catalog::new(vec![make_category("Many", 0, items)]).unwrap());

    let hits = engine.search_flat("password");
    assert_eq!(hits.first().map(|h| h.name()), Some("Password Vault"));

    let again = engine.search_flat("password");
    assert_eq!(hits, again);
}
