//! Pipeline properties over randomly generated catalogs.

use proptest::prelude::*;
use toolsift::{Catalog, CatalogItem, Category, SearchEngine};

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,7}").unwrap()
}

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..6).prop_map(|words| words.join(" "))
}

/// Up to three categories with unique names and unique, non-dense orders.
fn categories() -> impl Strategy<Value = Vec<Category>> {
    prop::collection::vec(
        (
            prop::collection::btree_map(word(), description(), 0..6),
            -50i64..50,
        ),
        1..4,
    )
    .prop_map(|groups| {
        groups
            .into_iter()
            .enumerate()
            .map(|(c, (entries, category_order))| {
                let items = entries
                    .into_iter()
                    .enumerate()
                    // stride 7 keeps orders unique but sparse; reversed so position != order
                    .map(|(i, (name, desc))| CatalogItem::new(name, desc, 100 - 7 * i as i64))
                    .collect();
                Category::new(format!("Category {c}"), category_order, items)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: browse returns every item, sorted by order within each category.
    #[test]
    fn prop_browse_is_complete_and_sorted(categories in categories()) {
        let catalog = Catalog::new(categories).unwrap();
        let engine = SearchEngine::new(catalog.clone());
        let groups = engine.search_grouped("");

        prop_assert_eq!(groups.len(), catalog.categories().len());
        for pair in groups.windows(2) {
            prop_assert!(pair[0].order <= pair[1].order);
        }
        for group in &groups {
            let expected = catalog.category(group.name).unwrap().items.len();
            prop_assert_eq!(group.items.len(), expected);
            for pair in group.items.windows(2) {
                prop_assert!(pair[0].item.order < pair[1].item.order);
            }
            prop_assert!(group.items.iter().all(|h| h.score.is_none()));
        }
    }

    /// Property: every non-empty query result clears the threshold and has no empty groups.
    #[test]
    fn prop_grouped_threshold(categories in categories(), query in word()) {
        let engine = SearchEngine::new(Catalog::new(categories).unwrap());
        let min = engine.config().weights.min_score;
        for group in engine.search_grouped(&query) {
            prop_assert!(!group.items.is_empty());
            for hit in &group.items {
                prop_assert!(hit.score.unwrap() > min);
            }
        }
    }

    /// Property: flat results hold exactly the grouped results, reordered.
    #[test]
    fn prop_flat_is_grouped_merged(categories in categories(), query in word()) {
        let engine = SearchEngine::new(Catalog::new(categories).unwrap());
        let mut grouped: Vec<_> = engine
            .search_grouped(&query)
            .into_iter()
            .flat_map(|g| g.items)
            .map(|h| (h.item.category.clone(), h.item.name.clone()))
            .collect();
        let mut flat: Vec<_> = engine
            .search_flat(&query)
            .into_iter()
            .map(|h| (h.item.category.clone(), h.item.name.clone()))
            .collect();
        grouped.sort();
        flat.sort();
        prop_assert_eq!(grouped, flat);
    }

    /// Property: reversing the backing arrays never changes results.
    #[test]
    fn prop_backing_order_irrelevant(categories in categories(), query in word()) {
        let reversed: Vec<Category> = categories
            .iter()
            .rev()
            .cloned()
            .map(|mut c| {
                c.items.reverse();
                c
            })
            .collect();
        let forward = SearchEngine::new(Catalog::new(categories).unwrap());
        let backward = SearchEngine::new(Catalog::new(reversed).unwrap());

        prop_assert_eq!(forward.search_flat(&query), backward.search_flat(&query));
        prop_assert_eq!(forward.search_grouped(&query), backward.search_grouped(&query));
    }

    /// Property: search_first is the head of search_flat, and None for blank queries.
    #[test]
    fn prop_first_consistent(categories in categories(), query in word(), blanks in "[ \t]{0,3}") {
        let engine = SearchEngine::new(Catalog::new(categories).unwrap());
        prop_assert_eq!(engine.search_first(&query), engine.search_flat(&query).first().copied());
        prop_assert!(engine.search_first(&blanks).is_none());
    }
}
