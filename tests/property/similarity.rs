//! Similarity properties: bounds, identity, symmetry.

use proptest::prelude::*;
use toolsift::{levenshtein, levenshtein_within, similarity};

/// Short strings over a small alphabet, so pairs actually share characters.
fn small_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcé ]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: similarity always lies in [0, 1].
    #[test]
    fn prop_similarity_bounded(a in any::<String>(), b in any::<String>()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "similarity({a:?}, {b:?}) = {s}");
    }

    /// Property: a string is a perfect match for itself, including "".
    #[test]
    fn prop_similarity_identity(a in any::<String>()) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    /// Property: similarity(a, b) == similarity(b, a).
    #[test]
    fn prop_similarity_symmetric(a in small_string(), b in small_string()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    /// Property: length difference is a lower bound on edit distance.
    #[test]
    fn prop_length_difference_lower_bound(a in small_string(), b in small_string()) {
        let diff = a.chars().count().abs_diff(b.chars().count());
        prop_assert!(levenshtein(&a, &b) >= diff);
    }

    /// Property: the bounded check agrees with the full distance.
    #[test]
    fn prop_within_matches_distance(a in small_string(), b in small_string(), max in 0usize..6) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), levenshtein(&a, &b) <= max);
    }

    /// Property: triangle inequality.
    #[test]
    fn prop_triangle_inequality(a in small_string(), b in small_string(), c in small_string()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }
}

#[test]
fn test_empty_strings_are_identical() {
    assert_eq!(similarity("", ""), 1.0);
}
