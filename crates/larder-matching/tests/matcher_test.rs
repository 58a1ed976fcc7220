// ABOUTME: Integration tests for the ingredient confidence matcher and canonical index
// ABOUTME: Covers symmetry, reflexivity, canonical idempotence, and known name pairs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::thread;

use larder_matching::{CanonicalIndex, ConfidenceMatcher, IngredientMatcher, SynonymEntry};

const NAMES: &[&str] = &[
    "chicken",
    "chicken breast",
    "boneless chicken breast",
    "chocolate",
    "chocolate chips",
    "egg",
    "eggs",
    "large eggs",
    "fresh basil",
    "basil leaves",
    "extra virgin olive oil",
    "olive oil",
    "red onion",
    "green onions",
    "ham",
    "graham crackers",
    "parsely",
    "parsley",
    "tomatoes",
    "cherry tomatoes",
    "fresh",
    "salt",
    "sea salt",
    "Soy Sauce",
    "tamari",
    "all-purpose flour",
    "flour",
    "x",
];

fn matcher() -> ConfidenceMatcher {
    ConfidenceMatcher::with_builtin_synonyms()
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_confidence_is_symmetric() {
    let matcher = matcher();
    for a in NAMES {
        for b in NAMES {
            let forward = matcher.confidence(a, b);
            let backward = matcher.confidence(b, a);
            assert!(
                (forward - backward).abs() < 1e-12,
                "confidence({a:?}, {b:?}) = {forward} but reversed = {backward}"
            );
        }
    }
}

#[test]
fn test_confidence_is_reflexive_and_bounded() {
    let matcher = matcher();
    for a in NAMES {
        assert!((matcher.confidence(a, a) - 1.0).abs() < f64::EPSILON);
        for b in NAMES {
            let score = matcher.confidence(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} scored {score}");
        }
    }
}

#[test]
fn test_canonical_of_is_idempotent() {
    let index = CanonicalIndex::new();
    for name in NAMES.iter().copied().chain(["poultry", "Evoo", "hamburger meat"]) {
        let once = index.canonical_of(name);
        assert_eq!(index.canonical_of(&once), once, "for {name:?}");
    }
}

#[test]
fn test_empty_names_never_match() {
    let matcher = matcher();
    assert!(matcher.confidence("", "flour").abs() < f64::EPSILON);
    assert!(matcher.confidence("   ", "   ").abs() < f64::EPSILON);
}

// ============================================================================
// Known Pairs
// ============================================================================

#[test]
fn test_chicken_breast_matches_chicken() {
    let matcher = matcher();
    assert!(matcher.matches("chicken breast", "chicken", 0.7));
    assert!((matcher.confidence("chicken breast", "chicken") - 0.9).abs() < 1e-9);
}

#[test]
fn test_chicken_does_not_match_chocolate() {
    let matcher = matcher();
    assert!(!matcher.matches("chicken", "chocolate", 0.7));
}

#[test]
fn test_singular_and_plural_match() {
    let matcher = matcher();
    assert!(matcher.matches("egg", "eggs", 0.7));
    assert!((matcher.confidence("egg", "eggs") - 0.75).abs() < 1e-9);
}

#[test]
fn test_synonyms_score_full_confidence() {
    let matcher = matcher();
    assert!((matcher.confidence("soy sauce", "Tamari") - 1.0).abs() < f64::EPSILON);
    assert!((matcher.confidence("evoo", "olive oil") - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_descriptors_are_ignored() {
    let matcher = matcher();
    assert!((matcher.confidence("fresh spinach", "chopped spinach") - 0.9).abs() < 1e-9);
}

#[test]
fn test_substring_inside_word_is_rejected() {
    let matcher = matcher();
    assert!(!matcher.matches("ham", "graham crackers", 0.7));
}

#[test]
fn test_typo_matches_through_similarity() {
    let matcher = matcher();
    assert!(matcher.matches("parsely", "parsley", 0.7));
}

// ============================================================================
// Cascade Tiers
// ============================================================================

fn matcher_over(entries: Vec<SynonymEntry>) -> ConfidenceMatcher {
    ConfidenceMatcher::new(Arc::new(CanonicalIndex::from_entries(entries)))
}

fn assert_score(matcher: &ConfidenceMatcher, a: &str, b: &str, expected: f64) {
    let score = matcher.confidence(a, b);
    assert!(
        (score - expected).abs() < 1e-9,
        "confidence({a:?}, {b:?}) = {score}, expected {expected}"
    );
}

#[test]
fn test_stripped_canonical_tier() {
    let matcher = matcher_over(vec![SynonymEntry::new(
        "ground beef",
        vec!["hamburger meat".to_owned()],
    )]);
    // "hamburger meat" -> "ground beef" -> "beef"; "dried beef" -> "beef"
    assert_score(&matcher, "hamburger meat", "dried beef", 0.85);
    assert_score(&matcher, "dried beef", "hamburger meat", 0.85);
}

#[test]
fn test_partial_multi_word_match() {
    let matcher = matcher_over(Vec::new());
    assert_score(&matcher, "chicken stock", "chicken thigh", 0.5 * 0.9);
}

#[test]
fn test_global_similarity_tier() {
    let matcher = matcher_over(Vec::new());
    // levenshtein("lemon", "melon") = 2 over 5 chars
    assert_score(&matcher, "lemon", "melon", 0.6 * 0.8);
    assert!(!matcher.matches("lemon", "melon", 0.7));
}

#[test]
fn test_global_similarity_uses_raw_name_when_all_descriptors() {
    let matcher = matcher_over(Vec::new());
    // both names strip to nothing, so "fresh" and "frozen" are compared as written
    assert_score(&matcher, "fresh", "frozen", (1.0 - 4.0 / 6.0) * 0.8);
}

#[test]
fn test_canonical_similarity_fallback() {
    let matcher = matcher_over(vec![SynonymEntry::new("kumara", vec!["yam".to_owned()])]);
    // "yam" is too short for whole-string similarity; canonical forms are compared instead
    assert_score(&matcher, "yam", "kumera", (1.0 - 1.0 / 6.0) * 0.75);
    assert_score(&matcher, "kumera", "yam", (1.0 - 1.0 / 6.0) * 0.75);
}

// ============================================================================
// Canonical Index
// ============================================================================

#[test]
fn test_synonyms_of_starts_with_canonical() {
    let index = CanonicalIndex::new();
    let synonyms = index.synonyms_of("garbanzo beans");
    assert_eq!(synonyms.first().map(String::as_str), Some("garbanzo beans"));
    assert!(synonyms.iter().any(|s| s == "chickpeas"));
}

#[test]
fn test_canonicals_are_sorted() {
    let index = CanonicalIndex::from_entries([
        SynonymEntry::new("zucchini", vec!["courgette".into()]),
        SynonymEntry::new("apple", vec![]),
    ]);
    assert_eq!(index.canonicals(), vec!["apple".to_owned(), "zucchini".to_owned()]);
}

#[test]
fn test_invalidate_keeps_results_stable() {
    let index = CanonicalIndex::new();
    let before = index.canonical_of("scallion");
    index.invalidate();
    assert_eq!(index.canonical_of("scallion"), before);
}

#[test]
fn test_concurrent_queries_and_additions() {
    let index = Arc::new(CanonicalIndex::new());
    let matcher = ConfidenceMatcher::new(Arc::clone(&index));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let index = Arc::clone(&index);
            let matcher = matcher.clone();
            thread::spawn(move || {
                for round in 0..50 {
                    if worker == 0 && round % 10 == 0 {
                        index.add_synonym("eggplant", [format!("aubergine {round}")]);
                    }
                    assert!(matcher.matches("chicken breast", "chicken", 0.7));
                    assert_eq!(index.canonical_of("prawns"), "prawns");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(index.canonical_of("aubergine 40"), "eggplant");
}
