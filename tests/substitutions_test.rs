// ABOUTME: Integration tests for the substitution catalog
// ABOUTME: Covers tier ordering, canonical merging, deduplication, and pantry availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use helpers::pantry;
use larder::matching::{CanonicalIndex, ConfidenceMatcher, ExactMatcher, SynonymEntry};
use larder::models::{Quality, SubstitutionEntry};
use larder::substitutions::{NoSubstitutions, SubstitutionCatalog, SubstitutionSource};

fn builtin_catalog() -> SubstitutionCatalog {
    SubstitutionCatalog::builtin(Arc::new(ConfidenceMatcher::with_builtin_synonyms()))
}

fn names(entries: &[SubstitutionEntry]) -> Vec<&str> {
    entries.iter().map(SubstitutionEntry::substitute_name).collect()
}

#[test]
fn test_builtin_butter_substitutes_ranked_by_tier() {
    let catalog = builtin_catalog();
    let entries = catalog.lookup("butter");

    assert_eq!(entries[0].substitute_name(), "margarine");
    assert_eq!(entries[0].tier(), Quality::Excellent);
    assert!((entries[0].ratio() - 1.0).abs() < f64::EPSILON);
    assert!(entries
        .windows(2)
        .all(|pair| pair[0].tier() >= pair[1].tier()));
    assert_eq!(entries.last().unwrap().tier(), Quality::Fair);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = builtin_catalog();
    assert_eq!(
        names(&catalog.lookup("  BUTTER ")),
        names(&catalog.lookup("butter"))
    );
}

#[test]
fn test_lookup_merges_canonical_entries() {
    let index = Arc::new(CanonicalIndex::from_entries([SynonymEntry::new(
        "buttermilk",
        vec!["cultured buttermilk".to_owned()],
    )]));
    let mut catalog = SubstitutionCatalog::new(Arc::new(ConfidenceMatcher::new(index)));
    catalog.add_substitution(
        SubstitutionEntry::new("buttermilk", "kefir", 1.0, Quality::Good, "").unwrap(),
    );
    catalog.add_substitution(
        SubstitutionEntry::new("cultured buttermilk", "yogurt", 1.0, Quality::Fair, "").unwrap(),
    );
    catalog.add_substitution(
        SubstitutionEntry::new("cultured buttermilk", "Kefir", 1.0, Quality::Fair, "").unwrap(),
    );

    let entries = catalog.lookup("cultured buttermilk");
    // Direct entries first, then canonical ones; the repeated kefir keeps its direct tier
    assert_eq!(names(&entries), ["yogurt", "Kefir"]);
    assert!(entries.iter().all(|entry| entry.tier() == Quality::Fair));

    assert!(catalog.has_substitutions("cultured buttermilk"));
    assert!(catalog.has_substitutions("buttermilk"));
    assert!(!catalog.has_substitutions("sour milk"));
}

#[test]
fn test_lookup_via_canonical_only() {
    let index = Arc::new(CanonicalIndex::from_entries([SynonymEntry::new(
        "scallion",
        vec!["green onion".to_owned()],
    )]));
    let mut catalog = SubstitutionCatalog::new(Arc::new(ConfidenceMatcher::new(index)));
    catalog.add_substitution(
        SubstitutionEntry::new("scallion", "chives", 1.0, Quality::Good, "").unwrap(),
    );

    assert_eq!(names(&catalog.lookup("green onion")), ["chives"]);
    // Direct registration only
    assert!(!catalog.has_substitutions("green onion"));
}

#[test]
fn test_best_available_picks_highest_tier_in_pantry() {
    let catalog = builtin_catalog();
    let stock = [pantry("applesauce", 1.0, "cup"), pantry("vegetable oil", 2.0, "cup")];

    let best = catalog.best_available("butter", &stock).unwrap();
    assert_eq!(best.substitute_name(), "vegetable oil");
    assert_eq!(best.tier(), Quality::Good);
}

#[test]
fn test_best_available_requires_pantry() {
    let catalog = builtin_catalog();
    assert!(catalog.best_available("butter", &[]).is_none());
    assert!(catalog
        .best_available("butter", &[pantry("rice", 1.0, "cup")])
        .is_none());
    assert!(catalog
        .best_available("unobtainium", &[pantry("margarine", 1.0, "cup")])
        .is_none());
}

#[test]
fn test_availability_uses_matcher() {
    let fuzzy = builtin_catalog();
    let exact = SubstitutionCatalog::builtin(Arc::new(ExactMatcher));
    let stock = [pantry("Margarine Spread", 1.0, "cup")];

    assert!(fuzzy.is_available("margarine", &stock));
    assert!(!exact.is_available("margarine", &stock));
}

#[test]
fn test_null_source_offers_nothing() {
    let source = NoSubstitutions;
    assert!(source.lookup("butter").is_empty());
    assert!(source
        .best_available("butter", &[pantry("margarine", 1.0, "cup")])
        .is_none());
    assert!(!source.has_substitutions("butter"));
}

#[test]
fn test_builtin_table_size() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.len(), 41);
    assert!(!catalog.is_empty());
}
