// ABOUTME: Criterion benchmarks for ingredient matching and pantry reconciliation
// ABOUTME: Measures confidence scoring per tier and grocery list computation by pantry size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the matching hot paths.
//!
//! Confidence scoring runs once per (pantry item, grocery line) pair during
//! reconciliation, so both are measured here.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use larder::config::LarderConfig;
use larder::matching::{ConfidenceMatcher, IngredientMatcher};
use larder::models::{PantryItem, RequiredLine};
use larder::service::LarderService;

/// Name pairs resolved by different tiers of the cascade
const PAIRS: [(&str, &str, &str); 6] = [
    ("exact", "olive oil", "Olive Oil"),
    ("canonical", "evoo", "olive oil"),
    ("descriptor", "fresh spinach", "chopped spinach"),
    ("single_word", "parsely", "parsley"),
    ("multi_word", "chicken breast", "chicken"),
    ("no_match", "chicken", "chocolate"),
];

const INGREDIENTS: [&str; 12] = [
    "flour", "sugar", "butter", "egg", "milk", "onion", "garlic", "rice", "chicken breast",
    "olive oil", "tomato", "basil",
];

fn bench_confidence(c: &mut Criterion) {
    let matcher = ConfidenceMatcher::with_builtin_synonyms();
    // Build the index outside the measured loop
    let _ = matcher.canonical_of("flour");

    let mut group = c.benchmark_group("confidence");
    for (tier, a, b) in PAIRS {
        group.bench_with_input(BenchmarkId::new("tier", tier), &(a, b), |bench, &(a, b)| {
            bench.iter(|| matcher.confidence(black_box(a), black_box(b)));
        });
    }
    group.finish();
}

fn required_lines() -> Vec<RequiredLine> {
    INGREDIENTS
        .iter()
        .map(|name| RequiredLine::new(*name, 2.0, "cup").unwrap())
        .collect()
}

fn pantry_of(size: usize) -> Vec<PantryItem> {
    INGREDIENTS
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(i, name)| {
            let unit = if i % 2 == 0 { "cup" } else { "tbsp" };
            PantryItem::new(format!("fresh {name}"), 1.0, unit).unwrap()
        })
        .collect()
}

fn bench_reconcile(c: &mut Criterion) {
    let service = LarderService::from_config(LarderConfig::default()).unwrap();
    let required = required_lines();

    let mut group = c.benchmark_group("reconcile");
    for size in [4_usize, 12, 48] {
        let pantry = pantry_of(size);
        group.throughput(Throughput::Elements((size * required.len()) as u64));
        group.bench_with_input(BenchmarkId::new("pantry", size), &pantry, |bench, pantry| {
            bench.iter(|| service.reconcile(black_box(&required), black_box(pantry)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_confidence, bench_reconcile);
criterion_main!(benches);
