// ABOUTME: Integration tests for the LarderService facade
// ABOUTME: Covers matching entry points, runtime synonyms, and sharing across threads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;
use std::thread;

use helpers::{default_service, pantry, required, service_with};
use larder::errors::{AppError, ErrorCode};

#[test]
fn test_match_scenarios() {
    let service = default_service();
    assert!(service.matches("chicken breast", "chicken"));
    assert!(!service.matches("chicken", "chocolate"));
    assert!(service.matches_at("egg", "eggs", 0.7));
    assert!(!service.matches_at("egg", "eggs", 0.8));
}

#[test]
fn test_confidence_is_symmetric_through_service() {
    let service = default_service();
    let pairs = [
        ("fresh basil", "basil leaves"),
        ("tamari", "soy sauce"),
        ("parmesan", "parmigiano reggiano"),
        ("ground beef", "beef mince"),
    ];
    for (a, b) in pairs {
        let forward = service.confidence(a, b);
        let backward = service.confidence(b, a);
        assert!((forward - backward).abs() < 1e-12, "{a} / {b}");
        assert!((0.0..=1.0).contains(&forward));
    }
}

#[test]
fn test_runtime_synonym_changes_reconciliation() {
    let service = default_service();
    let needed = [required("cilantro", 1.0, "bunch")];
    let stock = [pantry("dhania", 1.0, "bunch")];

    let before = service.reconcile(&needed, &stock);
    assert_eq!(before.len(), 1);

    service.add_synonym("cilantro", ["dhania"]);
    assert_eq!(service.canonical_of("Dhania"), "cilantro");
    assert!(service.reconcile(&needed, &stock).is_empty());
}

#[test]
fn test_exact_service_ignores_synonyms() {
    let service = service_with(false, true);
    assert!(!service.matches("tamari", "soy sauce"));
    assert_eq!(service.canonical_of("tamari"), "tamari");
    assert!((service.confidence("Flour", "flour") - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_substitute_queries() {
    let service = default_service();
    assert!(service.has_substitutions("butter"));
    assert!(!service.has_substitutions("unobtainium"));

    let best = service
        .best_available_substitute("butter", &[pantry("olive oil", 1.0, "cup")])
        .unwrap();
    assert_eq!(best.substitute_name(), "olive oil");

    let disabled = service_with(true, false);
    assert!(disabled.substitutes("butter").is_empty());
    assert!(!disabled.has_substitutions("butter"));
}

#[test]
fn test_conversion_errors_map_to_app_errors() {
    let service = default_service();
    let error: AppError = service.convert(1.0, "cup", "pound").unwrap_err().into();
    assert_eq!(error.code, ErrorCode::IncompatibleCategory);
    assert!(error.code.is_recoverable());

    let error: AppError = service.convert(1.0, "cup", "bushel").unwrap_err().into();
    assert_eq!(error.code, ErrorCode::UnknownUnit);
}

#[test]
fn test_service_shared_across_threads() {
    let service = Arc::new(default_service());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                if worker == 0 {
                    service.add_synonym("cilantro", ["dhania"]);
                }
                let list = service.reconcile(
                    &[required("flour", 2.0, "cup"), required("rice", 1.0, "cup")],
                    &[pantry("all-purpose flour", 1.0, "cup")],
                );
                list.get("flour", "cup").map(|line| line.quantity)
            })
        })
        .collect();

    for handle in handles {
        let remaining = handle.join().unwrap().unwrap();
        assert!((remaining - 1.0).abs() < 1e-9);
    }
}
