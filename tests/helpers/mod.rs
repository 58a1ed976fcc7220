// ABOUTME: Shared fixtures for Larder integration tests
// ABOUTME: Builds services and record values without repeating validation boilerplate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use larder::config::LarderConfig;
use larder::models::{PantryItem, RequiredLine};
use larder::service::LarderService;

/// Service over the built-in tables with default settings
pub fn default_service() -> LarderService {
    LarderService::from_config(LarderConfig::default()).expect("built-in tables are valid")
}

/// Service with the given collaborator switches
pub fn service_with(synonyms_enabled: bool, substitutions_enabled: bool) -> LarderService {
    LarderService::from_config(LarderConfig {
        synonyms_enabled,
        substitutions_enabled,
        ..LarderConfig::default()
    })
    .expect("built-in tables are valid")
}

pub fn required(name: &str, quantity: f64, unit: &str) -> RequiredLine {
    RequiredLine::new(name, quantity, unit).expect("valid required line")
}

pub fn pantry(name: &str, quantity: f64, unit: &str) -> PantryItem {
    PantryItem::new(name, quantity, unit).expect("valid pantry item")
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}
