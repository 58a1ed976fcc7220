// ABOUTME: Domain models shared by matching, conversion, and reconciliation
// ABOUTME: Pantry inventory, requirement lines, grocery output, and substitution records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pantry inventory, requirement lines, and grocery list output
pub mod pantry;
/// Substitution records and quality tiers
pub mod substitution;

pub use pantry::{AppliedSubstitution, GroceryLineItem, PantryItem, RequiredLine};
pub use substitution::{Quality, SubstitutionEntry};

/// Normalize a free-text name or unit token for comparison (lowercase, trimmed)
#[must_use]
pub fn normalize_token(value: &str) -> String {
    value.trim().to_lowercase()
}
