// ABOUTME: Substitution catalog ranking alternative ingredients by quality tier
// ABOUTME: Checks pantry availability through the injected ingredient matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Substitution Catalog
//!
//! Maps an ingredient to alternatives that can stand in for it. Each entry carries
//! a ratio (substitute units per unit of the original), a [`Quality`] tier and
//! usage notes. Lookups merge the entries registered directly under the name with
//! those registered under its canonical name, drop repeated substitutes and order
//! the result best tier first.

/// Built-in substitution table
mod table;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use larder_core::constants::thresholds::DEFAULT_MATCH_THRESHOLD;
use larder_core::models::{normalize_token, PantryItem, SubstitutionEntry};
use larder_matching::IngredientMatcher;
use tracing::warn;

/// Source of substitutes consulted by reconciliation
pub trait SubstitutionSource: Send + Sync {
    /// Substitutes for `ingredient`, best tier first, no repeated substitute names
    fn lookup(&self, ingredient: &str) -> Vec<SubstitutionEntry>;

    /// Highest-ranked substitute for `ingredient` that some pantry item provides
    fn best_available(&self, ingredient: &str, pantry: &[PantryItem]) -> Option<SubstitutionEntry>;

    /// Whether entries are registered directly under `ingredient`
    fn has_substitutions(&self, ingredient: &str) -> bool;
}

/// Source that never offers a substitute
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSubstitutions;

impl SubstitutionSource for NoSubstitutions {
    fn lookup(&self, _ingredient: &str) -> Vec<SubstitutionEntry> {
        Vec::new()
    }

    fn best_available(
        &self,
        _ingredient: &str,
        _pantry: &[PantryItem],
    ) -> Option<SubstitutionEntry> {
        None
    }

    fn has_substitutions(&self, _ingredient: &str) -> bool {
        false
    }
}

/// Table-backed substitution catalog
#[derive(Clone)]
pub struct SubstitutionCatalog {
    /// Normalized ingredient name -> entries in insertion order
    entries: HashMap<String, Vec<SubstitutionEntry>>,
    matcher: Arc<dyn IngredientMatcher>,
    threshold: f64,
}

impl SubstitutionCatalog {
    /// Empty catalog using `matcher` for canonical names and pantry availability
    #[must_use]
    pub fn new(matcher: Arc<dyn IngredientMatcher>) -> Self {
        Self {
            entries: HashMap::new(),
            matcher,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Catalog preloaded with the built-in table
    #[must_use]
    pub fn builtin(matcher: Arc<dyn IngredientMatcher>) -> Self {
        let mut catalog = Self::new(matcher);
        for (ingredient, rows) in table::SUBSTITUTION_TABLE {
            for &(substitute, ratio, tier, notes) in *rows {
                match SubstitutionEntry::new(*ingredient, substitute, ratio, tier, notes) {
                    Ok(entry) => catalog.add_substitution(entry),
                    Err(error) => {
                        warn!(ingredient, substitute, error = %error, "Skipping built-in substitution");
                    }
                }
            }
        }
        catalog
    }

    /// Confidence required for a pantry item to provide a substitute
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Register an entry under its ingredient name
    pub fn add_substitution(&mut self, entry: SubstitutionEntry) {
        self.entries
            .entry(normalize_token(entry.ingredient()))
            .or_default()
            .push(entry);
    }

    /// Whether some pantry item matches `substitute`
    #[must_use]
    pub fn is_available(&self, substitute: &str, pantry: &[PantryItem]) -> bool {
        pantry
            .iter()
            .any(|item| self.matcher.matches(item.name(), substitute, self.threshold))
    }

    /// Number of ingredients with registered entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn direct(&self, normalized: &str) -> &[SubstitutionEntry] {
        self.entries.get(normalized).map(Vec::as_slice).unwrap_or_default()
    }
}

impl SubstitutionSource for SubstitutionCatalog {
    fn lookup(&self, ingredient: &str) -> Vec<SubstitutionEntry> {
        let normalized = normalize_token(ingredient);
        let canonical = normalize_token(&self.matcher.canonical_of(ingredient));

        let via_canonical = if canonical == normalized {
            &[][..]
        } else {
            self.direct(&canonical)
        };

        let mut seen = HashSet::new();
        let mut found: Vec<SubstitutionEntry> = self
            .direct(&normalized)
            .iter()
            .chain(via_canonical)
            .filter(|entry| seen.insert(normalize_token(entry.substitute_name())))
            .cloned()
            .collect();

        // Stable: equal tiers keep insertion order
        found.sort_by(|a, b| b.tier().cmp(&a.tier()));
        found
    }

    fn best_available(
        &self,
        ingredient: &str,
        pantry: &[PantryItem],
    ) -> Option<SubstitutionEntry> {
        if pantry.is_empty() {
            return None;
        }
        self.lookup(ingredient)
            .into_iter()
            .find(|entry| self.is_available(entry.substitute_name(), pantry))
    }

    fn has_substitutions(&self, ingredient: &str) -> bool {
        !self.direct(&normalize_token(ingredient)).is_empty()
    }
}
