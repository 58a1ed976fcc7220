// ABOUTME: Reconciliation engine turning required ingredient lines and a pantry into a deficit
// ABOUTME: Aggregates, subtracts matching pantry stock, then closes gaps with substitutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pantry Reconciliation
//!
//! A run has four steps:
//!
//! 1. aggregate required lines by normalized ingredient name and unit
//! 2. subtract every matching pantry item from every line it matches
//! 3. cover what is still missing with the best substitute found among the pantry
//!    items that did not match the line itself
//! 4. drop lines with nothing left to buy
//!
//! A pantry item is applied in full to each line it matches; no running remainder
//! is kept across lines. Unit conversion failures skip the affected deduction.

/// Ordered grocery list and run statistics
pub mod grocery_list;

pub use grocery_list::{GroceryList, ReconciliationStats};

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use larder_core::constants::thresholds::DEFAULT_MATCH_THRESHOLD;
use larder_core::models::{AppliedSubstitution, GroceryLineItem, PantryItem, RequiredLine};
use larder_matching::IngredientMatcher;

use crate::substitutions::SubstitutionSource;
use crate::units::UnitRegistry;

/// Outcome of a reconciliation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reconciliation {
    /// Lines still to buy, in first-seen order
    pub grocery_list: GroceryList,
    /// Lines fully covered by a substitute, kept for reporting
    pub covered_by_substitution: Vec<GroceryLineItem>,
    /// Counters for the run
    pub stats: ReconciliationStats,
}

/// Computes shopping deficits from requirements and pantry stock
#[derive(Clone)]
pub struct ReconciliationEngine {
    matcher: Arc<dyn IngredientMatcher>,
    units: Arc<UnitRegistry>,
    substitutions: Arc<dyn SubstitutionSource>,
    threshold: f64,
}

impl ReconciliationEngine {
    /// Create an engine from its collaborators
    #[must_use]
    pub fn new(
        matcher: Arc<dyn IngredientMatcher>,
        units: Arc<UnitRegistry>,
        substitutions: Arc<dyn SubstitutionSource>,
    ) -> Self {
        Self {
            matcher,
            units,
            substitutions,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Confidence required for a pantry item to count as a grocery line's ingredient
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Compute the grocery list for `required` given `pantry`
    #[must_use]
    pub fn reconcile(&self, required: &[RequiredLine], pantry: &[PantryItem]) -> GroceryList {
        self.reconcile_with_stats(required, pantry).grocery_list
    }

    /// Compute the grocery list along with covered lines and run statistics
    #[must_use]
    pub fn reconcile_with_stats(
        &self,
        required: &[RequiredLine],
        pantry: &[PantryItem],
    ) -> Reconciliation {
        let mut stats = ReconciliationStats::default();

        let mut list = Self::aggregate(required, &mut stats);
        self.deduct_pantry(&mut list, pantry, &mut stats);
        self.apply_substitutions(&mut list, pantry, &mut stats);

        let settled = list.take_settled();
        stats.lines_dropped = settled.len();
        let covered_by_substitution: Vec<GroceryLineItem> = settled
            .into_iter()
            .filter(|line| line.substitution.is_some())
            .collect();

        info!(
            lines_aggregated = stats.lines_aggregated,
            pantry_deductions = stats.pantry_deductions,
            substitutions_applied = stats.substitutions_applied,
            conversions_skipped = stats.conversions_skipped,
            lines_dropped = stats.lines_dropped,
            remaining = list.len(),
            "Reconciled grocery list"
        );

        Reconciliation {
            grocery_list: list,
            covered_by_substitution,
            stats,
        }
    }

    fn aggregate(required: &[RequiredLine], stats: &mut ReconciliationStats) -> GroceryList {
        let mut list = GroceryList::new();
        for line in required {
            list.entry(line.ingredient_name(), line.unit()).quantity += line.quantity();
        }
        stats.lines_aggregated = required.len();
        list
    }

    fn deduct_pantry(
        &self,
        list: &mut GroceryList,
        pantry: &[PantryItem],
        stats: &mut ReconciliationStats,
    ) {
        for item in pantry {
            for line in list.iter_mut() {
                if !self.matcher.matches(&line.name, item.name(), self.threshold) {
                    continue;
                }
                if let Some(owned) = self.quantity_in(item, &line.unit, stats) {
                    line.deduct(owned);
                    stats.pantry_deductions += 1;
                }
            }
        }
    }

    fn apply_substitutions(
        &self,
        list: &mut GroceryList,
        pantry: &[PantryItem],
        stats: &mut ReconciliationStats,
    ) {
        for line in list.iter_mut().filter(|line| line.is_outstanding()) {
            // Stock already deducted as the ingredient itself cannot also stand in for it
            let others: Vec<PantryItem> = pantry
                .iter()
                .filter(|item| !self.matcher.matches(&line.name, item.name(), self.threshold))
                .cloned()
                .collect();
            let Some(entry) = self.substitutions.best_available(&line.name, &others) else {
                continue;
            };
            let Some(item) = others.iter().find(|item| {
                self.matcher
                    .matches(item.name(), entry.substitute_name(), self.threshold)
            }) else {
                continue;
            };
            let Some(available) = self.quantity_in(item, &line.unit, stats) else {
                continue;
            };

            let substituted = line.quantity.min(available / entry.ratio());
            if substituted > 0.0 {
                line.deduct(substituted);
                line.substitution = Some(AppliedSubstitution::from_entry(
                    &entry,
                    item.name(),
                    substituted,
                ));
                stats.substitutions_applied += 1;
                debug!(
                    ingredient = %line.name,
                    substitute = item.name(),
                    substituted,
                    "Applied pantry substitute"
                );
            }
        }
    }

    /// Pantry quantity expressed in `unit`, or `None` if it cannot be converted
    fn quantity_in(
        &self,
        item: &PantryItem,
        unit: &str,
        stats: &mut ReconciliationStats,
    ) -> Option<f64> {
        if item.unit() == unit {
            return Some(item.quantity());
        }
        match self.units.convert(item.quantity(), item.unit(), unit) {
            Ok(converted) => Some(converted),
            Err(error) => {
                stats.conversions_skipped += 1;
                debug!(
                    pantry_item = item.name(),
                    from = item.unit(),
                    to = unit,
                    error = %error,
                    "Skipping pantry deduction, units not convertible"
                );
                None
            }
        }
    }
}
