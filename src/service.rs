// ABOUTME: LarderService facade owning the canonical index, matcher, units, and substitutions
// ABOUTME: Assembles collaborators from configuration and exposes the public operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Long-lived service object
//!
//! Build one [`LarderService`] at startup and share it behind an `Arc`. Every
//! collaborator is `Send + Sync`; the only runtime mutation is
//! [`LarderService::add_synonym`].

use std::sync::Arc;
use tracing::info;

use larder_core::errors::{AppResult, UnitError};
use larder_core::models::{PantryItem, RequiredLine, SubstitutionEntry};
use larder_matching::{CanonicalIndex, ConfidenceMatcher, ExactMatcher, IngredientMatcher};

use crate::config::{LarderConfig, TableOverlay};
use crate::reconciliation::{GroceryList, Reconciliation, ReconciliationEngine};
use crate::substitutions::{NoSubstitutions, SubstitutionCatalog, SubstitutionSource};
use crate::units::UnitRegistry;

/// Facade over matching, unit conversion, substitution, and reconciliation
#[derive(Clone)]
pub struct LarderService {
    config: LarderConfig,
    index: Arc<CanonicalIndex>,
    matcher: Arc<dyn IngredientMatcher>,
    units: Arc<UnitRegistry>,
    substitutions: Arc<dyn SubstitutionSource>,
    engine: ReconciliationEngine,
}

impl LarderService {
    /// Build from environment configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigMissing` if the configured overlay does not exist,
    /// or `ErrorCode::ConfigInvalid` if it is unreadable or invalid.
    pub fn from_env() -> AppResult<Self> {
        Self::from_config(LarderConfig::from_env())
    }

    /// Build from `config`, loading its overlay file if one is set
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigMissing` for an absent overlay file, or
    /// `ErrorCode::ConfigInvalid` if it is unreadable or invalid.
    pub fn from_config(config: LarderConfig) -> AppResult<Self> {
        let overlay = config.load_overlay()?.unwrap_or_default();
        Self::with_overlay(config, overlay)
    }

    /// Build from `config` with an already parsed overlay
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if an overlay unit is invalid or collides
    /// with a registered unit.
    pub fn with_overlay(config: LarderConfig, overlay: TableOverlay) -> AppResult<Self> {
        let mut units = UnitRegistry::builtin();
        units.extend(overlay.unit_definitions()?)?;
        let units = Arc::new(units);

        let index = Arc::new(CanonicalIndex::new());
        for entry in &overlay.synonyms {
            index.add_synonym(&entry.canonical, entry.synonyms.iter().map(String::as_str));
        }

        let matcher: Arc<dyn IngredientMatcher> = if config.synonyms_enabled {
            Arc::new(ConfidenceMatcher::new(Arc::clone(&index)))
        } else {
            Arc::new(ExactMatcher)
        };

        let substitutions: Arc<dyn SubstitutionSource> = if config.substitutions_enabled {
            let mut catalog = SubstitutionCatalog::builtin(Arc::clone(&matcher))
                .with_threshold(config.match_threshold);
            for entry in overlay.substitutions {
                catalog.add_substitution(entry);
            }
            Arc::new(catalog)
        } else {
            Arc::new(NoSubstitutions)
        };

        let engine = ReconciliationEngine::new(
            Arc::clone(&matcher),
            Arc::clone(&units),
            Arc::clone(&substitutions),
        )
        .with_threshold(config.match_threshold);

        info!(
            threshold = config.match_threshold,
            synonyms = config.synonyms_enabled,
            substitutions = config.substitutions_enabled,
            overlay = config.tables_path.as_ref().map(|path| path.display().to_string()),
            "Larder service ready"
        );

        Ok(Self {
            config,
            index,
            matcher,
            units,
            substitutions,
            engine,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &LarderConfig {
        &self.config
    }

    /// Shared canonical index
    #[must_use]
    pub const fn index(&self) -> &Arc<CanonicalIndex> {
        &self.index
    }

    /// Shared unit registry
    #[must_use]
    pub const fn units(&self) -> &Arc<UnitRegistry> {
        &self.units
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Register synonyms for `canonical`; later lookups see them
    pub fn add_synonym<I, S>(&self, canonical: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index.add_synonym(canonical, synonyms);
    }

    /// Canonical name of `name`
    #[must_use]
    pub fn canonical_of(&self, name: &str) -> String {
        self.matcher.canonical_of(name)
    }

    /// Confidence in `[0, 1]` that `a` and `b` name the same ingredient
    #[must_use]
    pub fn confidence(&self, a: &str, b: &str) -> f64 {
        self.matcher.confidence(a, b)
    }

    /// Whether `a` and `b` match at the configured threshold
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.matches_at(a, b, self.config.match_threshold)
    }

    /// Whether `a` and `b` match at `threshold`
    #[must_use]
    pub fn matches_at(&self, a: &str, b: &str, threshold: f64) -> bool {
        self.matcher.matches(a, b, threshold)
    }

    // ========================================================================
    // Units
    // ========================================================================

    /// Convert `quantity` from one unit to another
    ///
    /// # Errors
    ///
    /// Returns a [`UnitError`] for unknown units, incompatible categories, or a
    /// non-finite quantity.
    pub fn convert(&self, quantity: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        self.units.convert(quantity, from, to)
    }

    // ========================================================================
    // Substitutions and reconciliation
    // ========================================================================

    /// Substitutes for `ingredient`, best tier first
    #[must_use]
    pub fn substitutes(&self, ingredient: &str) -> Vec<SubstitutionEntry> {
        self.substitutions.lookup(ingredient)
    }

    /// Whether substitutes are registered directly under `ingredient`
    #[must_use]
    pub fn has_substitutions(&self, ingredient: &str) -> bool {
        self.substitutions.has_substitutions(ingredient)
    }

    /// Best substitute for `ingredient` present in `pantry`
    #[must_use]
    pub fn best_available_substitute(
        &self,
        ingredient: &str,
        pantry: &[PantryItem],
    ) -> Option<SubstitutionEntry> {
        self.substitutions.best_available(ingredient, pantry)
    }

    /// Grocery list still needed after pantry stock and substitutes
    #[must_use]
    pub fn reconcile(&self, required: &[RequiredLine], pantry: &[PantryItem]) -> GroceryList {
        self.engine.reconcile(required, pantry)
    }

    /// Grocery list with covered lines and run statistics
    #[must_use]
    pub fn reconcile_with_stats(
        &self,
        required: &[RequiredLine],
        pantry: &[PantryItem],
    ) -> Reconciliation {
        self.engine.reconcile_with_stats(required, pantry)
    }
}
