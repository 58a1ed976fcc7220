// ABOUTME: Unit registry resolving free-text unit tokens and converting quantities
// ABOUTME: Linear scaling through base units, affine temperature, and isolated count units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit Registry
//!
//! Every unit belongs to one [`UnitCategory`] and carries a [`Scale`] describing
//! how it converts:
//!
//! - volume, weight and length scale linearly through a base unit
//!   (milliliter, gram, millimeter)
//! - temperature converts affinely through Celsius
//! - count units (piece, clove, can...) only convert to themselves
//!
//! Tokens are matched case-insensitively after trimming.

/// Built-in unit definitions
mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use larder_core::constants::units::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, KELVIN_OFFSET,
};
use larder_core::errors::{AppError, AppResult, UnitError};
use larder_core::models::normalize_token;

// ============================================================================
// Definitions
// ============================================================================

/// Measurement category; conversions never cross categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Base unit: milliliter
    Volume,
    /// Base unit: gram
    Weight,
    /// Base unit: millimeter
    Length,
    /// Converted through Celsius
    Temperature,
    /// Discrete items, not convertible between kinds
    Count,
}

impl UnitCategory {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Weight => "weight",
            Self::Length => "length",
            Self::Temperature => "temperature",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature scales supported by the affine conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TemperatureScale {
    /// Convert a reading on this scale to Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS,
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Convert a Celsius reading to this scale
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius.mul_add(FAHRENHEIT_PER_CELSIUS, FAHRENHEIT_OFFSET),
            Self::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

/// Conversion rule of a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Multiply by `to_base` to reach the category's base unit
    Linear {
        /// Base units per one of this unit
        to_base: f64,
    },
    /// Affine temperature scale
    Temperature(TemperatureScale),
    /// Not convertible
    Count,
}

/// A registered unit
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    /// Canonical key, lowercase (e.g. `tbsp`)
    pub key: String,
    /// Human-readable name (e.g. `tablespoon`)
    pub name: String,
    /// Category the unit belongs to
    pub category: UnitCategory,
    /// Conversion rule
    pub scale: Scale,
    /// Alternative tokens, lowercase
    pub aliases: Vec<String>,
}

impl UnitDefinition {
    /// Define a linearly scaled unit
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the category is temperature or count,
    /// or if `to_base` is not a finite positive number.
    pub fn linear(
        key: &str,
        name: &str,
        category: UnitCategory,
        to_base: f64,
        aliases: &[&str],
    ) -> AppResult<Self> {
        if matches!(category, UnitCategory::Temperature | UnitCategory::Count) {
            return Err(AppError::config_invalid(format!(
                "unit '{key}': {category} units cannot have a linear scale"
            )));
        }
        if !(to_base.is_finite() && to_base > 0.0) {
            return Err(AppError::config_invalid(format!(
                "unit '{key}': base factor must be finite and positive, got {to_base}"
            )));
        }
        Ok(Self::build(key, name, category, Scale::Linear { to_base }, aliases))
    }

    /// Define a count unit
    #[must_use]
    pub fn count(key: &str, name: &str, aliases: &[&str]) -> Self {
        Self::build(key, name, UnitCategory::Count, Scale::Count, aliases)
    }

    /// Define a temperature unit
    #[must_use]
    pub fn temperature(key: &str, name: &str, scale: TemperatureScale, aliases: &[&str]) -> Self {
        Self::build(
            key,
            name,
            UnitCategory::Temperature,
            Scale::Temperature(scale),
            aliases,
        )
    }

    fn build(key: &str, name: &str, category: UnitCategory, scale: Scale, aliases: &[&str]) -> Self {
        Self {
            key: normalize_token(key),
            name: name.to_owned(),
            category,
            scale,
            aliases: aliases.iter().map(|alias| normalize_token(alias)).collect(),
        }
    }

    /// Base units per one of this unit; `None` for temperature and count units
    #[must_use]
    pub const fn to_base_factor(&self) -> Option<f64> {
        match self.scale {
            Scale::Linear { to_base } => Some(to_base),
            Scale::Temperature(_) | Scale::Count => None,
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Catalog of units with alias resolution
///
/// Immutable after construction; share it via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDefinition>,
    /// Every key and alias -> canonical key
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    /// Registry over the built-in metric, US customary and imperial units
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for definition in table::builtin_definitions() {
            if let Err(error) = registry.register(definition) {
                warn!(error = %error, "Skipping colliding built-in unit");
            }
        }
        registry
    }

    /// Registry over caller-supplied definitions
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a key or alias is claimed twice.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = UnitDefinition>,
    ) -> AppResult<Self> {
        let mut registry = Self::default();
        registry.extend(definitions)?;
        Ok(registry)
    }

    /// Add definitions to the registry
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a key or alias is already registered.
    /// Definitions before the failing one remain registered.
    pub fn extend(&mut self, definitions: impl IntoIterator<Item = UnitDefinition>) -> AppResult<()> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    fn register(&mut self, definition: UnitDefinition) -> AppResult<()> {
        let key = definition.key.clone();
        let mut tokens = vec![key.clone()];
        for alias in &definition.aliases {
            if !tokens.contains(alias) {
                tokens.push(alias.clone());
            }
        }

        if let Some(taken) = tokens.iter().find(|token| self.aliases.contains_key(*token)) {
            return Err(AppError::config_invalid(format!(
                "unit token '{taken}' of '{key}' is already registered to '{}'",
                self.aliases.get(taken).map_or("", String::as_str)
            )));
        }

        for token in tokens {
            self.aliases.insert(token, key.clone());
        }
        self.units.insert(key, definition);
        Ok(())
    }

    /// Definition for a key or alias
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&UnitDefinition> {
        let normalized = normalize_token(token);
        self.aliases
            .get(&normalized)
            .and_then(|key| self.units.get(key))
    }

    /// Convert `quantity` from one unit to another
    ///
    /// Textually identical tokens (after normalization) return `quantity` unchanged,
    /// even when the token is not registered.
    ///
    /// # Errors
    ///
    /// - `UnitError::InvalidQuantity` if `quantity` is NaN or infinite
    /// - `UnitError::UnknownUnit` if either token is not registered
    /// - `UnitError::IncompatibleCategory` if categories differ or the units are
    ///   distinct count units
    pub fn convert(&self, quantity: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        if !quantity.is_finite() {
            return Err(UnitError::invalid_quantity(quantity));
        }
        if normalize_token(from) == normalize_token(to) {
            return Ok(quantity);
        }

        let from_def = self.resolve(from).ok_or_else(|| UnitError::unknown(from))?;
        let to_def = self.resolve(to).ok_or_else(|| UnitError::unknown(to))?;

        if from_def.category != to_def.category {
            return Err(UnitError::incompatible(
                from,
                to,
                format!("{} vs {}", from_def.category, to_def.category),
            ));
        }

        match (from_def.scale, to_def.scale) {
            (Scale::Linear { to_base: from_base }, Scale::Linear { to_base: to_base_factor }) => {
                Ok(quantity * from_base / to_base_factor)
            }
            (Scale::Temperature(from_scale), Scale::Temperature(to_scale)) => {
                Ok(to_scale.from_celsius(from_scale.to_celsius(quantity)))
            }
            (Scale::Count, Scale::Count) if from_def.key == to_def.key => Ok(quantity),
            (Scale::Count, Scale::Count) => Err(UnitError::incompatible(
                from,
                to,
                "different count units",
            )),
            _ => Err(UnitError::incompatible(from, to, "mismatched unit scales")),
        }
    }

    /// Whether the two units are convertible: same category, and the same unit for
    /// count units
    ///
    /// This checks the units, not the tokens. [`Self::convert`] also accepts two
    /// identical tokens without resolving them, so `convert(q, "pinch", "pinch")`
    /// succeeds even though `can_convert("pinch", "pinch")` is false for an
    /// unregistered `pinch`.
    #[must_use]
    pub fn can_convert(&self, from: &str, to: &str) -> bool {
        let (Some(from_def), Some(to_def)) = (self.resolve(from), self.resolve(to)) else {
            return false;
        };
        if from_def.category != to_def.category {
            return false;
        }
        from_def.category != UnitCategory::Count || from_def.key == to_def.key
    }

    /// Category of a unit token
    #[must_use]
    pub fn category_of(&self, token: &str) -> Option<UnitCategory> {
        self.resolve(token).map(|definition| definition.category)
    }

    /// Human-readable name of a unit token
    #[must_use]
    pub fn name_of(&self, token: &str) -> Option<&str> {
        self.resolve(token).map(|definition| definition.name.as_str())
    }

    /// Sorted keys of every unit in `category`
    #[must_use]
    pub fn units_in(&self, category: UnitCategory) -> Vec<String> {
        let mut keys: Vec<String> = self
            .units
            .values()
            .filter(|definition| definition.category == category)
            .map(|definition| definition.key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Sorted keys of every registered unit
    #[must_use]
    pub fn all_units(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.units.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Whether the token resolves to a registered unit
    #[must_use]
    pub fn is_valid_unit(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_no_collisions() {
        let strict = UnitRegistry::from_definitions(table::builtin_definitions());
        assert!(strict.is_ok());
    }

    #[test]
    fn test_duplicate_alias_is_rejected() {
        let result = UnitRegistry::from_definitions([
            UnitDefinition::count("piece", "piece", &["pc"]),
            UnitDefinition::count("pack", "pack", &["PC"]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_linear_rejects_non_linear_categories() {
        assert!(UnitDefinition::linear("x", "x", UnitCategory::Count, 1.0, &[]).is_err());
        assert!(UnitDefinition::linear("x", "x", UnitCategory::Volume, 0.0, &[]).is_err());
    }

    #[test]
    fn test_fahrenheit_round_trip() {
        let scale = TemperatureScale::Fahrenheit;
        let celsius = scale.to_celsius(350.0);
        assert!((scale.from_celsius(celsius) - 350.0).abs() < 1e-9);
    }
}
