// ABOUTME: Pantry inventory, aggregated requirement lines, and grocery list line items
// ABOUTME: Constructors validate quantities so downstream arithmetic never sees NaN or negatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::substitution::{Quality, SubstitutionEntry};
use crate::errors::{AppError, AppResult};

fn validate_quantity(field: &str, quantity: f64) -> AppResult<f64> {
    if quantity.is_finite() && quantity >= 0.0 {
        Ok(quantity)
    } else {
        Err(AppError::invalid_quantity(field, quantity))
    }
}

/// Wire shape shared by pantry items and requirement lines before validation
#[derive(Deserialize)]
struct QuantityRecord {
    #[serde(alias = "ingredient_name")]
    name: String,
    quantity: f64,
    unit: String,
}

/// An item the user already owns.
///
/// Owned by the caller; reconciliation only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuantityRecord")]
pub struct PantryItem {
    name: String,
    quantity: f64,
    unit: String,
}

impl PantryItem {
    /// Create a pantry item
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidQuantity` if `quantity` is negative or not finite.
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            name: name.into(),
            quantity: validate_quantity("pantry quantity", quantity)?,
            unit: unit.into(),
        })
    }

    /// Ingredient name as entered by the user
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity on hand
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit token as entered by the user
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl TryFrom<QuantityRecord> for PantryItem {
    type Error = AppError;

    fn try_from(record: QuantityRecord) -> AppResult<Self> {
        Self::new(record.name, record.quantity, record.unit)
    }
}

/// One ingredient requirement, typically aggregated from a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuantityRecord")]
pub struct RequiredLine {
    #[serde(rename = "name")]
    ingredient_name: String,
    quantity: f64,
    unit: String,
}

impl RequiredLine {
    /// Create a requirement line
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidQuantity` if `quantity` is negative or not finite.
    pub fn new(
        ingredient_name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            ingredient_name: ingredient_name.into(),
            quantity: validate_quantity("required quantity", quantity)?,
            unit: unit.into(),
        })
    }

    /// Scale the quantity, e.g. by `1 / servings` when a recipe feeds several people
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidQuantity` if the scaled quantity is negative or not finite.
    pub fn scaled(&self, factor: f64) -> AppResult<Self> {
        Self::new(
            self.ingredient_name.clone(),
            self.quantity * factor,
            self.unit.clone(),
        )
    }

    /// Ingredient name as written in the recipe
    #[must_use]
    pub fn ingredient_name(&self) -> &str {
        &self.ingredient_name
    }

    /// Quantity required
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit token as written in the recipe
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl TryFrom<QuantityRecord> for RequiredLine {
    type Error = AppError;

    fn try_from(record: QuantityRecord) -> AppResult<Self> {
        Self::new(record.name, record.quantity, record.unit)
    }
}

/// Substitution recorded on a grocery line after pantry stock of a substitute was used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedSubstitution {
    /// Name of the pantry item used as the substitute
    pub substitute_name: String,
    /// Substitute needed per unit of the original
    pub ratio: f64,
    /// Quality tier of the substitution
    pub tier: Quality,
    /// Usage notes from the catalog
    pub notes: String,
    /// Amount of substitute consumed, in the grocery line's unit
    pub quantity_consumed: f64,
}

impl AppliedSubstitution {
    /// Record that `substituted` units of the original were covered by `entry`
    #[must_use]
    pub fn from_entry(entry: &SubstitutionEntry, pantry_name: &str, substituted: f64) -> Self {
        Self {
            substitute_name: pantry_name.to_owned(),
            ratio: entry.ratio(),
            tier: entry.tier(),
            notes: entry.notes().to_owned(),
            quantity_consumed: substituted * entry.ratio(),
        }
    }
}

/// A line of the computed shopping deficit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryLineItem {
    /// Ingredient name (first spelling seen while aggregating)
    pub name: String,
    /// Quantity still to buy
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// Substitution that reduced the deficit, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub substitution: Option<AppliedSubstitution>,
}

impl GroceryLineItem {
    /// Start a line with zero quantity
    #[must_use]
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 0.0,
            unit: unit.into(),
            substitution: None,
        }
    }

    /// Subtract an owned amount, clamping at zero
    pub fn deduct(&mut self, amount: f64) {
        self.quantity = (self.quantity - amount).max(0.0);
    }

    /// Whether any quantity is still missing
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.quantity > 0.0
    }
}
