// ABOUTME: Substitution catalog records with a ratio and an ordered quality tier
// ABOUTME: Ratios are validated at construction and deserialization time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// How well a substitute replaces the original ingredient.
///
/// Ordering is `Fair < Good < Excellent`, so sorting descending puts the best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Works, with a noticeable difference in taste or texture
    Fair,
    /// Close to the original
    Good,
    /// Practically indistinguishable
    Excellent,
}

impl Quality {
    /// Lowercase label used in tables and output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct SubstitutionRecord {
    ingredient: String,
    #[serde(alias = "name")]
    substitute_name: String,
    ratio: f64,
    #[serde(alias = "quality")]
    tier: Quality,
    #[serde(default)]
    notes: String,
}

/// A catalog entry: `ratio` units of `substitute_name` replace one unit of `ingredient`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubstitutionRecord")]
pub struct SubstitutionEntry {
    ingredient: String,
    substitute_name: String,
    ratio: f64,
    tier: Quality,
    notes: String,
}

impl SubstitutionEntry {
    /// Create an entry
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidRatio` if `ratio` is not a finite number greater than zero.
    pub fn new(
        ingredient: impl Into<String>,
        substitute_name: impl Into<String>,
        ratio: f64,
        tier: Quality,
        notes: impl Into<String>,
    ) -> AppResult<Self> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(AppError::invalid_ratio(ratio));
        }
        Ok(Self {
            ingredient: ingredient.into(),
            substitute_name: substitute_name.into(),
            ratio,
            tier,
            notes: notes.into(),
        })
    }

    /// Ingredient this entry replaces
    #[must_use]
    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }

    /// Name of the substitute
    #[must_use]
    pub fn substitute_name(&self) -> &str {
        &self.substitute_name
    }

    /// Units of substitute per unit of the original
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Quality tier
    #[must_use]
    pub const fn tier(&self) -> Quality {
        self.tier
    }

    /// Free-text usage notes
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl TryFrom<SubstitutionRecord> for SubstitutionEntry {
    type Error = AppError;

    fn try_from(record: SubstitutionRecord) -> AppResult<Self> {
        Self::new(
            record.ingredient,
            record.substitute_name,
            record.ratio,
            record.tier,
            record.notes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_ordering() {
        assert!(Quality::Excellent > Quality::Good);
        assert!(Quality::Good > Quality::Fair);
    }

    #[test]
    fn test_ratio_must_be_positive() {
        assert!(SubstitutionEntry::new("butter", "oil", 0.0, Quality::Good, "").is_err());
        assert!(SubstitutionEntry::new("butter", "oil", -1.0, Quality::Good, "").is_err());
        assert!(SubstitutionEntry::new("butter", "oil", f64::INFINITY, Quality::Good, "").is_err());
        assert!(SubstitutionEntry::new("butter", "oil", 0.75, Quality::Good, "").is_ok());
    }

    #[test]
    fn test_quality_serializes_lowercase() {
        let json = serde_json::to_string(&Quality::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
