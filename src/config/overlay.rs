// ABOUTME: YAML table overlay adding synonyms, substitutions, and units at startup
// ABOUTME: Parses with serde_yaml and validates every record before it is applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Table overlay file
//!
//! ```yaml
//! synonyms:
//!   - canonical: scallion
//!     synonyms: [spring onion, green onion]
//! substitutions:
//!   - ingredient: buttermilk
//!     substitute_name: kefir
//!     ratio: 1.0
//!     tier: excellent
//!     notes: Similar tang
//! units:
//!   - key: pinch
//!     category: volume
//!     to_base_factor: 0.31
//!     aliases: [pinches]
//!   - key: sprig
//!     category: count
//! ```

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use larder_core::errors::{AppError, AppResult};
use larder_core::models::SubstitutionEntry;
use larder_matching::SynonymEntry;

use crate::units::{UnitCategory, UnitDefinition};

/// Additional table rows loaded from YAML
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableOverlay {
    /// Synonym groups merged into the canonical index
    #[serde(default)]
    pub synonyms: Vec<SynonymEntry>,
    /// Substitution entries added to the catalog
    #[serde(default)]
    pub substitutions: Vec<SubstitutionEntry>,
    /// Unit definitions added to the registry
    #[serde(default)]
    pub units: Vec<UnitOverlay>,
}

/// Unit definition as written in an overlay
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitOverlay {
    /// Canonical unit token
    pub key: String,
    /// Display name; defaults to the key
    #[serde(default)]
    pub name: Option<String>,
    /// Measurement category (linear categories or count)
    pub category: UnitCategory,
    /// Base units per one of this unit; required for linear categories
    #[serde(default)]
    pub to_base_factor: Option<f64>,
    /// Alternative spellings
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl UnitOverlay {
    /// Validate into a registry definition
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` for temperature units, count units with a
    /// base factor, linear units without one, or a non-positive factor.
    pub fn into_definition(self) -> AppResult<UnitDefinition> {
        let name = self.name.as_deref().unwrap_or(&self.key);
        let aliases: Vec<&str> = self.aliases.iter().map(String::as_str).collect();

        match (self.category, self.to_base_factor) {
            (UnitCategory::Temperature, _) => Err(AppError::config_invalid(format!(
                "unit '{}': temperature units cannot be defined in an overlay",
                self.key
            ))),
            (UnitCategory::Count, None) => Ok(UnitDefinition::count(&self.key, name, &aliases)),
            (UnitCategory::Count, Some(_)) => Err(AppError::config_invalid(format!(
                "unit '{}': count units take no base factor",
                self.key
            ))),
            (category, Some(factor)) => {
                UnitDefinition::linear(&self.key, name, category, factor, &aliases)
            }
            (category, None) => Err(AppError::config_invalid(format!(
                "unit '{}': {category} units need a to_base_factor",
                self.key
            ))),
        }
    }
}

impl TableOverlay {
    /// Parse an overlay from YAML text
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the YAML is malformed or a record
    /// fails validation.
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|error| {
            AppError::config_invalid(format!("invalid table overlay: {error}")).with_source(error)
        })
    }

    /// Read and parse an overlay file
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigMissing` if the file does not exist, and
    /// `ErrorCode::ConfigInvalid` if it cannot be read or parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|error| {
            let message = format!("cannot read table overlay {}: {error}", path.display());
            if error.kind() == io::ErrorKind::NotFound {
                AppError::config_missing(message).with_source(error)
            } else {
                AppError::config_invalid(message).with_source(error)
            }
        })?;
        let overlay = Self::from_yaml_str(&text)?;
        debug!(
            path = %path.display(),
            synonyms = overlay.synonyms.len(),
            substitutions = overlay.substitutions.len(),
            units = overlay.units.len(),
            "Loaded table overlay"
        );
        Ok(overlay)
    }

    /// Validate the unit section into registry definitions
    ///
    /// # Errors
    ///
    /// Returns the first invalid unit as `ErrorCode::ConfigInvalid`.
    pub fn unit_definitions(&self) -> AppResult<Vec<UnitDefinition>> {
        self.units
            .iter()
            .cloned()
            .map(UnitOverlay::into_definition)
            .collect()
    }

    /// Whether the overlay adds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.substitutions.is_empty() && self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::errors::ErrorCode;
    use larder_core::models::Quality;

    #[test]
    fn test_parse_all_sections() {
        let overlay = TableOverlay::from_yaml_str(
            r"
synonyms:
  - canonical: scallion
    synonyms: [spring onion]
substitutions:
  - ingredient: buttermilk
    substitute_name: kefir
    ratio: 1.0
    tier: excellent
units:
  - key: sprig
    category: count
",
        )
        .unwrap();

        assert_eq!(overlay.synonyms[0].canonical, "scallion");
        assert_eq!(overlay.substitutions[0].tier(), Quality::Excellent);
        let units = overlay.unit_definitions().unwrap();
        assert_eq!(units[0].category, UnitCategory::Count);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let error = TableOverlay::from_yaml_str(
            r"
substitutions:
  - ingredient: butter
    substitute_name: oil
    ratio: 0
    tier: good
",
        )
        .unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_temperature_unit_rejected() {
        let overlay = TableOverlay::from_yaml_str(
            r"
units:
  - key: gas mark
    category: temperature
",
        )
        .unwrap();
        let error = overlay.unit_definitions().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_empty_text_is_empty_overlay() {
        assert!(TableOverlay::from_yaml_str("  \n").unwrap().is_empty());
    }
}
