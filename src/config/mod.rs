// ABOUTME: Environment-based configuration for the Larder service
// ABOUTME: Match threshold, optional table overlay path, and collaborator switches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! Everything is read from environment variables. Malformed values fall back to
//! their defaults with a warning; only an unreadable or invalid overlay file is
//! reported as an error, when it is loaded.

/// YAML overlay extending the built-in tables
pub mod overlay;

pub use overlay::{TableOverlay, UnitOverlay};

use std::env;
use std::path::PathBuf;
use tracing::warn;

use larder_core::constants::env_config;
use larder_core::constants::thresholds::DEFAULT_MATCH_THRESHOLD;
use larder_core::errors::AppResult;

/// Service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LarderConfig {
    /// Confidence required for two names to match, within `[0, 1]`
    pub match_threshold: f64,
    /// YAML overlay applied on top of the built-in tables
    pub tables_path: Option<PathBuf>,
    /// Use the confidence matcher; exact-name matching otherwise
    pub synonyms_enabled: bool,
    /// Use the substitution catalog; no substitutes otherwise
    pub substitutions_enabled: bool,
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            tables_path: None,
            synonyms_enabled: true,
            substitutions_enabled: true,
        }
    }
}

impl LarderConfig {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let match_threshold = lookup(env_config::MATCH_THRESHOLD)
            .map_or(DEFAULT_MATCH_THRESHOLD, |raw| parse_threshold(&raw));

        let tables_path = lookup(env_config::TABLES_PATH)
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let synonyms_disabled = lookup(env_config::DISABLE_SYNONYMS)
            .is_some_and(|raw| parse_flag(env_config::DISABLE_SYNONYMS, &raw));
        let substitutions_disabled = lookup(env_config::DISABLE_SUBSTITUTIONS)
            .is_some_and(|raw| parse_flag(env_config::DISABLE_SUBSTITUTIONS, &raw));

        Self {
            match_threshold,
            tables_path,
            synonyms_enabled: !synonyms_disabled,
            substitutions_enabled: !substitutions_disabled,
        }
    }

    /// Read the configured overlay file, if any
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigMissing` if the file does not exist, and
    /// `ErrorCode::ConfigInvalid` if it cannot be read or parsed.
    pub fn load_overlay(&self) -> AppResult<Option<TableOverlay>> {
        self.tables_path
            .as_deref()
            .map(TableOverlay::load)
            .transpose()
    }
}

fn parse_threshold(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => value,
        Ok(value) => {
            warn!(
                variable = env_config::MATCH_THRESHOLD,
                value,
                default = DEFAULT_MATCH_THRESHOLD,
                "Match threshold outside [0, 1], using default"
            );
            DEFAULT_MATCH_THRESHOLD
        }
        Err(error) => {
            warn!(
                variable = env_config::MATCH_THRESHOLD,
                raw,
                error = %error,
                default = DEFAULT_MATCH_THRESHOLD,
                "Invalid match threshold, using default"
            );
            DEFAULT_MATCH_THRESHOLD
        }
    }
}

/// Boolean switch; unrecognized values leave the switch off
fn parse_flag(variable: &str, raw: &str) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            warn!(variable, value = other, "Unrecognized boolean value, ignoring");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = LarderConfig::from_lookup(|_| None);
        assert_eq!(config, LarderConfig::default());
    }

    #[test]
    fn test_threshold_out_of_range_falls_back() {
        let config = LarderConfig::from_lookup(lookup_from(&[("LARDER_MATCH_THRESHOLD", "1.5")]));
        assert!((config.match_threshold - DEFAULT_MATCH_THRESHOLD).abs() < f64::EPSILON);

        let config = LarderConfig::from_lookup(lookup_from(&[("LARDER_MATCH_THRESHOLD", "high")]));
        assert!((config.match_threshold - DEFAULT_MATCH_THRESHOLD).abs() < f64::EPSILON);

        let config = LarderConfig::from_lookup(lookup_from(&[("LARDER_MATCH_THRESHOLD", " 0.85 ")]));
        assert!((config.match_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disable_flags() {
        let config = LarderConfig::from_lookup(lookup_from(&[
            ("LARDER_DISABLE_SYNONYMS", "TRUE"),
            ("LARDER_DISABLE_SUBSTITUTIONS", "maybe"),
        ]));
        assert!(!config.synonyms_enabled);
        assert!(config.substitutions_enabled);
    }

    #[test]
    fn test_blank_tables_path_ignored() {
        let config = LarderConfig::from_lookup(lookup_from(&[("LARDER_TABLES_PATH", "  ")]));
        assert!(config.tables_path.is_none());
        assert!(config.load_overlay().unwrap().is_none());
    }
}
