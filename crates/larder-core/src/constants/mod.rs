// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Confidence weights, matching thresholds, unit constants, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being scattered through
//! the matching and conversion code, so every tier weight of the confidence cascade
//! is visible in one place.

/// Confidence assigned by each tier of the matching cascade
pub mod confidence {
    /// Normalized strings are identical
    pub const EXACT: f64 = 1.0;
    /// Both names resolve to the same canonical ingredient
    pub const CANONICAL: f64 = 1.0;
    /// Names are identical once descriptors are removed
    pub const DESCRIPTOR_STRIPPED: f64 = 0.9;
    /// Canonical forms are identical once descriptors are removed
    pub const DESCRIPTOR_STRIPPED_CANONICAL: f64 = 0.85;
    /// Lower bound for an accepted single-word fuzzy match
    pub const SINGLE_WORD_FLOOR: f64 = 0.7;
    /// Multiplier applied to the matched-token ratio of multi-word names
    pub const MULTI_WORD_WEIGHT: f64 = 0.9;
    /// Base confidence of a token-boundary substring match
    pub const SUBSTRING_BASE: f64 = 0.7;
    /// Extra confidence scaled by the substring length ratio
    pub const SUBSTRING_SPAN: f64 = 0.2;
    /// Multiplier for whole-string similarity of descriptor-stripped names
    pub const GLOBAL_SIMILARITY_WEIGHT: f64 = 0.8;
    /// Multiplier for whole-string similarity of canonical forms
    pub const CANONICAL_SIMILARITY_WEIGHT: f64 = 0.75;
    /// No tier matched
    pub const NONE: f64 = 0.0;
}

/// Thresholds and minimum lengths used while matching
pub mod thresholds {
    /// Default confidence required for two names to be considered the same ingredient
    pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;
    /// Similarity required for two words to count as a fuzzy word match
    pub const WORD_SIMILARITY: f64 = 0.7;
    /// Shortest string eligible for substring matching
    pub const MIN_SUBSTRING_LEN: usize = 3;
    /// Shortest string eligible for whole-string similarity matching
    pub const MIN_SIMILARITY_LEN: usize = 4;
}

/// Unit conversion constants
pub mod units {
    /// Offset between Kelvin and Celsius
    pub const KELVIN_OFFSET: f64 = 273.15;
    /// Freezing point of water in Fahrenheit
    pub const FAHRENHEIT_OFFSET: f64 = 32.0;
    /// Fahrenheit degrees per Celsius degree
    pub const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Default confidence threshold override
    pub const MATCH_THRESHOLD: &str = "LARDER_MATCH_THRESHOLD";
    /// Path to a YAML overlay extending the built-in tables
    pub const TABLES_PATH: &str = "LARDER_TABLES_PATH";
    /// Replace the confidence matcher with exact-name matching
    pub const DISABLE_SYNONYMS: &str = "LARDER_DISABLE_SYNONYMS";
    /// Replace the substitution catalog with an empty source
    pub const DISABLE_SUBSTITUTIONS: &str = "LARDER_DISABLE_SUBSTITUTIONS";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Service names for structured logging
pub mod service_names {
    /// Name reported by the library and CLI
    pub const LARDER: &str = "larder";
}
