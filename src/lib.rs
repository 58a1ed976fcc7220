// ABOUTME: Main library entry point for Larder ingredient matching and pantry reconciliation
// ABOUTME: Unit conversion, substitution catalog, reconciliation engine, and service facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder
//!
//! Turns recipe requirements and a pantry inventory into a grocery list.
//!
//! ## Features
//!
//! - **Ingredient matching**: confidence scoring across synonyms, descriptors, plurals, and typos
//! - **Unit conversion**: volume, weight, length, temperature, and count units
//! - **Substitutions**: tiered alternatives checked against the pantry
//! - **Reconciliation**: aggregation, pantry deduction, and substitute coverage
//!
//! ## Architecture
//!
//! - **`larder_core`**: errors, constants, and record types
//! - **`larder_matching`**: canonical index and confidence matcher
//! - **Units**: [`units::UnitRegistry`]
//! - **Substitutions**: [`substitutions::SubstitutionCatalog`]
//! - **Reconciliation**: [`reconciliation::ReconciliationEngine`]
//! - **Service**: [`service::LarderService`] wiring the above from [`config::LarderConfig`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder::config::LarderConfig;
//! use larder::errors::AppResult;
//! use larder::models::{PantryItem, RequiredLine};
//! use larder::service::LarderService;
//!
//! fn main() -> AppResult<()> {
//!     let service = LarderService::from_config(LarderConfig::from_env())?;
//!
//!     let required = [RequiredLine::new("flour", 2.0, "cup")?];
//!     let pantry = [PantryItem::new("all-purpose flour", 1.0, "cup")?];
//!
//!     for line in &service.reconcile(&required, &pantry) {
//!         println!("{} {} {}", line.quantity, line.unit, line.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration and YAML table overlays
pub mod config;

/// Structured logging setup
pub mod logging;

/// Pantry reconciliation engine
pub mod reconciliation;

/// Service facade
pub mod service;

/// Substitution catalog
pub mod substitutions;

/// Unit registry and conversion
pub mod units;

/// Error types re-exported from `larder_core`
pub mod errors {
    pub use larder_core::errors::{AppError, AppResult, ErrorCode, UnitError};
}

/// Record types re-exported from `larder_core`
pub mod models {
    pub use larder_core::models::{
        normalize_token, AppliedSubstitution, GroceryLineItem, PantryItem, Quality,
        RequiredLine, SubstitutionEntry,
    };
}

/// Constants re-exported from `larder_core`
pub use larder_core::constants;

/// Ingredient matching re-exported from `larder_matching`
pub mod matching {
    pub use larder_matching::{
        CanonicalIndex, ConfidenceMatcher, ExactMatcher, IngredientMatcher, SynonymEntry,
    };
}
