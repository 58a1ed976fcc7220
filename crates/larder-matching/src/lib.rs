// ABOUTME: Ingredient matching engine for the Larder workspace
// ABOUTME: Canonical synonym index, text normalization, similarity, and the confidence cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Matching
//!
//! Decides whether two free-text ingredient names refer to the same culinary item.
//! Matching is a fixed rule cascade over a curated synonym table; there is no
//! learned model.
//!
//! ## Modules
//!
//! - **normalize**: case folding, descriptor stripping, plural candidates
//! - **similarity**: edit-distance similarity and word-level fuzzy matching
//! - **`canonical_index`**: synonym table with a lazily built reverse index
//! - **matcher**: `IngredientMatcher` trait, `ConfidenceMatcher`, `ExactMatcher`
//! - **data**: built-in synonym table

/// Built-in reference data
pub mod data;

/// Name normalization helpers
pub mod normalize;

/// Similarity and word matching primitives
pub mod similarity;

/// Canonical ingredient index
pub mod canonical_index;

/// Confidence cascade and matcher trait
pub mod matcher;

pub use canonical_index::{CanonicalIndex, SynonymEntry};
pub use matcher::{ConfidenceMatcher, ExactMatcher, IngredientMatcher};
