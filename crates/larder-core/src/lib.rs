// ABOUTME: Core types and constants for the Larder pantry reconciliation workspace
// ABOUTME: Foundation crate with error handling, matching constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate providing shared types and constants for ingredient matching,
//! unit conversion, and pantry reconciliation. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `UnitError`
//! - **constants**: Confidence weights, thresholds, and environment variable names
//! - **models**: Pantry, requirement, grocery line, and substitution records

/// Unified error handling system with standard error codes
pub mod errors;

/// Matching weights, thresholds, and configuration keys organized by domain
pub mod constants;

/// Core data models (`PantryItem`, `RequiredLine`, `GroceryLineItem`, `SubstitutionEntry`)
pub mod models;
