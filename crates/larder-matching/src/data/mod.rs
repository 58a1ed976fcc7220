// ABOUTME: Static reference data shipped with the matching engine
// ABOUTME: Currently the curated ingredient synonym table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Curated ingredient synonym table
pub mod synonyms;

pub use synonyms::SYNONYM_TABLE;
