// ABOUTME: Unified error handling with error codes and a single application error type
// ABOUTME: Domain-specific errors (unit conversion) convert into AppError at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Defines the standard error codes and the `AppError` type shared by every crate
//! in the workspace. Recoverable, domain-specific failures (unit conversion) have
//! their own typed enum in [`unit`] and map onto an `ErrorCode` when they cross
//! into application code.

/// Unit conversion errors
pub mod unit;

pub use unit::UnitError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Quantity is negative or not finite
    #[serde(rename = "INVALID_QUANTITY")]
    InvalidQuantity = 3001,
    /// Substitution ratio is zero, negative, or not finite
    #[serde(rename = "INVALID_RATIO")]
    InvalidRatio = 3002,

    // Units (4000-4999)
    /// Unit token is not registered
    #[serde(rename = "UNKNOWN_UNIT")]
    UnknownUnit = 4000,
    /// Conversion between different categories or distinct count units
    #[serde(rename = "INCOMPATIBLE_CATEGORY")]
    IncompatibleCategory = 4001,

    // Configuration (6000-6999)
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidQuantity => "Quantity must be a finite, non-negative number",
            Self::InvalidRatio => "Substitution ratio must be a finite number greater than zero",
            Self::UnknownUnit => "The unit is not registered",
            Self::IncompatibleCategory => "The units cannot be converted into each other",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether callers may skip the failed operation and continue with partial results
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownUnit | Self::IncompatibleCategory | Self::InvalidQuantity
        )
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid quantity for the named field
    #[must_use]
    pub fn invalid_quantity(field: &str, value: f64) -> Self {
        Self::new(
            ErrorCode::InvalidQuantity,
            format!("{field} must be finite and non-negative, got {value}"),
        )
    }

    /// Invalid substitution ratio
    #[must_use]
    pub fn invalid_ratio(value: f64) -> Self {
        Self::new(
            ErrorCode::InvalidRatio,
            format!("ratio must be finite and greater than zero, got {value}"),
        )
    }

    /// Required configuration is missing
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Invalid configuration value or table
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<UnitError> for AppError {
    fn from(error: UnitError) -> Self {
        let code = error.code();
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_error_maps_to_error_code() {
        let error: AppError = UnitError::unknown("smidgen").into();
        assert_eq!(error.code, ErrorCode::UnknownUnit);
        assert!(error.message.contains("smidgen"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_recoverable_codes() {
        assert!(ErrorCode::IncompatibleCategory.is_recoverable());
        assert!(ErrorCode::UnknownUnit.is_recoverable());
        assert!(!ErrorCode::ConfigInvalid.is_recoverable());
        assert!(!ErrorCode::ConfigMissing.is_recoverable());
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::invalid_ratio(0.0);
        let rendered = error.to_string();
        assert!(rendered.starts_with("Substitution ratio must be"));
        assert!(rendered.contains("got 0"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::IncompatibleCategory).unwrap();
        assert_eq!(json, "\"INCOMPATIBLE_CATEGORY\"");
    }
}
