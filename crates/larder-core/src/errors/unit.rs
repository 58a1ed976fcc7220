// ABOUTME: Typed errors raised by the unit registry during token resolution and conversion
// ABOUTME: Recoverable at the call site; reconciliation treats them as a skipped deduction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::ErrorCode;

/// Errors specific to unit resolution and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum UnitError {
    /// Token is not a registered unit key or alias
    #[error("unknown unit: '{unit}'")]
    UnknownUnit {
        /// The token as supplied by the caller
        unit: String,
    },
    /// Units belong to different categories, or are distinct count units
    #[error("cannot convert '{from}' to '{to}': {reason}")]
    IncompatibleCategory {
        /// Source unit token
        from: String,
        /// Target unit token
        to: String,
        /// Why the pair is incompatible
        reason: String,
    },
    /// Quantity is NaN or infinite
    #[error("quantity must be a finite number, got {value}")]
    InvalidQuantity {
        /// Rejected value
        value: f64,
    },
}

impl UnitError {
    /// Create an "unknown unit" error
    #[must_use]
    pub fn unknown(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }

    /// Create an "incompatible category" error
    #[must_use]
    pub fn incompatible(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::IncompatibleCategory {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }

    /// Create an "invalid quantity" error
    #[must_use]
    pub const fn invalid_quantity(value: f64) -> Self {
        Self::InvalidQuantity { value }
    }

    /// Error code used when this error is surfaced as an `AppError`
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownUnit { .. } => ErrorCode::UnknownUnit,
            Self::IncompatibleCategory { .. } => ErrorCode::IncompatibleCategory,
            Self::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
        }
    }
}
