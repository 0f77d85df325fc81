//! Error types for bond operations.

use thiserror::Error;

use fixedrate_core::CoreError;
use fixedrate_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A per-period rate of zero was used as a divisor.
    #[error("Division by zero in {operation}: per-period rate is zero")]
    DivisionByZero {
        /// The operation that required a non-zero rate.
        operation: String,
    },

    /// Operation declared by the instrument but not supported.
    #[error("Not implemented: {operation}")]
    NotImplemented {
        /// The unsupported operation.
        operation: String,
    },

    /// No cashflow is paid after the valuation date.
    #[error("No cashflows after valuation date {valuation}")]
    NoFutureCashflows {
        /// The valuation date.
        valuation: String,
    },

    /// Invalid or unreadable pricing configuration.
    #[error("Invalid pricing configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Numerical error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates a not implemented error.
    #[must_use]
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if the error came from the yield solver giving up.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::Math(MathError::NonConvergence { .. }))
    }
}
