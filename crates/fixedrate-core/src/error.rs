//! Error types for the core crate.
//!
//! Date construction, date ordering and frequency validation all fail
//! through [`CoreError`].

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core date and convention operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The date does not exist or could not be parsed.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// An end date precedes its start date, or a span that must be
    /// non-empty is not.
    #[error("Invalid date order: start {start}, end {end}")]
    InvalidDateOrder {
        /// Start of the span (ISO format).
        start: String,
        /// End of the span (ISO format).
        end: String,
    },

    /// The compounding frequency does not step evenly through a year.
    #[error("Unsupported frequency: {periods_per_year} periods per year (expected 1, 2, 4 or 12)")]
    UnsupportedFrequency {
        /// The rejected number of periods per year.
        periods_per_year: u32,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid date order error.
    #[must_use]
    pub fn invalid_date_order(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidDateOrder {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(periods_per_year: u32) -> Self {
        Self::UnsupportedFrequency { periods_per_year }
    }
}
