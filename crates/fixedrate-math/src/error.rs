//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Iteration cap reached without meeting the step tolerance.
    #[error("Newton-Raphson did not converge after {iterations} iterations (last step: {last_step:.2e})")]
    NonConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Size of the last Newton step taken.
        last_step: f64,
    },

    /// The derivative vanished (or stopped being finite) mid-iteration.
    #[error("Degenerate derivative {value:.2e} at iteration {iteration}")]
    DegenerateDerivative {
        /// Iteration at which the derivative was evaluated.
        iteration: u32,
        /// The derivative value.
        value: f64,
    },

    /// Division by zero.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The zero divisor.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, last_step: f64) -> Self {
        Self::NonConvergence {
            iterations,
            last_step,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
