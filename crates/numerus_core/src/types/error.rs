//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from iterative square-root solving

use thiserror::Error;

/// Iterative solver errors.
///
/// Provides structured error handling for square-root solver operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NonPositiveRadicand`: Square root requested for a non-positive value
///
/// # Examples
/// ```
/// use numerus_core::types::SolverError;
///
/// let err = SolverError::NonPositiveRadicand { radicand: -4.0 };
/// assert_eq!(format!("{}", err), "Radicand must be positive, got -4");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Square root requested for zero or a negative value.
    #[error("Radicand must be positive, got {radicand}")]
    NonPositiveRadicand {
        /// The offending radicand
        radicand: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(format!("{}", err), "Failed to converge after 100 iterations");
    }

    #[test]
    fn test_non_positive_radicand_display() {
        let err = SolverError::NonPositiveRadicand { radicand: 0.0 };
        assert_eq!(format!("{}", err), "Radicand must be positive, got 0");
    }

    #[test]
    fn test_error_equality() {
        let a = SolverError::MaxIterationsExceeded { iterations: 3 };
        let b = SolverError::MaxIterationsExceeded { iterations: 3 };
        assert_eq!(a, b);
    }
}
