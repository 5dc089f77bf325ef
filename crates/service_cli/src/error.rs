//! CLI error types

use numerus_core::types::SolverError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A square-root solve failed to converge.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_conversion() {
        let err: CliError = SolverError::MaxIterationsExceeded { iterations: 100 }.into();
        assert!(format!("{}", err).contains("100 iterations"));
    }
}
