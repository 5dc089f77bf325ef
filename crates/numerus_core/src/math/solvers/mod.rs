//! Iterative square-root solvers.
//!
//! This module provides the fixed-point square-root machinery used by the
//! perfect-number survey: a coarse order-of-magnitude seed estimator and a
//! Babylonian refinement loop with a convergence criterion on successive
//! guesses.
//!
//! ## Available Solvers
//!
//! - [`BabylonianSolver`]: Babylonian (Newton-style) fixed-point iteration,
//!   reporting the converged root together with its iteration count
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on successive guesses (default: 1e-15)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Seeding
//!
//! [`initial_guess`] produces the starting estimate from the radicand's
//! decimal digit count. The seed counts as the first iteration, so reported
//! iteration counts are directly comparable across radicands.
//!
//! ## Examples
//!
//! ```
//! use numerus_core::math::solvers::{BabylonianSolver, SolverConfig};
//!
//! // Find √2 to 15 fractional digits
//! let solver = BabylonianSolver::new(SolverConfig::default());
//! let estimate = solver.sqrt(2.0_f64).unwrap();
//!
//! assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-12);
//! assert!(estimate.iterations >= 2);
//! ```

mod babylonian;
mod config;
mod seed;

// Re-export public types at module level
pub use babylonian::{BabylonianSolver, SqrtEstimate};
pub use config::SolverConfig;
pub use seed::initial_guess;
