//! # numerus_core: Numerical Foundation for the Perfect-Number Survey
//!
//! ## Role
//!
//! numerus_core is the foundation layer of the workspace, providing:
//! - Iterative square-root solving (`math::solvers`)
//! - Integer number theory: perfect numbers and divisors (`number_theory`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer depends on no other workspace crate, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derive support for structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerus_core::math::solvers::BabylonianSolver;
//! use numerus_core::number_theory::{is_perfect, proper_divisors};
//!
//! // 28 is perfect: 1 + 2 + 4 + 7 + 14 = 28
//! assert!(is_perfect(28));
//! assert_eq!(proper_divisors(28), vec![1, 2, 4, 7, 14]);
//!
//! // Square root by Babylonian refinement
//! let solver = BabylonianSolver::with_defaults();
//! let estimate = solver.sqrt(28.0_f64).unwrap();
//! assert!((estimate.root - 28.0_f64.sqrt()).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod number_theory;
pub mod types;
