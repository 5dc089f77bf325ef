//! Numerical routines for the survey kernel.
//!
//! # Components
//!
//! - [`solvers`]: Iterative square-root solving with configurable
//!   convergence tolerance and iteration limits

pub mod solvers;
