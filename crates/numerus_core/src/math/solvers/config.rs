//! Solver configuration types.

use num_traits::Float;

/// Configuration for iterative square-root solving.
///
/// Provides the convergence tolerance and iteration limit shared by solver
/// implementations.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use numerus_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-14);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on successive guesses.
    ///
    /// The solver stops once `|previous - guess| <= tolerance`.
    /// Smaller values provide more precision but may require more iterations.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `tolerance`: 1e-15 (15 fractional decimal digits)
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-15).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use numerus_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration targeting a number of fractional decimal digits.
    ///
    /// The tolerance becomes `10^-digits`, so `from_fractional_digits(15)`
    /// stops refinement once successive guesses agree to 15 fractional
    /// digits.
    ///
    /// # Panics
    ///
    /// Panics if `digits == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use numerus_core::math::solvers::SolverConfig;
    ///
    /// let config: SolverConfig<f64> = SolverConfig::from_fractional_digits(15);
    /// assert!((config.tolerance - 1e-15).abs() < 1e-20);
    /// ```
    pub fn from_fractional_digits(digits: u32) -> Self {
        assert!(digits > 0, "digits must be > 0");
        let ten = T::from(10.0).unwrap();
        Self {
            tolerance: ten.powi(-(digits as i32)),
            max_iterations: 100,
        }
    }
}
