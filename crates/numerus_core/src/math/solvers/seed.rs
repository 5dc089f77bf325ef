//! Order-of-magnitude seeding for iterative square-root refinement.

use num_traits::Float;

/// Coarse starting estimate for the square root of `radicand`.
///
/// Counts the decimal digits of the radicand as `ceil(log10(radicand))` and
/// returns `10^(digits / 2)`, with float division so an odd digit count
/// lands on a half-power of ten (e.g. a 3-digit radicand seeds at
/// `10^1.5 ≈ 31.6`).
///
/// The textbook rough estimate for `S = a · 10^(2n)` with `1 <= a < 10` is
/// `2 · 10^n`; the factor of two is omitted here. The lower seed converges
/// in fewer refinement steps on this workload, a tuning choice measured
/// against the survey range rather than derived.
///
/// # Arguments
///
/// * `radicand` - Value to estimate the square root of; must be positive
///   (`log10` domain). Callers validate before seeding; a `debug_assert`
///   guards the seam.
///
/// # Examples
///
/// ```
/// use numerus_core::math::solvers::initial_guess;
///
/// // Two digits: 10^1
/// assert!((initial_guess(100.0_f64) - 10.0).abs() < 1e-12);
/// // Four digits: 10^2
/// assert!((initial_guess(8128.0_f64) - 100.0).abs() < 1e-12);
/// ```
#[inline]
pub fn initial_guess<T: Float>(radicand: T) -> T {
    debug_assert!(radicand > T::zero(), "radicand must be positive");

    let ten = T::from(10.0).unwrap();
    let two = T::from(2.0).unwrap();
    let digits = radicand.log10().ceil();
    ten.powf(digits / two)
}
