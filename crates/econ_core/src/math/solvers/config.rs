//! Solver configuration types.

use num_traits::Float;

/// Stopping rule for root finding: an absolute tolerance on `|f(x)|` and
/// a step budget.
///
/// # Example
///
/// ```
/// use econ_core::math::solvers::SolverConfig;
///
/// // Defaults used by the IRR solver
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert!((config.tolerance - 1e-4).abs() < 1e-12);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-8,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops early when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations.
    ///
    /// When the limit is reached the bisection solver returns the midpoint
    /// of its final bracket.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-4
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-4).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Explicit tolerance and step budget.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use econ_core::math::solvers::SolverConfig;
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

    /// Returns true when both fields are usable by a solver.
    ///
    /// Useful for configurations deserialised from user input, which
    /// bypass the assertions in [`SolverConfig::new`].
    pub fn is_valid(&self) -> bool {
        self.tolerance > T::zero() && self.tolerance.is_finite() && self.max_iterations > 0
    }
}
