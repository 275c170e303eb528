//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a bisection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionResult<T: Float> {
    /// Midpoint that met the tolerance, or the midpoint of the final bracket.
    pub root: T,
    /// Number of midpoints evaluated.
    pub iterations: usize,
    /// Whether `|f(root)| < tolerance` was reached before the iteration limit.
    pub converged: bool,
}

/// Bisection root finder over a fixed bracket.
///
/// Each iteration evaluates `f` at the midpoint. If `|f(mid)|` is below the
/// tolerance the midpoint is returned immediately. Otherwise the bracket is
/// narrowed by comparing the sign of `f(low)` with the sign of `f(mid)`:
/// opposite signs keep the lower half, anything else keeps the upper half.
///
/// The solver never fails for lack of a sign change. When `f` has no root
/// in the bracket the search drifts towards one endpoint and reports
/// `converged == false` with the midpoint of the final bracket, which
/// callers are free to use or discard.
///
/// # Example
///
/// ```
/// use econ_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(result.root).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Search `[low, high]` for a root of `f`.
    ///
    /// # Returns
    ///
    /// * `Ok(result)` - see [`BisectionResult`]
    /// * `Err(SolverError::InvalidBracket)` - endpoints non-finite or `low >= high`
    pub fn find_root<F>(&self, f: F, low: T, high: T) -> Result<BisectionResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(SolverError::InvalidBracket {
                low: low.to_f64().unwrap_or(f64::NAN),
                high: high.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::one() + T::one();
        let mut low = low;
        let mut high = high;

        for iteration in 0..self.config.max_iterations {
            let mid = (low + high) / two;
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance {
                return Ok(BisectionResult {
                    root: mid,
                    iterations: iteration + 1,
                    converged: true,
                });
            }

            if f(low) * f_mid < T::zero() {
                high = mid;
            } else {
                low = mid;
            }
        }

        Ok(BisectionResult {
            root: (low + high) / two,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
