//! Internal rate of return.

use super::discount::present_value;
use econ_core::math::solvers::{BisectionSolver, SolverConfig};
use tracing::debug;

/// Lower end of the IRR search bracket (-99%).
pub const IRR_LOWER_BOUND: f64 = -0.99;

/// Upper end of the IRR search bracket (1000%).
pub const IRR_UPPER_BOUND: f64 = 10.0;

/// Whether the series holds at least one strictly positive and one strictly
/// negative flow.
pub fn has_sign_change(series: &[f64]) -> bool {
    let has_positive = series.iter().any(|&cf| cf > 0.0);
    let has_negative = series.iter().any(|&cf| cf < 0.0);
    has_positive && has_negative
}

/// Internal rate of return with the default solver settings
/// (tolerance 1e-4 on NPV, at most 100 bisection steps).
///
/// Returns `None` when no rate can zero the series: fewer than two periods,
/// or every flow of the same sign (all zero included).
///
/// # Examples
///
/// ```
/// use econ_models::cashflow::irr;
///
/// let rate = irr(&[-10_000.0, 3_000.0, 4_000.0, 5_000.0, 2_000.0]).unwrap();
/// assert!((rate - 0.153).abs() < 0.005);
///
/// assert_eq!(irr(&[-1_000.0, -2_000.0, -3_000.0]), None);
/// assert_eq!(irr(&[]), None);
/// ```
pub fn irr(series: &[f64]) -> Option<f64> {
    irr_with_config(series, &SolverConfig::default())
}

/// Internal rate of return with explicit tolerance and iteration limit.
///
/// The search runs over `[IRR_LOWER_BOUND, IRR_UPPER_BOUND]`. It stops as
/// soon as `|NPV(mid)| < tolerance`; otherwise the midpoint of the final
/// bracket is returned after `max_iterations` steps.
pub fn irr_with_config(series: &[f64], config: &SolverConfig<f64>) -> Option<f64> {
    if series.len() < 2 {
        debug!(periods = series.len(), "irr: fewer than two periods");
        return None;
    }
    if !has_sign_change(series) {
        debug!("irr: cash flows never change sign");
        return None;
    }

    let solver = BisectionSolver::new(*config);
    match solver.find_root(
        |rate| present_value(series, rate),
        IRR_LOWER_BOUND,
        IRR_UPPER_BOUND,
    ) {
        Ok(result) => {
            if !result.converged {
                debug!(
                    rate = result.root,
                    iterations = result.iterations,
                    "irr: iteration limit reached, using final bracket midpoint"
                );
            }
            Some(result.root)
        }
        Err(err) => {
            debug!(%err, "irr: solver rejected bracket");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_irr_reference_project() {
        let rate = irr(&[-10_000.0, 3_000.0, 4_000.0, 5_000.0, 2_000.0]).unwrap();
        assert_abs_diff_eq!(rate, 0.1532, epsilon = 1e-3);
    }

    #[test]
    fn test_irr_single_period_return() {
        let rate = irr(&[-1_000.0, 1_100.0]).unwrap();
        assert_abs_diff_eq!(rate, 0.10, epsilon = 1e-6);
    }

    #[test]
    fn test_irr_absent_cases() {
        assert_eq!(irr(&[1_000.0, 2_000.0, 3_000.0]), None);
        assert_eq!(irr(&[-1_000.0, -2_000.0, -3_000.0]), None);
        assert_eq!(irr(&[]), None);
        assert_eq!(irr(&[-1_000.0]), None);
        assert_eq!(irr(&[0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_irr_negative_rate() {
        // Getting back less than invested
        let rate = irr(&[-1_000.0, 500.0, 400.0]).unwrap();
        assert!(rate < 0.0);
        assert!(present_value(&[-1_000.0, 500.0, 400.0], rate).abs() < 1e-4);
    }

    #[test]
    fn test_irr_with_tighter_config() {
        let config = SolverConfig::new(1e-9, 200);
        let series = [-10_000.0, 3_000.0, 4_000.0, 5_000.0, 2_000.0];
        let rate = irr_with_config(&series, &config).unwrap();
        assert!(present_value(&series, rate).abs() < 1e-9);
    }

    #[test]
    fn test_irr_iteration_limit_returns_midpoint() {
        let config = SolverConfig::new(1e-12, 1);
        // One step: midpoint of [-0.99, 10] without convergence, bracket halves once
        let rate = irr_with_config(&[-1_000.0, 1_100.0], &config).unwrap();
        assert!(rate > IRR_LOWER_BOUND && rate < IRR_UPPER_BOUND);
    }

    #[test]
    fn test_has_sign_change() {
        assert!(has_sign_change(&[-1.0, 0.0, 1.0]));
        assert!(!has_sign_change(&[0.0, 1.0]));
        assert!(!has_sign_change(&[]));
    }

    proptest! {
        #[test]
        fn prop_irr_zeroes_present_value(
            outlay in 100.0..100_000.0f64,
            inflows in prop::collection::vec(10.0..50_000.0f64, 1..10),
        ) {
            let mut series = vec![-outlay];
            series.extend(inflows);
            if let Some(rate) = irr(&series) {
                prop_assert!(rate >= IRR_LOWER_BOUND && rate <= IRR_UPPER_BOUND);
                // Away from the lower bound NPV is flat enough to meet the tolerance
                if rate > -0.5 && rate < 9.0 {
                    prop_assert!(present_value(&series, rate).abs() < 1e-4);
                }
            }
        }
    }
}
