//! Payback period.

use super::discount::compound;
use tracing::debug;

/// Discounted (dynamic) payback period in years.
///
/// Walks the periods accumulating discounted flows. In the first period `T`
/// where the running total turns non-negative, the fractional year is
/// interpolated linearly: `(T - 1) + |cumulative(T - 1)| / discounted(T)`.
/// A series already non-negative at period 0 pays back at `0`.
///
/// Returns `None` when the series is empty, `rate <= -1`, or the
/// cumulative balance never recovers.
///
/// # Examples
///
/// ```
/// use econ_models::cashflow::discounted_payback;
///
/// let years = discounted_payback(&[-10_000.0, 3_000.0, 4_000.0, 5_000.0, 2_000.0], 0.1).unwrap();
/// assert!(years > 3.0 && years < 4.0);
///
/// assert_eq!(discounted_payback(&[-10_000.0, 1_000.0, 1_000.0, 1_000.0], 0.1), None);
/// ```
pub fn discounted_payback(series: &[f64], rate: f64) -> Option<f64> {
    if series.is_empty() || rate <= -1.0 {
        return None;
    }

    let growth = 1.0 + rate;
    let mut cumulative = 0.0;
    for (t, cf) in series.iter().enumerate() {
        let discounted = cf / compound(growth, t);
        let previous = cumulative;
        cumulative += discounted;

        if cumulative >= 0.0 {
            if t == 0 {
                return Some(0.0);
            }
            return Some((t - 1) as f64 + previous.abs() / discounted);
        }
    }

    debug!(
        rate,
        shortfall = cumulative,
        "payback: cumulative discounted flow never recovers"
    );
    None
}

/// Static payback period: [`discounted_payback`] at a zero rate.
pub fn simple_payback(series: &[f64]) -> Option<f64> {
    discounted_payback(series, 0.0)
}
