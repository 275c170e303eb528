//! Discounting primitives.

/// `growth^period`, exact in `powi` range and `powf` beyond it.
#[inline]
pub(crate) fn compound(growth: f64, period: usize) -> f64 {
    match i32::try_from(period) {
        Ok(n) => growth.powi(n),
        Err(_) => growth.powf(period as f64),
    }
}

/// Discount factor `1 / (1 + rate)^t`.
///
/// Returns `+∞` for `rate <= -1`, where the factor is undefined.
#[inline]
pub fn discount_factor(rate: f64, period: usize) -> f64 {
    if rate <= -1.0 {
        return f64::INFINITY;
    }
    1.0 / compound(1.0 + rate, period)
}

/// Present value `Σ cf_t / (1 + rate)^t` of a cash-flow series.
///
/// # Edge Cases
/// - Empty series: `0.0`
/// - `rate <= -1`: `+∞` (the discounting domain breaks down)
/// - `rate == 0`: the plain sum of the series
///
/// # Examples
///
/// ```
/// use econ_models::cashflow::present_value;
///
/// assert_eq!(present_value(&[-10_000.0, 3_000.0, 4_000.0, 5_000.0], 0.0), 2_000.0);
/// assert_eq!(present_value(&[], 0.1), 0.0);
/// assert!(present_value(&[-1.0, 2.0], -1.0).is_infinite());
/// ```
pub fn present_value(series: &[f64], rate: f64) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    if rate <= -1.0 {
        return f64::INFINITY;
    }
    if rate == 0.0 {
        return series.iter().sum();
    }

    let growth = 1.0 + rate;
    series
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / compound(growth, t))
        .sum()
}

/// Each flow divided by `(1 + rate)^t`, in period order.
///
/// Empty for `rate <= -1`.
pub fn discounted_flows(series: &[f64], rate: f64) -> Vec<f64> {
    if rate <= -1.0 {
        return Vec::new();
    }
    let growth = 1.0 + rate;
    series
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / compound(growth, t))
        .collect()
}
