//! Presentation rounding.
//!
//! Every calculator that reports rounded figures goes through [`round_to`],
//! so fixtures stay reproducible. The rule is round-half-up on the scaled
//! value: `floor(x * 10^d + 0.5) / 10^d`. Halves therefore round towards
//! positive infinity (`-2.5 -> -2`), unlike [`f64::round`].

/// Round `value` to `decimals` places, halves rounding up.
///
/// Non-finite values pass through unchanged so that `+∞` and `NaN`
/// survive presentation rounding.
///
/// # Examples
///
/// ```
/// use econ_core::math::rounding::round_to;
///
/// assert_eq!(round_to(37.499, 2), 37.5);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(-0.125, 2), -0.12);
/// assert!(round_to(f64::INFINITY, 2).is_infinite());
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale + 0.5).floor() / scale
}

/// Round a monetary amount to 2 decimal places.
#[inline]
pub fn round_money(value: f64) -> f64 {
    round_to(value, 2)
}

/// Convert a fraction to a percentage rounded to 2 decimal places.
///
/// ```
/// use econ_core::math::rounding::to_percentage;
///
/// assert_eq!(to_percentage(0.37512), 37.51);
/// ```
#[inline]
pub fn to_percentage(fraction: f64) -> f64 {
    if !fraction.is_finite() {
        return fraction;
    }
    (fraction * 10_000.0 + 0.5).floor() / 100.0
}
