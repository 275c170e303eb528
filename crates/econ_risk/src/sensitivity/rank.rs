//! Ranking of factors by influence.

use super::factor::FactorResult;

/// Sort by coefficient magnitude, most influential first. Equal
/// coefficients keep their input order; NaN sorts last.
pub fn rank_by_sensitivity(mut results: Vec<FactorResult>) -> Vec<FactorResult> {
    results.sort_by(|a, b| {
        let key = |r: &FactorResult| {
            let magnitude = r.coefficient.abs();
            if magnitude.is_nan() {
                f64::NEG_INFINITY
            } else {
                magnitude
            }
        };
        key(b).total_cmp(&key(a))
    });
    results
}
