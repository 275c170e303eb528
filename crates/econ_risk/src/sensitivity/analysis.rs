//! Perturbation runs.

use super::factor::{FactorResult, FactorValues, ImpactPoint, SensitivityFactor};
use tracing::debug;

/// Baseline output and per-factor results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SensitivityReport {
    /// Model output with every factor at its base value.
    pub baseline: f64,
    /// One result per factor, in input order.
    pub factors: Vec<FactorResult>,
}

/// Elasticity-style sensitivity coefficient.
///
/// ```
/// use econ_risk::sensitivity::sensitivity_coefficient;
///
/// // Output up 20% for a 10% change
/// assert_eq!(sensitivity_coefficient(100.0, 10.0, 120.0), 2.0);
/// assert_eq!(sensitivity_coefficient(0.0, 10.0, 5.0), 0.0);
/// assert_eq!(sensitivity_coefficient(100.0, 0.0, 100.0), 0.0);
/// ```
pub fn sensitivity_coefficient(baseline: f64, change_pct: f64, output: f64) -> f64 {
    if baseline == 0.0 || change_pct == 0.0 {
        return 0.0;
    }
    ((output - baseline) / baseline.abs()) / (change_pct / 100.0)
}

/// Strongest response among the points on one side of zero; ties keep the
/// first.
fn strongest<'a, I>(points: I, baseline: f64) -> Option<&'a ImpactPoint>
where
    I: Iterator<Item = &'a ImpactPoint>,
{
    points.fold(None, |best: Option<&ImpactPoint>, point| match best {
        Some(b) if (b.value - baseline).abs() >= (point.value - baseline).abs() => Some(b),
        _ => Some(point),
    })
}

/// Run the analysis.
///
/// Factors with duplicate names share one slot in [`FactorValues`]; the
/// last base value wins.
pub fn analyse<F>(factors: &[SensitivityFactor], model: F) -> SensitivityReport
where
    F: Fn(&FactorValues) -> f64,
{
    let base_values: FactorValues = factors
        .iter()
        .map(|f| (f.name.clone(), f.base_value))
        .collect();
    let baseline = model(&base_values);
    if baseline == 0.0 {
        debug!("sensitivity: zero baseline, every coefficient is 0");
    }

    let results = factors
        .iter()
        .map(|factor| {
            let mut values = base_values.clone();
            let impact_range: Vec<ImpactPoint> = factor
                .changes
                .iter()
                .map(|&change| {
                    values.insert(factor.name.clone(), factor.perturbed(change));
                    let value = model(&values);
                    ImpactPoint {
                        change,
                        value,
                        coefficient: sensitivity_coefficient(baseline, change, value),
                    }
                })
                .collect();

            let up = strongest(impact_range.iter().filter(|p| p.change > 0.0), baseline);
            let down = strongest(impact_range.iter().filter(|p| p.change < 0.0), baseline);
            let coefficient = up
                .map_or(0.0, |p| p.coefficient.abs())
                .max(down.map_or(0.0, |p| p.coefficient.abs()));

            debug!(factor = %factor.name, coefficient, "sensitivity: factor evaluated");
            FactorResult {
                factor: factor.name.clone(),
                base_value: factor.base_value,
                coefficient,
                impact_range,
            }
        })
        .collect();

    SensitivityReport {
        baseline,
        factors: results,
    }
}
