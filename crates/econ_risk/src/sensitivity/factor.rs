//! Factor definitions and per-factor results.

use std::collections::HashMap;

/// Factor values passed to the model, keyed by factor name.
pub type FactorValues = HashMap<String, f64>;

/// A model input to perturb.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SensitivityFactor {
    /// Factor name, as seen by the model.
    pub name: String,
    /// Baseline value.
    pub base_value: f64,
    /// Percentage changes to apply, e.g. `[-10, -5, 5, 10]`.
    pub changes: Vec<f64>,
}

impl SensitivityFactor {
    /// Create a factor.
    pub fn new(name: impl Into<String>, base_value: f64, changes: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            base_value,
            changes,
        }
    }

    /// Value after a percentage change.
    #[inline]
    pub fn perturbed(&self, change_pct: f64) -> f64 {
        self.base_value * (1.0 + change_pct / 100.0)
    }
}

/// Model output for one perturbation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImpactPoint {
    /// Percentage change applied.
    pub change: f64,
    /// Model output.
    pub value: f64,
    /// Signed coefficient of this perturbation alone.
    pub coefficient: f64,
}

/// Sensitivity of the model to one factor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FactorResult {
    /// Factor name.
    pub factor: String,
    /// Baseline value of the factor.
    pub base_value: f64,
    /// Non-negative headline coefficient.
    pub coefficient: f64,
    /// One point per requested change, in request order.
    pub impact_range: Vec<ImpactPoint>,
}
