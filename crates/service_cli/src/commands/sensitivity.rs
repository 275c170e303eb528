//! Sensitivity command implementation
//!
//! Perturbs each factor of a built-in model and ranks the factors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use econ_risk::sensitivity::{analyse, rank_by_sensitivity, FactorResult, SensitivityFactor};

use crate::models::{BoundModel, BuiltinModel};
use crate::Result;

/// Input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityInput {
    /// Model under analysis.
    pub model: BuiltinModel,
    /// Factors to perturb.
    pub factors: Vec<SensitivityFactor>,
    /// Inputs held fixed throughout.
    #[serde(default)]
    pub constants: HashMap<String, f64>,
    /// Model parameter to factor name.
    #[serde(default)]
    pub bindings: HashMap<String, String>,
}

/// Output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityOutput {
    /// Model under analysis.
    pub model: BuiltinModel,
    /// Output at base values.
    pub baseline: f64,
    /// Factors, most influential first.
    pub ranking: Vec<FactorResult>,
}

/// Run the analysis.
///
/// # Errors
///
/// A model parameter with no factor or constant behind it.
pub fn execute(input: SensitivityInput) -> Result<SensitivityOutput> {
    let model = BoundModel::new(
        input.model,
        input.constants,
        input.bindings,
        input.factors.iter().map(|f| f.name.as_str()),
    )?;
    let report = analyse(&input.factors, |values| model.evaluate(values));

    Ok(SensitivityOutput {
        model: model.model(),
        baseline: report.baseline,
        ranking: rank_by_sensitivity(report.factors),
    })
}

/// Run the sensitivity command
pub fn run(path: &str, compact: bool) -> Result<()> {
    let input: SensitivityInput = super::read_input(path)?;
    info!(
        model = input.model.name(),
        factors = input.factors.len(),
        "Running sensitivity analysis"
    );
    let output = execute(input)?;
    if let Some(top) = output.ranking.first() {
        info!(factor = %top.factor, coefficient = top.coefficient, "Most influential factor");
    }
    super::emit(&output, compact)
}
