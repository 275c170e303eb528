//! Decide command implementation
//!
//! Applies the decision criteria to a payoff matrix.

use serde::{Deserialize, Serialize};
use tracing::info;

use econ_decision::criteria::{evaluate, evaluate_all, regret_matrix};
use econ_decision::{DecisionMethod, DecisionResult, PayoffMatrix};

use crate::config::EngineConfig;
use crate::Result;

/// Input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideInput {
    /// Row labels; `A1..An` when empty.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// Column labels; `S1..Sm` when empty.
    #[serde(default)]
    pub states: Vec<String>,
    /// Payoffs indexed `[alternative][state]`.
    #[serde(alias = "payoffMatrix")]
    pub payoffs: Vec<Vec<f64>>,
    /// Hurwicz optimism coefficient; configured default when absent.
    pub alpha: Option<f64>,
    /// Single criterion to apply; all five when absent.
    pub method: Option<DecisionMethod>,
}

/// Output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecideOutput {
    /// Alternative labels, in row order.
    pub alternatives: Vec<String>,
    /// State labels, in column order.
    pub states: Vec<String>,
    /// Hurwicz coefficient applied.
    pub alpha: f64,
    /// Opportunity loss of each cell.
    pub regret_matrix: Vec<Vec<f64>>,
    /// One result per criterion.
    pub results: Vec<DecisionResult>,
}

/// Evaluate the matrix.
///
/// # Errors
///
/// An empty or ragged matrix, or labels that do not fit it.
pub fn execute(input: DecideInput, config: &EngineConfig) -> Result<DecideOutput> {
    let alpha = input.alpha.unwrap_or(config.hurwicz_alpha);
    let matrix = PayoffMatrix::with_labels(input.alternatives, input.states, input.payoffs)?;
    info!(
        alternatives = matrix.alternative_count(),
        states = matrix.state_count(),
        "Evaluating decision criteria"
    );

    let results = match input.method {
        Some(method) => vec![evaluate(&matrix, method, alpha)],
        None => evaluate_all(&matrix, alpha),
    };
    Ok(DecideOutput {
        alternatives: matrix.alternatives().to_vec(),
        states: matrix.states().to_vec(),
        alpha,
        regret_matrix: regret_matrix(&matrix),
        results,
    })
}

/// Run the decide command
pub fn run(path: &str, compact: bool, config: &EngineConfig) -> Result<()> {
    let input: DecideInput = super::read_input(path)?;
    let output = execute(input, config)?;
    for result in &output.results {
        info!(method = %result.method, selected = %result.selected, "Criterion applied");
    }
    super::emit(&output, compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use econ_core::types::EngineError;

    const PLANT: &str = r#"{
        "alternatives": ["large", "medium", "small"],
        "payoffMatrix": [[80, 50, 30], [60, 70, 40], [40, 60, 80]]
    }"#;

    #[test]
    fn test_all_criteria() {
        let input: DecideInput = serde_json::from_str(PLANT).unwrap();
        let output = execute(input, &EngineConfig::default()).unwrap();
        assert_eq!(output.results.len(), 5);
        assert_eq!(output.alpha, 0.5);
        assert_eq!(output.states, ["S1", "S2", "S3"]);
        assert_eq!(output.regret_matrix[0], vec![0.0, 20.0, 50.0]);

        let maximin = &output.results[0];
        assert_eq!(maximin.method, DecisionMethod::Maximin);
        assert_eq!(maximin.selected, "medium");
    }

    #[test]
    fn test_single_method() {
        let mut doc: serde_json::Value = serde_json::from_str(PLANT).unwrap();
        doc["method"] = "maximax".into();
        doc["alpha"] = 0.9.into();
        let input: DecideInput = serde_json::from_value(doc).unwrap();
        let output = execute(input, &EngineConfig::default()).unwrap();
        assert_eq!(output.alpha, 0.9);
        assert_eq!(output.results.len(), 1);
        assert_eq!(output.results[0].selected_index, 0);
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let input: DecideInput = serde_json::from_str(r#"{"payoffs": [[1, 2], [3]]}"#).unwrap();
        let err = execute(input, &EngineConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::RaggedMatrix { row: 1, .. })
        ));
    }
}
