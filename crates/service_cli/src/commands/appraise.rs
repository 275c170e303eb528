//! Appraise command implementation
//!
//! NPV, IRR, payback and score for one cash-flow series.

use serde::{Deserialize, Serialize};
use tracing::info;

use econ_models::cashflow::{
    appraise_with_config, discounted_flows, simple_payback, InvestmentAppraisal,
};

use crate::config::EngineConfig;
use crate::Result;

/// Input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraiseInput {
    /// Flows at `t = 0, 1, ...`.
    pub cash_flows: Vec<f64>,
    /// Discount rate; configured default when absent.
    pub rate: Option<f64>,
    /// Hurdle rate; configured default when absent.
    pub min_irr: Option<f64>,
}

/// Output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraiseOutput {
    /// Discount rate applied.
    pub rate: f64,
    /// Hurdle rate applied.
    pub min_irr: f64,
    /// Appraisal figures.
    #[serde(flatten)]
    pub appraisal: InvestmentAppraisal,
    /// Undiscounted payback period.
    pub simple_payback: Option<f64>,
    /// Present value of each flow.
    pub discounted_flows: Vec<f64>,
}

/// Compute the appraisal.
pub fn execute(input: &AppraiseInput, config: &EngineConfig) -> AppraiseOutput {
    let rate = input.rate.unwrap_or(config.discount_rate);
    let min_irr = input.min_irr.unwrap_or(config.min_irr);
    AppraiseOutput {
        rate,
        min_irr,
        appraisal: appraise_with_config(&input.cash_flows, rate, min_irr, &config.solver_config()),
        simple_payback: simple_payback(&input.cash_flows),
        discounted_flows: discounted_flows(&input.cash_flows, rate),
    }
}

/// Run the appraise command
pub fn run(path: &str, compact: bool, config: &EngineConfig) -> Result<()> {
    let input: AppraiseInput = super::read_input(path)?;
    info!(periods = input.cash_flows.len(), "Appraising investment");
    let output = execute(&input, config);
    info!(
        npv = output.appraisal.npv,
        score = output.appraisal.score,
        "Appraisal complete"
    );
    super::emit(&output, compact)
}
