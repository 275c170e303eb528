//! Simulate command implementation
//!
//! Monte Carlo run of a built-in model over distributed inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use econ_sim::distribution::DistributionSpec;
use econ_sim::mc::{MonteCarloSimulator, SimulationConfig, SimulationSummary};

use crate::config::EngineConfig;
use crate::models::{BoundModel, BuiltinModel};
use crate::Result;

/// Input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateInput {
    /// Payoff model.
    pub model: BuiltinModel,
    /// Random inputs.
    pub variables: Vec<DistributionSpec>,
    /// Fixed inputs.
    #[serde(default)]
    pub constants: HashMap<String, f64>,
    /// Model parameter to variable name.
    #[serde(default)]
    pub bindings: HashMap<String, String>,
    /// Trial count; configured default when absent.
    pub iterations: Option<usize>,
    /// Seed; configured seed or entropy when absent.
    pub seed: Option<u64>,
    /// Shard across threads; configured default when absent.
    pub parallel: Option<bool>,
    /// Return every trial outcome as well as the summary.
    #[serde(default)]
    pub include_samples: bool,
}

/// Output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateOutput {
    /// Payoff model.
    pub model: BuiltinModel,
    /// Seed the run drew from; rerun with it to reproduce.
    pub seed: u64,
    /// Trial count.
    pub iterations: usize,
    /// Whether trials were sharded.
    pub parallel: bool,
    /// Distributional summary.
    pub summary: SimulationSummary,
    /// Sorted trial outcomes, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<f64>>,
}

/// Run the simulation.
///
/// # Errors
///
/// Invalid distributions, an out-of-range trial count, or a model
/// parameter with no variable or constant behind it.
pub fn execute(input: SimulateInput, config: &EngineConfig) -> Result<SimulateOutput> {
    let settings = SimulationConfig::builder()
        .iterations(input.iterations.unwrap_or(config.monte_carlo.iterations))
        .maybe_seed(input.seed.or(config.monte_carlo.seed))
        .build()?;
    let parallel = input.parallel.unwrap_or(config.monte_carlo.parallel);

    let model = BoundModel::new(
        input.model,
        input.constants,
        input.bindings,
        input.variables.iter().map(|v| v.name.as_str()),
    )?;
    let simulator = MonteCarloSimulator::new(settings, input.variables)?;

    let result = if parallel {
        simulator.run_parallel(|trial| model.evaluate(trial))
    } else {
        simulator.run(|trial| model.evaluate(trial))
    };

    Ok(SimulateOutput {
        model: model.model(),
        seed: result.seed,
        iterations: simulator.config().iterations(),
        parallel,
        summary: result.summary,
        samples: input.include_samples.then_some(result.samples),
    })
}

/// Run the simulate command
pub fn run(path: &str, compact: bool, config: &EngineConfig) -> Result<()> {
    let input: SimulateInput = super::read_input(path)?;
    info!(
        model = input.model.name(),
        variables = input.variables.len(),
        "Starting Monte Carlo simulation"
    );
    let output = execute(input, config)?;
    info!(
        seed = output.seed,
        mean = output.summary.mean,
        "Simulation complete"
    );
    super::emit(&output, compact)
}
