//! Engine configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed `ECONLAB_` with `__` between nested keys,
//! e.g. `ECONLAB_MONTE_CARLO__ITERATIONS=5000`.

use crate::{CliError, Result};
use econ_core::math::solvers::SolverConfig;
use econ_sim::mc::MAX_ITERATIONS;
use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default tracing level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Discount rate used when an input document omits one.
    pub discount_rate: f64,
    /// Hurdle rate for the investment score.
    pub min_irr: f64,
    /// Hurwicz optimism coefficient used when a decision input omits one.
    pub hurwicz_alpha: f64,
    /// IRR solver settings.
    pub solver: SolverSettings,
    /// Monte Carlo settings.
    pub monte_carlo: MonteCarloSettings,
}

/// IRR solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Stop once `|NPV| < tolerance`.
    pub tolerance: f64,
    /// Bisection step limit.
    pub max_iterations: usize,
}

/// Monte Carlo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Trials per run when the input omits a count.
    pub iterations: usize,
    /// Fixed seed; entropy when unset.
    pub seed: Option<u64>,
    /// Shard trials across threads.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            discount_rate: 0.10,
            min_irr: 0.10,
            hurwicz_alpha: 0.5,
            solver: SolverSettings::default(),
            monte_carlo: MonteCarloSettings::default(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            iterations: 1_000,
            seed: None,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Load from `path` (missing file allowed) and the environment.
    ///
    /// # Errors
    ///
    /// [`CliError::Config`] when a source cannot be parsed into the
    /// expected types.
    pub fn load(path: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ECONLAB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(CliError::InvalidConfig(message));

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return invalid(format!(
                "log_level '{}' is not one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return invalid(format!(
                "discount_rate {} must be finite and above -1",
                self.discount_rate
            ));
        }
        if !self.min_irr.is_finite() {
            return invalid(format!("min_irr {} must be finite", self.min_irr));
        }
        if !(0.0..=1.0).contains(&self.hurwicz_alpha) {
            return invalid(format!(
                "hurwicz_alpha {} outside [0, 1]",
                self.hurwicz_alpha
            ));
        }
        if !(self.solver.tolerance > 0.0 && self.solver.tolerance.is_finite()) {
            return invalid(format!(
                "solver.tolerance {} must be positive",
                self.solver.tolerance
            ));
        }
        if self.solver.max_iterations == 0 {
            return invalid("solver.max_iterations must be at least 1".to_string());
        }
        if !(1..=MAX_ITERATIONS).contains(&self.monte_carlo.iterations) {
            return invalid(format!(
                "monte_carlo.iterations {} outside [1, {MAX_ITERATIONS}]",
                self.monte_carlo.iterations
            ));
        }
        Ok(())
    }

    /// Solver settings in engine form. Call after [`EngineConfig::validate`].
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig::new(self.solver.tolerance, self.solver.max_iterations)
    }
}
