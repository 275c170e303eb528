//! Simulation configuration.

use super::error::ConfigError;

/// Upper bound on trials per run.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Trials per shard when none is configured.
pub const DEFAULT_SHARD_SIZE: usize = 1_024;

/// Validated simulation parameters. Build with [`SimulationConfig::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    iterations: usize,
    seed: Option<u64>,
    shard_size: usize,
}

impl SimulationConfig {
    /// Start a builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of trials.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Fixed seed, or `None` to draw one per run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Trials per shard in parallel runs.
    #[inline]
    pub fn shard_size(&self) -> usize {
        self.shard_size
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterationCount(self.iterations));
        }
        if self.shard_size == 0 {
            return Err(ConfigError::InvalidShardSize(self.shard_size));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    iterations: Option<usize>,
    seed: Option<u64>,
    shard_size: Option<usize>,
}

impl SimulationConfigBuilder {
    /// Number of trials (required).
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Fix the seed for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Optional seed, convenient when forwarding configuration.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Trials per shard in parallel runs.
    #[inline]
    pub fn shard_size(mut self, shard_size: usize) -> Self {
        self.shard_size = Some(shard_size);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let iterations = self.iterations.ok_or(ConfigError::InvalidParameter {
            name: "iterations",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            iterations,
            seed: self.seed,
            shard_size: self.shard_size.unwrap_or(DEFAULT_SHARD_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}
