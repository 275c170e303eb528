//! Error types for simulation configuration.

use thiserror::Error;

/// Configuration rejected by [`SimulationConfigBuilder::build`](super::SimulationConfigBuilder::build).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Iteration count outside `[1, MAX_ITERATIONS]`.
    #[error("Invalid iteration count {0}: must be in range [1, 1_000_000]")]
    InvalidIterationCount(usize),

    /// Shard size of zero.
    #[error("Invalid shard size {0}: must be at least 1")]
    InvalidShardSize(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
