//! Monte Carlo simulation.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── SimulationConfig   (iterations, seed, shard size)
//! ├── DistributionSpec[] (one per input variable)
//! ├── SimRng             (seeded per run, or per shard)
//! └── SimulationSummary  (computed once from the sorted samples)
//! ```
//!
//! Trials are independent, so [`MonteCarloSimulator::run_parallel`] splits
//! them into fixed-size shards and concatenates the shard outputs before the
//! summary pass.

pub mod config;
pub mod error;
pub mod simulator;
pub mod summary;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_SHARD_SIZE, MAX_ITERATIONS};
pub use error::ConfigError;
pub use simulator::{MonteCarloSimulator, SimulationResult, Trial};
pub use summary::SimulationSummary;
