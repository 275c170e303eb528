//! # econ_sim: Monte Carlo Simulation (L3)
//!
//! Draws independent samples of named input variables, feeds each trial to a
//! caller-supplied payoff function and summarises the resulting outputs.
//!
//! ## Module Structure
//!
//! - [`rng`]: seedable generator with seed tracking
//! - [`distribution`]: normal, uniform and triangular input variables
//! - [`mc`]: configuration, simulator and summary statistics
//!
//! ## Reproducibility
//!
//! Randomness is never global. Every run draws from a [`rng::SimRng`] that
//! is either seeded from the configuration or passed in by the caller, so
//! the same seed always reproduces the same samples.
//!
//! ## Usage Example
//!
//! ```rust
//! use econ_sim::distribution::DistributionSpec;
//! use econ_sim::mc::{MonteCarloSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .iterations(2_000)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let variables = vec![
//!     DistributionSpec::uniform("units", 800.0, 1_200.0),
//!     DistributionSpec::triangular("price", 45.0, 50.0, 60.0),
//! ];
//! let simulator = MonteCarloSimulator::new(config, variables).unwrap();
//!
//! let result = simulator.run(|v| v["units"] * (v["price"] - 30.0) - 10_000.0);
//! assert!(result.summary.min > 0.0);
//! assert!(result.summary.p5 <= result.summary.p95);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialisation of specs and summaries
//! - `parallel` (default): rayon-sharded [`mc::MonteCarloSimulator::run_parallel`]

#![deny(missing_docs)]

pub mod distribution;
pub mod mc;
pub mod rng;
