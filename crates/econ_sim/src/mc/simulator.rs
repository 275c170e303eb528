//! Monte Carlo simulator.

use super::config::SimulationConfig;
use super::summary::SimulationSummary;
use crate::distribution::DistributionSpec;
use crate::rng::SimRng;
use econ_core::types::EngineError;
use std::collections::HashMap;
use tracing::debug;

/// Sampled value of every variable in one trial, keyed by name.
pub type Trial = HashMap<String, f64>;

/// Summary together with the sorted samples it was computed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationResult {
    /// Seed the run was drawn from.
    pub seed: u64,
    /// Distributional summary.
    pub summary: SimulationSummary,
    /// Payoff of every trial, ascending.
    pub samples: Vec<f64>,
}

/// Runs independent trials of a payoff function over random inputs.
///
/// # Examples
///
/// ```rust
/// use econ_sim::distribution::DistributionSpec;
/// use econ_sim::mc::{MonteCarloSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder().iterations(500).seed(1).build().unwrap();
/// let simulator =
///     MonteCarloSimulator::new(config, vec![DistributionSpec::normal("demand", 100.0, 15.0)])
///         .unwrap();
///
/// let first = simulator.run(|trial| trial["demand"] * 2.0);
/// let again = simulator.run(|trial| trial["demand"] * 2.0);
/// assert_eq!(first, again);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    config: SimulationConfig,
    variables: Vec<DistributionSpec>,
}

impl MonteCarloSimulator {
    /// Create a simulator after validating every variable.
    ///
    /// # Errors
    ///
    /// The first [`EngineError::InvalidDistribution`] found.
    pub fn new(
        config: SimulationConfig,
        variables: Vec<DistributionSpec>,
    ) -> Result<Self, EngineError> {
        for variable in &variables {
            variable.validate()?;
        }
        Ok(Self { config, variables })
    }

    /// Simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Input variables.
    #[inline]
    pub fn variables(&self) -> &[DistributionSpec] {
        &self.variables
    }

    fn base_rng(&self) -> SimRng {
        self.config
            .seed()
            .map_or_else(SimRng::from_entropy, SimRng::from_seed)
    }

    /// Run every trial on one thread with a generator seeded from the
    /// configuration (or from entropy when no seed is set).
    pub fn run<F>(&self, payoff: F) -> SimulationResult
    where
        F: Fn(&Trial) -> f64,
    {
        let mut rng = self.base_rng();
        self.run_with_rng(&mut rng, payoff)
    }

    /// Run every trial drawing from the supplied generator.
    pub fn run_with_rng<F>(&self, rng: &mut SimRng, payoff: F) -> SimulationResult
    where
        F: Fn(&Trial) -> f64,
    {
        debug!(
            iterations = self.config.iterations(),
            variables = self.variables.len(),
            seed = rng.seed(),
            "monte carlo: sequential run"
        );
        let samples = self.draw(rng, self.config.iterations(), &payoff);
        Self::finish(rng.seed(), samples)
    }

    /// Run trials in shards across the rayon pool.
    ///
    /// Shard `k` draws from its own generator seeded `seed + k`, so a fixed
    /// seed reproduces the same samples regardless of thread count. The
    /// sample set differs from [`MonteCarloSimulator::run`] with the same
    /// seed.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<F>(&self, payoff: F) -> SimulationResult
    where
        F: Fn(&Trial) -> f64 + Sync,
    {
        use rayon::prelude::*;

        let seed = self.base_rng().seed();
        let iterations = self.config.iterations();
        let shard_size = self.config.shard_size();
        let shards = iterations.div_ceil(shard_size);
        debug!(iterations, shards, seed, "monte carlo: sharded run");

        let samples: Vec<f64> = (0..shards)
            .into_par_iter()
            .map(|shard| {
                let start = shard * shard_size;
                let count = shard_size.min(iterations - start);
                let mut rng = SimRng::from_seed(seed.wrapping_add(shard as u64));
                self.draw(&mut rng, count, &payoff)
            })
            .flatten()
            .collect();

        Self::finish(seed, samples)
    }

    fn draw<F>(&self, rng: &mut SimRng, count: usize, payoff: &F) -> Vec<f64>
    where
        F: Fn(&Trial) -> f64,
    {
        let mut trial: Trial = self
            .variables
            .iter()
            .map(|v| (v.name.clone(), 0.0))
            .collect();
        let mut samples = Vec::with_capacity(count);

        for _ in 0..count {
            for variable in &self.variables {
                let value = variable.sample(rng);
                if let Some(slot) = trial.get_mut(&variable.name) {
                    *slot = value;
                }
            }
            samples.push(payoff(&trial));
        }
        samples
    }

    fn finish(seed: u64, mut samples: Vec<f64>) -> SimulationResult {
        samples.sort_by(f64::total_cmp);
        // Iteration count is validated to be at least 1
        let summary = SimulationSummary::from_sorted(&samples).unwrap_or_default();
        SimulationResult {
            seed,
            summary,
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::SimulationConfig;

    fn config(iterations: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .iterations(iterations)
            .seed(seed)
            .shard_size(64)
            .build()
            .unwrap()
    }

    #[test]
    fn test_constant_payoff() {
        for iterations in [1, 2, 17, 1_000] {
            let simulator = MonteCarloSimulator::new(
                config(iterations, 5),
                vec![DistributionSpec::normal("noise", 0.0, 100.0)],
            )
            .unwrap();
            let summary = simulator.run(|_| 12.5).summary;
            assert_eq!(summary.count, iterations);
            assert_eq!(summary.mean, 12.5);
            assert_eq!(summary.median, 12.5);
            assert_eq!(summary.min, 12.5);
            assert_eq!(summary.max, 12.5);
            assert_eq!(summary.p5, 12.5);
            assert_eq!(summary.p95, 12.5);
            assert_eq!(summary.std, 0.0);
            assert_eq!(summary.probability_positive, 100.0);
        }
    }

    #[test]
    fn test_seed_reproduces_run() {
        let variables = vec![
            DistributionSpec::uniform("a", 0.0, 1.0),
            DistributionSpec::triangular("b", -1.0, 0.0, 2.0),
        ];
        let simulator = MonteCarloSimulator::new(config(300, 99), variables).unwrap();
        let payoff = |t: &Trial| t["a"] + t["b"];
        let first = simulator.run(payoff);
        let second = simulator.run(payoff);
        assert_eq!(first.samples, second.samples);
        assert_eq!(first.seed, 99);
    }

    #[test]
    fn test_samples_sorted_and_counted() {
        let simulator = MonteCarloSimulator::new(
            config(257, 3),
            vec![DistributionSpec::uniform("x", -10.0, 10.0)],
        )
        .unwrap();
        let result = simulator.run(|t| t["x"]);
        assert_eq!(result.samples.len(), 257);
        assert!(result.samples.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.summary.min, result.samples[0]);
    }

    #[test]
    fn test_run_with_external_rng() {
        let simulator = MonteCarloSimulator::new(
            config(10, 0),
            vec![DistributionSpec::uniform("x", 0.0, 1.0)],
        )
        .unwrap();
        let mut a = SimRng::from_seed(77);
        let mut b = SimRng::from_seed(77);
        assert_eq!(
            simulator.run_with_rng(&mut a, |t| t["x"]),
            simulator.run_with_rng(&mut b, |t| t["x"])
        );
    }

    #[test]
    fn test_invalid_variable_rejected() {
        let err = MonteCarloSimulator::new(
            config(10, 0),
            vec![DistributionSpec::triangular("t", 5.0, 1.0, 3.0)],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidDistribution { .. }));
    }

    #[test]
    fn test_no_variables() {
        let simulator = MonteCarloSimulator::new(config(4, 0), Vec::new()).unwrap();
        let result = simulator.run(|t| t.len() as f64 - 1.0);
        assert_eq!(result.summary.mean, -1.0);
        assert_eq!(result.summary.probability_positive, 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_is_deterministic_and_complete() {
        let simulator = MonteCarloSimulator::new(
            config(1_000, 2024),
            vec![DistributionSpec::normal("x", 50.0, 5.0)],
        )
        .unwrap();
        let first = simulator.run_parallel(|t| t["x"]);
        let second = simulator.run_parallel(|t| t["x"]);
        assert_eq!(first.samples.len(), 1_000);
        assert_eq!(first, second);
        assert!((first.summary.mean - 50.0).abs() < 1.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_single_shard_matches_sequential() {
        // One shard seeded `seed + 0` draws exactly the sequential stream
        let config = SimulationConfig::builder()
            .iterations(100)
            .seed(8)
            .shard_size(100)
            .build()
            .unwrap();
        let simulator =
            MonteCarloSimulator::new(config, vec![DistributionSpec::uniform("x", 0.0, 1.0)])
                .unwrap();
        assert_eq!(
            simulator.run_parallel(|t| t["x"]),
            simulator.run(|t| t["x"])
        );
    }
}
