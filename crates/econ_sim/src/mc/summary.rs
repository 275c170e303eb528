//! Summary statistics over simulated outputs.

use econ_core::math::rounding::{round_money, to_percentage};

/// Distributional summary of one run.
///
/// `mean` and `std` are rounded to 2 dp; order statistics are reported as
/// drawn. Percentiles use nearest-rank indexing `floor(n·p)` on the sorted
/// samples, and `median` is the element at `n / 2`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationSummary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle sample.
    pub median: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// 5th percentile.
    pub p5: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
    /// Share of strictly positive samples, as a percentage.
    pub probability_positive: f64,
}

fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    let index = ((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1);
    sorted[index]
}

impl SimulationSummary {
    /// Summarise samples already sorted ascending. `None` when empty.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        if sorted.is_empty() {
            return None;
        }

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let positive = sorted.iter().filter(|&&x| x > 0.0).count() as f64;

        Some(Self {
            count: sorted.len(),
            mean: round_money(mean),
            median: sorted[sorted.len() / 2],
            std: round_money(variance.sqrt()),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            p5: nearest_rank(sorted, 0.05),
            p25: nearest_rank(sorted, 0.25),
            p75: nearest_rank(sorted, 0.75),
            p95: nearest_rank(sorted, 0.95),
            probability_positive: to_percentage(positive / n),
        })
    }

    /// Summarise samples in any order. `None` when empty.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_one_to_twenty() {
        let samples: Vec<f64> = (1..=20).rev().map(f64::from).collect();
        let summary = SimulationSummary::from_samples(&samples).unwrap();
        assert_eq!(summary.count, 20);
        assert_eq!(summary.mean, 10.5);
        // Index 10 of 1..=20
        assert_eq!(summary.median, 11.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 20.0);
        assert_eq!(summary.p5, 2.0);
        assert_eq!(summary.p25, 6.0);
        assert_eq!(summary.p75, 16.0);
        assert_eq!(summary.p95, 20.0);
        // sqrt((20^2 - 1) / 12)
        assert_eq!(summary.std, 5.77);
        assert_eq!(summary.probability_positive, 100.0);
    }

    #[test]
    fn test_probability_positive_excludes_zero() {
        let summary = SimulationSummary::from_samples(&[-1.0, 0.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.probability_positive, 50.0);
    }

    #[test]
    fn test_single_sample() {
        let summary = SimulationSummary::from_samples(&[-3.25]).unwrap();
        assert_eq!(summary.median, -3.25);
        assert_eq!(summary.p95, -3.25);
        assert_eq!(summary.std, 0.0);
    }

    #[test]
    fn test_empty() {
        assert!(SimulationSummary::from_samples(&[]).is_none());
    }

    proptest! {
        #[test]
        fn prop_constant_samples_collapse(k in -1_000i32..1_000, n in 1usize..500) {
            let k = f64::from(k) / 4.0;
            let summary = SimulationSummary::from_samples(&vec![k; n]).unwrap();
            for stat in [
                summary.mean, summary.median, summary.min, summary.max,
                summary.p5, summary.p25, summary.p75, summary.p95,
            ] {
                prop_assert_eq!(stat, k);
            }
            prop_assert_eq!(summary.std, 0.0);
        }

        #[test]
        fn prop_order_statistics_are_monotone(
            samples in prop::collection::vec(-1.0e6..1.0e6f64, 1..300),
        ) {
            let s = SimulationSummary::from_samples(&samples).unwrap();
            prop_assert!(s.min <= s.p5 && s.p5 <= s.p25 && s.p25 <= s.median);
            prop_assert!(s.median <= s.p75 && s.p75 <= s.p95 && s.p95 <= s.max);
        }
    }
}
