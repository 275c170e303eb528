//! Parametric input distributions.
//!
//! - Normal: Box–Muller transform of two uniform draws
//! - Uniform: linear scaling of one draw into `[min, max]`
//! - Triangular: inverse-CDF sampling over `(min, mode, max)`

use crate::rng::SimRng;
use econ_core::types::EngineError;
use std::f64::consts::PI;

/// Distribution family and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "params", rename_all = "lowercase")
)]
pub enum DistributionKind {
    /// Normal with the given mean and standard deviation.
    Normal {
        /// Mean.
        mean: f64,
        /// Standard deviation, `>= 0`.
        std: f64,
    },
    /// Uniform over `[min, max]`.
    Uniform {
        /// Lower bound.
        min: f64,
        /// Upper bound, `>= min`.
        max: f64,
    },
    /// Triangular over `[min, max]` peaking at `mode`.
    Triangular {
        /// Lower bound.
        min: f64,
        /// Most likely value, within `[min, max]`.
        mode: f64,
        /// Upper bound.
        max: f64,
    },
}

/// A named random input variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionSpec {
    /// Variable name, as seen by the payoff function.
    pub name: String,
    /// Distribution of the variable.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: DistributionKind,
}

impl DistributionSpec {
    /// Normal variable.
    pub fn normal(name: impl Into<String>, mean: f64, std: f64) -> Self {
        Self {
            name: name.into(),
            kind: DistributionKind::Normal { mean, std },
        }
    }

    /// Uniform variable.
    pub fn uniform(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: DistributionKind::Uniform { min, max },
        }
    }

    /// Triangular variable.
    pub fn triangular(name: impl Into<String>, min: f64, mode: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            kind: DistributionKind::Triangular { min, mode, max },
        }
    }

    /// Check the parameters can be sampled.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDistribution`] for non-finite parameters, a
    /// negative standard deviation, `min > max`, or a triangular mode
    /// outside `[min, max]`.
    pub fn validate(&self) -> Result<(), EngineError> {
        let finite = match self.kind {
            DistributionKind::Normal { mean, std } => mean.is_finite() && std.is_finite(),
            DistributionKind::Uniform { min, max } => min.is_finite() && max.is_finite(),
            DistributionKind::Triangular { min, mode, max } => {
                min.is_finite() && mode.is_finite() && max.is_finite()
            }
        };
        if !finite {
            return Err(EngineError::distribution(
                &self.name,
                "parameters must be finite",
            ));
        }

        match self.kind {
            DistributionKind::Normal { std, .. } if std < 0.0 => Err(EngineError::distribution(
                &self.name,
                format!("standard deviation {std} is negative"),
            )),
            DistributionKind::Uniform { min, max } if min > max => Err(
                EngineError::distribution(&self.name, format!("min {min} exceeds max {max}")),
            ),
            DistributionKind::Triangular { min, mode, max } if !(min <= mode && mode <= max) => {
                Err(EngineError::distribution(
                    &self.name,
                    format!("mode {mode} outside [{min}, {max}]"),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Draw one value.
    ///
    /// Assumes [`DistributionSpec::validate`] has passed.
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        match self.kind {
            DistributionKind::Normal { mean, std } => {
                let u1 = rng.gen_open_uniform();
                let u2 = rng.gen_uniform();
                let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
                mean + z * std
            }
            DistributionKind::Uniform { min, max } => min + rng.gen_uniform() * (max - min),
            DistributionKind::Triangular { min, mode, max } => {
                let u = rng.gen_uniform();
                triangular_inverse_cdf(u, min, mode, max)
            }
        }
    }
}

/// Inverse CDF of the triangular distribution at `u ∈ [0, 1)`.
fn triangular_inverse_cdf(u: f64, min: f64, mode: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return min;
    }
    let split = (mode - min) / range;
    if u < split {
        min + (u * range * (mode - min)).sqrt()
    } else {
        max - ((1.0 - u) * range * (max - mode)).sqrt()
    }
}
