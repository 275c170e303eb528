//! One-factor-at-a-time sensitivity analysis.
//!
//! The baseline is the model evaluated with every factor at its base value.
//! Each requested percentage change is then applied to a single factor,
//! `base × (1 + pct / 100)`, with the others held at baseline.
//!
//! The coefficient of one perturbation is the elasticity-style ratio
//! `((output − baseline) / |baseline|) / (pct / 100)`, and is 0 when the
//! baseline or the change is 0. A factor's coefficient is the larger
//! magnitude of its strongest upward and strongest downward perturbation.

mod analysis;
mod factor;
mod rank;

pub use analysis::{analyse, sensitivity_coefficient, SensitivityReport};
pub use factor::{FactorResult, FactorValues, ImpactPoint, SensitivityFactor};
pub use rank::rank_by_sensitivity;
