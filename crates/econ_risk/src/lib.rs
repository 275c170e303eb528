//! # econ_risk: Sensitivity Analysis (L4)
//!
//! Perturbs each input factor of a scalar model in isolation and ranks the
//! factors by how strongly the output responds.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              econ_risk (L4)                  │
//! ├──────────────────────────────────────────────┤
//! │  sensitivity/  - SensitivityFactor,          │
//! │                  analyse, rank_by_sensitivity│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use econ_risk::sensitivity::{analyse, rank_by_sensitivity, FactorValues, SensitivityFactor};
//!
//! let factors = vec![
//!     SensitivityFactor::new("price", 50.0, vec![-10.0, 10.0]),
//!     SensitivityFactor::new("units", 1_000.0, vec![-10.0, 10.0]),
//! ];
//! let profit = |v: &FactorValues| v["units"] * (v["price"] - 30.0) - 10_000.0;
//!
//! let ranked = rank_by_sensitivity(analyse(&factors, profit).factors);
//! assert_eq!(ranked[0].factor, "price");
//! ```

#![deny(missing_docs)]

pub mod sensitivity;
