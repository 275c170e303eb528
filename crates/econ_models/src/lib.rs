//! # econ_models: Deterministic Calculators (L2)
//!
//! Pure functions over plain numeric inputs:
//!
//! - [`cashflow`]: present value, IRR, discounted payback, investment score
//! - [`breakeven`]: cost-volume-profit analysis and target sales
//! - [`auction`]: double-auction clearing with supply/demand curves
//! - [`earned_value`]: schedule and cost performance of project phases
//! - [`sizing`]: COSMIC, MARK II and IFPUG functional size measurement
//!
//! ## Absent Results
//!
//! Outcomes such as "no IRR exists" or "never paid back" are ordinary
//! answers and come back as `None`, never as errors.
//!
//! ## Example
//!
//! ```rust
//! use econ_models::cashflow::{irr, present_value};
//!
//! let flows = [-10_000.0, 3_000.0, 4_000.0, 5_000.0, 2_000.0];
//! let npv = present_value(&flows, 0.1);
//! assert!((npv - 1155.66).abs() < 0.01);
//!
//! let rate = irr(&flows).unwrap();
//! assert!(present_value(&flows, rate).abs() < 1e-4);
//!
//! assert!(irr(&[1_000.0, 2_000.0]).is_none());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` with camelCase field names

#![deny(missing_docs)]

pub mod auction;
pub mod breakeven;
pub mod cashflow;
pub mod earned_value;
pub mod sizing;
