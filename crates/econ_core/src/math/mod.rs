//! Mathematical building blocks.
//!
//! - [`solvers`]: bracketing root finder with shared configuration
//! - [`rounding`]: the single presentation rounding rule used across calculators

pub mod rounding;
pub mod solvers;
