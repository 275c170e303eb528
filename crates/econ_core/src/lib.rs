//! # econ_core: Numerical Foundation for the Calculation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! econ_core is the bottom layer of the engine and provides:
//! - Bracketing root finder used by the rate solver (`math::solvers`)
//! - Presentation rounding shared by every calculator (`math::rounding`)
//! - Error types: `EngineError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other econ_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use econ_core::math::rounding::round_to;
//! use econ_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
//! let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//!
//! assert_eq!(round_to(2670.2845, 2), 2670.28);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;
