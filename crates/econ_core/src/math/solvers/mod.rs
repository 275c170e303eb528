//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: derivative-free bracketing search with bounded,
//!   deterministic iteration count
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-4)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use econ_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! let solver = BisectionSolver::new(SolverConfig::default());
//! let result = solver.find_root(|x: f64| x - 0.25, -1.0, 1.0).unwrap();
//! assert!(result.converged);
//! assert!((result.root - 0.25).abs() < 1e-4);
//! ```

mod bisection;
mod config;

pub use bisection::{BisectionResult, BisectionSolver};
pub use config::SolverConfig;
