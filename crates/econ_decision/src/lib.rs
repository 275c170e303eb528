//! # econ_decision: Decisions Under Uncertainty (L2)
//!
//! - [`matrix`]: validated payoff matrix `[alternative][state]`
//! - [`criteria`]: maximin, maximax, Hurwicz, Laplace and minimax regret
//! - [`tree`]: expected-value folding of decision trees with discounting
//!
//! Ragged or empty matrices are rejected with
//! [`EngineError`](econ_core::types::EngineError) when the matrix is built;
//! every criterion after that is infallible.
//!
//! ## Example
//!
//! ```rust
//! use econ_decision::criteria::{maximin, minimax_regret};
//! use econ_decision::matrix::PayoffMatrix;
//!
//! let matrix = PayoffMatrix::new(vec![
//!     vec![80.0, 50.0, 30.0],
//!     vec![60.0, 70.0, 40.0],
//!     vec![40.0, 60.0, 80.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(maximin(&matrix).selected_index, 1);
//! assert_eq!(minimax_regret(&matrix).score, 40.0);
//! ```

#![deny(missing_docs)]

pub mod criteria;
pub mod matrix;
pub mod tree;

pub use criteria::{evaluate_all, DecisionMethod, DecisionResult};
pub use matrix::PayoffMatrix;
pub use tree::{evaluate_tree, NodeKind, Recommendation, TreeEvaluation, TreeNode};
