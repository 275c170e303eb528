//! Core error types.
//!
//! # Re-exports
//!
//! [`EngineError`] and [`SolverError`] are re-exported at this module level.

pub mod error;

pub use error::{EngineError, SolverError};
