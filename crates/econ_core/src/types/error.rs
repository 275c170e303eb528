//! Error types for structured error handling.
//!
//! This module provides:
//! - `EngineError`: malformed calculator input that indicates a caller bug
//! - `SolverError`: errors from root-finding solvers
//!
//! Financially meaningful "no answer" outcomes (no IRR, payback never reached,
//! no price overlap in an auction) are not errors; calculators return `None`
//! for those.

use thiserror::Error;

/// Malformed input rejected by a calculator.
///
/// These cover inputs the engine refuses to self-heal: a ragged payoff
/// matrix has no sensible interpretation, and neither does a triangular
/// distribution whose mode lies outside its range.
///
/// # Examples
/// ```
/// use econ_core::types::EngineError;
///
/// let err = EngineError::RaggedMatrix { row: 2, expected: 3, got: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Ragged payoff matrix: row 2 has 2 columns, expected 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Payoff matrix with no rows or no columns.
    #[error("Payoff matrix must have at least one alternative and one state")]
    EmptyMatrix,

    /// Payoff matrix rows of unequal length.
    #[error("Ragged payoff matrix: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        got: usize,
    },

    /// Label list does not match the matrix dimension it names.
    #[error("Label mismatch for {axis}: {labels} labels for {expected} entries")]
    LabelMismatch {
        /// Which axis the labels belong to ("alternatives" or "states")
        axis: &'static str,
        /// Number of labels supplied
        labels: usize,
        /// Number of rows or columns in the matrix
        expected: usize,
    },

    /// Distribution parameters that cannot be sampled.
    #[error("Invalid distribution '{name}': {reason}")]
    InvalidDistribution {
        /// Variable name of the distribution
        name: String,
        /// What is wrong with the parameters
        reason: String,
    },
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidDistribution`].
    pub fn distribution(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Root-finding solver errors.
///
/// # Variants
/// - `InvalidBracket`: bracket endpoints are non-finite or not ordered
///
/// Running out of iterations is not an error for the bisection solver;
/// it reports the midpoint of the final bracket with `converged == false`.
///
/// # Examples
/// ```
/// use econ_core::types::SolverError;
///
/// let err = SolverError::InvalidBracket { low: 2.0, high: 1.0 };
/// assert!(format!("{}", err).contains("[2, 1]"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Bracket is not a finite interval with `low < high`.
    #[error("Invalid bracket [{low}, {high}]")]
    InvalidBracket {
        /// Lower endpoint
        low: f64,
        /// Upper endpoint
        high: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        assert_eq!(
            EngineError::EmptyMatrix.to_string(),
            "Payoff matrix must have at least one alternative and one state"
        );

        let err = EngineError::LabelMismatch {
            axis: "states",
            labels: 2,
            expected: 3,
        };
        assert!(err.to_string().contains("states"));
        assert!(err.to_string().contains("2 labels for 3 entries"));
    }

    #[test]
    fn test_distribution_shorthand() {
        let err = EngineError::distribution("cost", "mode 40 outside [25, 35]");
        assert_eq!(
            err,
            EngineError::InvalidDistribution {
                name: "cost".to_string(),
                reason: "mode 40 outside [25, 35]".to_string(),
            }
        );
        assert!(err.to_string().starts_with("Invalid distribution 'cost'"));
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::InvalidBracket {
            low: 1.0,
            high: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid bracket [1, -1]");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EngineError::EmptyMatrix);
        assert_error(&SolverError::InvalidBracket { low: 0.0, high: 0.0 });
    }
}
