//! Payoff matrix.

use econ_core::types::EngineError;

/// Payoffs indexed `[alternative][state]`.
///
/// Construction guarantees at least one alternative, at least one state,
/// rows of equal length and one label per row and per column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawPayoffMatrix")
)]
pub struct PayoffMatrix {
    alternatives: Vec<String>,
    states: Vec<String>,
    payoffs: Vec<Vec<f64>>,
}

/// Unvalidated wire form of [`PayoffMatrix`]; labels may be omitted.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayoffMatrix {
    #[serde(default)]
    alternatives: Vec<String>,
    #[serde(default)]
    states: Vec<String>,
    #[serde(alias = "payoffMatrix")]
    payoffs: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPayoffMatrix> for PayoffMatrix {
    type Error = EngineError;

    fn try_from(raw: RawPayoffMatrix) -> Result<Self, Self::Error> {
        Self::with_labels(raw.alternatives, raw.states, raw.payoffs)
    }
}

fn default_labels(prefix: char, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}")).collect()
}

impl PayoffMatrix {
    /// Build an unlabelled matrix; alternatives become `A1..An` and states
    /// `S1..Sm`.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyMatrix`] or [`EngineError::RaggedMatrix`].
    pub fn new(payoffs: Vec<Vec<f64>>) -> Result<Self, EngineError> {
        Self::with_labels(Vec::new(), Vec::new(), payoffs)
    }

    /// Build a labelled matrix. An empty label list falls back to the
    /// default names.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyMatrix`], [`EngineError::RaggedMatrix`], or
    /// [`EngineError::LabelMismatch`] when a non-empty label list has the
    /// wrong length.
    pub fn with_labels(
        alternatives: Vec<String>,
        states: Vec<String>,
        payoffs: Vec<Vec<f64>>,
    ) -> Result<Self, EngineError> {
        let expected = payoffs.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(EngineError::EmptyMatrix);
        }
        if let Some((row, got)) = payoffs
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(EngineError::RaggedMatrix { row, expected, got });
        }

        let alternatives = if alternatives.is_empty() {
            default_labels('A', payoffs.len())
        } else if alternatives.len() != payoffs.len() {
            return Err(EngineError::LabelMismatch {
                axis: "alternatives",
                labels: alternatives.len(),
                expected: payoffs.len(),
            });
        } else {
            alternatives
        };

        let states = if states.is_empty() {
            default_labels('S', expected)
        } else if states.len() != expected {
            return Err(EngineError::LabelMismatch {
                axis: "states",
                labels: states.len(),
                expected,
            });
        } else {
            states
        };

        Ok(Self {
            alternatives,
            states,
            payoffs,
        })
    }

    /// Alternative (row) labels.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// State (column) labels.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Payoff rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.payoffs
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.payoffs.len()
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Best payoff in each state column.
    pub fn column_maxima(&self) -> Vec<f64> {
        (0..self.state_count())
            .map(|j| {
                self.payoffs
                    .iter()
                    .map(|row| row[j])
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }
}
