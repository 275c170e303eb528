//! Decision criteria over a [`PayoffMatrix`].
//!
//! Every criterion scores each alternative and selects one. Ties go to the
//! first alternative reaching the extremal score. Minimax regret selects the
//! smallest score; the other four select the largest.

use crate::matrix::PayoffMatrix;
use std::collections::BTreeMap;
use std::fmt;

/// Optimism coefficient used when none is supplied.
pub const DEFAULT_HURWICZ_ALPHA: f64 = 0.5;

/// Criterion identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecisionMethod {
    /// Wald: best worst case.
    #[cfg_attr(feature = "serde", serde(alias = "maxmin"))]
    Maximin,
    /// Optimistic: best best case.
    #[cfg_attr(feature = "serde", serde(alias = "maxmax"))]
    Maximax,
    /// Blend of best and worst case by an optimism coefficient.
    Hurwicz,
    /// Equal-probability average.
    Laplace,
    /// Savage: smallest worst-case regret.
    #[cfg_attr(feature = "serde", serde(alias = "minmaxregret"))]
    MinimaxRegret,
}

impl DecisionMethod {
    /// All criteria in bundling order.
    pub const ALL: [DecisionMethod; 5] = [
        Self::Maximin,
        Self::Maximax,
        Self::Hurwicz,
        Self::Laplace,
        Self::MinimaxRegret,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Maximin => "Maximin (Wald)",
            Self::Maximax => "Maximax (optimistic)",
            Self::Hurwicz => "Hurwicz",
            Self::Laplace => "Laplace (equal probability)",
            Self::MinimaxRegret => "Minimax regret (Savage)",
        }
    }
}

impl fmt::Display for DecisionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one criterion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DecisionResult {
    /// Criterion applied.
    pub method: DecisionMethod,
    /// Row index of the selected alternative.
    pub selected_index: usize,
    /// Label of the selected alternative.
    pub selected: String,
    /// Score of the selected alternative.
    pub score: f64,
    /// Score of every alternative, in row order.
    pub scores: Vec<f64>,
    /// Score keyed by alternative label. A repeated label keeps its last row.
    pub details: BTreeMap<String, f64>,
}

impl DecisionResult {
    fn select(
        method: DecisionMethod,
        matrix: &PayoffMatrix,
        scores: Vec<f64>,
        prefer_smaller: bool,
    ) -> Self {
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            let better = if prefer_smaller {
                score < scores[best]
            } else {
                score > scores[best]
            };
            if better {
                best = i;
            }
        }

        let details = matrix
            .alternatives()
            .iter()
            .cloned()
            .zip(scores.iter().copied())
            .collect();

        Self {
            method,
            selected_index: best,
            selected: matrix.alternatives()[best].clone(),
            score: scores[best],
            scores,
            details,
        }
    }
}

fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

fn row_max(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Wald criterion: score = row minimum, pick the greatest.
pub fn maximin(matrix: &PayoffMatrix) -> DecisionResult {
    let scores = matrix.rows().iter().map(|row| row_min(row)).collect();
    DecisionResult::select(DecisionMethod::Maximin, matrix, scores, false)
}

/// Optimistic criterion: score = row maximum, pick the greatest.
pub fn maximax(matrix: &PayoffMatrix) -> DecisionResult {
    let scores = matrix.rows().iter().map(|row| row_max(row)).collect();
    DecisionResult::select(DecisionMethod::Maximax, matrix, scores, false)
}

/// Hurwicz criterion: score = `α·max + (1 − α)·min`, pick the greatest.
///
/// `alpha` is clamped to `[0, 1]`; NaN falls back to
/// [`DEFAULT_HURWICZ_ALPHA`].
pub fn hurwicz(matrix: &PayoffMatrix, alpha: f64) -> DecisionResult {
    let alpha = if alpha.is_nan() {
        DEFAULT_HURWICZ_ALPHA
    } else {
        alpha.clamp(0.0, 1.0)
    };
    let scores = matrix
        .rows()
        .iter()
        .map(|row| alpha * row_max(row) + (1.0 - alpha) * row_min(row))
        .collect();
    DecisionResult::select(DecisionMethod::Hurwicz, matrix, scores, false)
}

/// Laplace criterion: score = row mean, pick the greatest.
pub fn laplace(matrix: &PayoffMatrix) -> DecisionResult {
    let states = matrix.state_count() as f64;
    let scores = matrix
        .rows()
        .iter()
        .map(|row| row.iter().sum::<f64>() / states)
        .collect();
    DecisionResult::select(DecisionMethod::Laplace, matrix, scores, false)
}

/// Opportunity loss `column max − payoff` for every cell.
///
/// ```
/// use econ_decision::criteria::regret_matrix;
/// use econ_decision::matrix::PayoffMatrix;
///
/// let matrix = PayoffMatrix::new(vec![vec![10.0, 0.0], vec![4.0, 6.0]]).unwrap();
/// assert_eq!(regret_matrix(&matrix), vec![vec![0.0, 6.0], vec![6.0, 0.0]]);
/// ```
pub fn regret_matrix(matrix: &PayoffMatrix) -> Vec<Vec<f64>> {
    let column_max = matrix.column_maxima();
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(&column_max)
                .map(|(payoff, best)| best - payoff)
                .collect()
        })
        .collect()
}

/// Savage criterion: score = worst regret in the row, pick the smallest.
///
/// The reported score is the (non-negative) maximum regret itself.
pub fn minimax_regret(matrix: &PayoffMatrix) -> DecisionResult {
    let scores = regret_matrix(matrix)
        .iter()
        .map(|row| row_max(row))
        .collect();
    DecisionResult::select(DecisionMethod::MinimaxRegret, matrix, scores, true)
}

/// Apply one criterion. `alpha` is only read by [`DecisionMethod::Hurwicz`].
pub fn evaluate(matrix: &PayoffMatrix, method: DecisionMethod, alpha: f64) -> DecisionResult {
    match method {
        DecisionMethod::Maximin => maximin(matrix),
        DecisionMethod::Maximax => maximax(matrix),
        DecisionMethod::Hurwicz => hurwicz(matrix, alpha),
        DecisionMethod::Laplace => laplace(matrix),
        DecisionMethod::MinimaxRegret => minimax_regret(matrix),
    }
}

/// Apply all five criteria in [`DecisionMethod::ALL`] order.
pub fn evaluate_all(matrix: &PayoffMatrix, alpha: f64) -> Vec<DecisionResult> {
    DecisionMethod::ALL
        .iter()
        .map(|&method| evaluate(matrix, method, alpha))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn classroom() -> PayoffMatrix {
        PayoffMatrix::new(vec![
            vec![80.0, 50.0, 30.0],
            vec![60.0, 70.0, 40.0],
            vec![40.0, 60.0, 80.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_maximin_tie_keeps_first() {
        // Row minima 30, 40, 40
        let result = maximin(&classroom());
        assert_eq!(result.scores, vec![30.0, 40.0, 40.0]);
        assert_eq!(result.selected_index, 1);
        assert_eq!(result.selected, "A2");
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_maximax_tie_keeps_first() {
        let result = maximax(&classroom());
        assert_eq!(result.scores, vec![80.0, 70.0, 80.0]);
        assert_eq!(result.selected_index, 0);
    }

    #[test]
    fn test_hurwicz() {
        let result = hurwicz(&classroom(), 0.5);
        assert_eq!(result.scores, vec![55.0, 55.0, 60.0]);
        assert_eq!(result.selected_index, 2);
    }

    #[test]
    fn test_hurwicz_extremes_match_wald_and_optimist() {
        let matrix = classroom();
        assert_eq!(hurwicz(&matrix, 0.0).scores, maximin(&matrix).scores);
        assert_eq!(hurwicz(&matrix, 1.0).scores, maximax(&matrix).scores);
        // Out-of-range coefficients are clamped
        assert_eq!(hurwicz(&matrix, 7.0).scores, maximax(&matrix).scores);
        assert_eq!(hurwicz(&matrix, -1.0).scores, maximin(&matrix).scores);
        assert_eq!(hurwicz(&matrix, f64::NAN).scores, vec![55.0, 55.0, 60.0]);
    }

    #[test]
    fn test_laplace() {
        let result = laplace(&classroom());
        assert_relative_eq!(result.scores[0], 160.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(result.score, 60.0, epsilon = 1e-12);
        assert_eq!(result.selected_index, 2);
    }

    #[test]
    fn test_regret_matrix_by_hand() {
        // Column maxima 80, 70, 80
        assert_eq!(
            regret_matrix(&classroom()),
            vec![
                vec![0.0, 20.0, 50.0],
                vec![20.0, 0.0, 40.0],
                vec![40.0, 10.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_minimax_regret_picks_smallest() {
        let result = minimax_regret(&classroom());
        assert_eq!(result.scores, vec![50.0, 40.0, 40.0]);
        assert_eq!(result.selected_index, 1);
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn test_evaluate_all_order() {
        let results = evaluate_all(&classroom(), 0.5);
        let methods: Vec<DecisionMethod> = results.iter().map(|r| r.method).collect();
        assert_eq!(methods, DecisionMethod::ALL.to_vec());
        assert_eq!(results[2], hurwicz(&classroom(), 0.5));
    }

    #[test]
    fn test_labels() {
        let matrix = PayoffMatrix::with_labels(
            vec!["bonds".into(), "stocks".into()],
            vec!["boom".into(), "bust".into()],
            vec![vec![5.0, 5.0], vec![20.0, -10.0]],
        )
        .unwrap();
        assert_eq!(maximin(&matrix).selected, "bonds");
        assert_eq!(maximax(&matrix).selected, "stocks");
        assert_eq!(DecisionMethod::MinimaxRegret.to_string(), "Minimax regret (Savage)");
    }

    #[test]
    fn test_details_keyed_by_label() {
        let matrix = PayoffMatrix::with_labels(
            vec!["small".into(), "medium".into(), "large".into()],
            vec!["low".into(), "mid".into(), "high".into()],
            classroom().rows().to_vec(),
        )
        .unwrap();
        let result = maximin(&matrix);
        assert_eq!(result.details.len(), 3);
        assert_eq!(result.details["small"], 30.0);
        assert_eq!(result.details["medium"], 40.0);
        assert_eq!(result.details[&result.selected], result.score);
    }

    fn matrix_strategy() -> impl Strategy<Value = PayoffMatrix> {
        (1usize..6, 1usize..6)
            .prop_flat_map(|(rows, cols)| {
                prop::collection::vec(prop::collection::vec(-1_000.0..1_000.0f64, cols), rows)
            })
            .prop_filter_map("valid matrix", |rows| PayoffMatrix::new(rows).ok())
    }

    proptest! {
        #[test]
        fn prop_regret_non_negative_with_zero_per_column(matrix in matrix_strategy()) {
            let regret = regret_matrix(&matrix);
            for j in 0..matrix.state_count() {
                prop_assert!(regret.iter().all(|row| row[j] >= 0.0));
                prop_assert!(regret.iter().any(|row| row[j] == 0.0));
            }
        }

        #[test]
        fn prop_hurwicz_between_wald_and_optimist(
            matrix in matrix_strategy(),
            alpha in 0.0..=1.0f64,
        ) {
            let low = maximin(&matrix).scores;
            let high = maximax(&matrix).scores;
            for (i, score) in hurwicz(&matrix, alpha).scores.iter().enumerate() {
                prop_assert!(*score >= low[i] - 1e-9 && *score <= high[i] + 1e-9);
            }
        }

        #[test]
        fn prop_selected_score_is_extremal(matrix in matrix_strategy()) {
            let best = maximin(&matrix);
            prop_assert!(best.scores.iter().all(|&s| s <= best.score));
            let regret = minimax_regret(&matrix);
            prop_assert!(regret.scores.iter().all(|&s| s >= regret.score));
        }
    }
}
