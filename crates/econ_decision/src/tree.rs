//! Decision-tree evaluation.
//!
//! The tree is folded bottom-up into an expected discounted value and the
//! probability of ending on a loss-making outcome. An outcome at depth `d`
//! below the root is discounted by `(1 + rate)^d`.
//!
//! # Node Semantics
//!
//! - **Outcome**: discounted value; risk is 1 when that value is negative.
//! - **Chance**: probability-weighted sum of the children after
//!   [`normalize_probabilities`].
//! - **Decision**: the child with the greatest value, carrying its risk.
//!   When every direct child declares a non-negative probability the node
//!   is folded as a chance node instead. Only direct children are checked.
//!
//! Childless decision and chance nodes are worth `(0, 0)`.

use econ_core::math::rounding::{round_money, to_percentage};
use tracing::{debug, trace};

/// A node in a decision tree. Owns its children.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeNode {
    /// Identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Probability of reaching this node from a chance parent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub probability: Option<f64>,
    /// Node variant.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: NodeKind,
}

/// Decision, chance or outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum NodeKind {
    /// The decision maker picks a branch.
    Decision {
        /// Alternatives.
        #[cfg_attr(feature = "serde", serde(default))]
        children: Vec<TreeNode>,
    },
    /// Nature picks a branch.
    Chance {
        /// Possible events.
        #[cfg_attr(feature = "serde", serde(default))]
        children: Vec<TreeNode>,
    },
    /// Terminal payoff.
    Outcome {
        /// Undiscounted monetary value.
        #[cfg_attr(feature = "serde", serde(default))]
        value: f64,
    },
}

impl TreeNode {
    /// Create a decision node.
    pub fn decision(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::with_kind(name, NodeKind::Decision { children })
    }

    /// Create a chance node.
    pub fn chance(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::with_kind(name, NodeKind::Chance { children })
    }

    /// Create an outcome node.
    pub fn outcome(name: impl Into<String>, value: f64) -> Self {
        Self::with_kind(name, NodeKind::Outcome { value })
    }

    fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            probability: None,
            kind,
        }
    }

    /// Attach a branch probability.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// Children of a decision or chance node; empty for an outcome.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Decision { children } | NodeKind::Chance { children } => children,
            NodeKind::Outcome { .. } => &[],
        }
    }

    fn declared_probability(&self) -> Option<f64> {
        self.probability.filter(|p| *p >= 0.0)
    }
}

/// Recommendation derived from the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Recommendation {
    /// Positive expected NPV.
    Feasible,
    /// Expected NPV zero or negative.
    Infeasible,
}

/// Raw fold result for a subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeValue {
    /// Expected discounted value.
    pub value: f64,
    /// Probability of a negative discounted outcome, in `[0, 1]`.
    pub risk: f64,
}

/// Presentation result for a whole tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeEvaluation {
    /// Expected NPV, rounded to 2 dp.
    pub enpv: f64,
    /// Loss probability as a percentage, rounded to 2 dp.
    pub risk_probability: f64,
    /// Feasible when the rounded ENPV is positive.
    pub recommendation: Recommendation,
}

/// Turn optional branch probabilities into weights summing to 1.
///
/// Declared values `>= 0` are used as given. Missing, negative or NaN values
/// share the unallocated mass `max(0, 1 − Σ declared)` evenly. The vector
/// is then rescaled to sum to 1; if its sum is not positive every branch
/// gets an equal share.
///
/// ```
/// use econ_decision::tree::normalize_probabilities;
///
/// let weights = normalize_probabilities(&[Some(0.3), None, None]);
/// assert!((weights[1] - 0.35).abs() < 1e-12);
/// assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn normalize_probabilities(declared: &[Option<f64>]) -> Vec<f64> {
    if declared.is_empty() {
        return Vec::new();
    }

    let declared: Vec<Option<f64>> = declared
        .iter()
        .map(|p| p.filter(|p| *p >= 0.0))
        .collect();
    let declared_sum: f64 = declared.iter().flatten().sum();
    let missing = declared.iter().filter(|p| p.is_none()).count();

    let share = if missing > 0 {
        (1.0 - declared_sum).max(0.0) / missing as f64
    } else {
        0.0
    };
    let raw: Vec<f64> = declared.iter().map(|p| p.unwrap_or(share)).collect();

    let total: f64 = raw.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        debug!(
            branches = raw.len(),
            "tree: no usable probability mass, using uniform weights"
        );
        let uniform = 1.0 / raw.len() as f64;
        return vec![uniform; raw.len()];
    }
    if (total - 1.0).abs() > f64::EPSILON {
        trace!(total, "tree: rescaling branch probabilities");
    }
    raw.into_iter().map(|p| p / total).collect()
}

fn weighted_fold(children: &[TreeNode], rate: f64, depth: i32) -> NodeValue {
    let declared: Vec<Option<f64>> = children.iter().map(|c| c.probability).collect();
    let weights = normalize_probabilities(&declared);

    children
        .iter()
        .zip(weights)
        .fold(NodeValue { value: 0.0, risk: 0.0 }, |acc, (child, weight)| {
            let child_value = fold_node(child, rate, depth + 1);
            NodeValue {
                value: acc.value + child_value.value * weight,
                risk: acc.risk + child_value.risk * weight,
            }
        })
}

fn fold_node(node: &TreeNode, rate: f64, depth: i32) -> NodeValue {
    match &node.kind {
        NodeKind::Outcome { value } => {
            let discounted = value / (1.0 + rate).powi(depth);
            NodeValue {
                value: discounted,
                risk: if discounted < 0.0 { 1.0 } else { 0.0 },
            }
        }
        NodeKind::Decision { children } | NodeKind::Chance { children }
            if children.is_empty() =>
        {
            NodeValue {
                value: 0.0,
                risk: 0.0,
            }
        }
        NodeKind::Chance { children } => weighted_fold(children, rate, depth),
        NodeKind::Decision { children } => {
            if children.iter().all(|c| c.declared_probability().is_some()) {
                trace!(node = %node.id, "tree: decision node folded as chance node");
                return weighted_fold(children, rate, depth);
            }

            let mut values = children.iter().map(|c| fold_node(c, rate, depth + 1));
            let first = values.next().unwrap_or(NodeValue {
                value: 0.0,
                risk: 0.0,
            });
            values.fold(first, |best, candidate| {
                if candidate.value > best.value {
                    candidate
                } else {
                    best
                }
            })
        }
    }
}

/// Fold a subtree rooted at depth 0 without rounding.
pub fn expected_value(root: &TreeNode, rate: f64) -> NodeValue {
    fold_node(root, rate, 0)
}

/// Evaluate a tree at an annual discount rate.
///
/// # Examples
///
/// ```
/// use econ_decision::tree::{evaluate_tree, Recommendation, TreeNode};
///
/// let root = TreeNode::chance(
///     "launch",
///     vec![
///         TreeNode::outcome("strong demand", 110.0).with_probability(0.6),
///         TreeNode::outcome("weak demand", -55.0).with_probability(0.4),
///     ],
/// );
/// let evaluation = evaluate_tree(&root, 0.1);
/// assert_eq!(evaluation.enpv, 40.0);
/// assert_eq!(evaluation.risk_probability, 40.0);
/// assert_eq!(evaluation.recommendation, Recommendation::Feasible);
/// ```
pub fn evaluate_tree(root: &TreeNode, rate: f64) -> TreeEvaluation {
    let NodeValue { value, risk } = expected_value(root, rate);
    let enpv = round_money(value);
    debug!(enpv, risk, rate, "tree: evaluated");

    TreeEvaluation {
        enpv,
        risk_probability: to_percentage(risk),
        recommendation: if enpv > 0.0 {
            Recommendation::Feasible
        } else {
            Recommendation::Infeasible
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_even_split() {
        let weights = normalize_probabilities(&[Some(0.3), None, None]);
        assert_relative_eq!(weights[0], 0.3, epsilon = 1e-12);
        assert_relative_eq!(weights[1], 0.35, epsilon = 1e-12);
        assert_relative_eq!(weights[2], 0.35, epsilon = 1e-12);
        assert_relative_eq!(weights.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_over_allocated_rescales() {
        // 0.8 + 0.6 leaves nothing for the missing branch
        let weights = normalize_probabilities(&[Some(0.8), Some(0.6), None]);
        assert_relative_eq!(weights[0], 0.8 / 1.4, epsilon = 1e-12);
        assert_eq!(weights[2], 0.0);
    }

    #[test]
    fn test_normalize_all_missing_or_zero() {
        assert_eq!(normalize_probabilities(&[None, None]), vec![0.5, 0.5]);
        assert_eq!(normalize_probabilities(&[Some(0.0), Some(0.0)]), vec![0.5, 0.5]);
        assert!(normalize_probabilities(&[]).is_empty());
    }

    #[test]
    fn test_negative_probability_treated_as_missing() {
        let weights = normalize_probabilities(&[Some(-0.5), Some(0.5)]);
        assert_eq!(weights, vec![0.5, 0.5]);
    }

    #[test]
    fn test_outcome_discounted_by_depth() {
        let root = TreeNode::chance(
            "c",
            vec![TreeNode::chance("d", vec![TreeNode::outcome("o", 121.0)])],
        );
        assert_relative_eq!(expected_value(&root, 0.1).value, 100.0, epsilon = 1e-9);
        // The root itself is not discounted
        assert_eq!(expected_value(&TreeNode::outcome("o", -5.0), 0.1).value, -5.0);
    }

    #[test]
    fn test_decision_picks_best_child_and_its_risk() {
        let root = TreeNode::decision(
            "invest?",
            vec![
                TreeNode::chance(
                    "build",
                    vec![
                        TreeNode::outcome("boom", 1_000.0).with_probability(0.5),
                        TreeNode::outcome("bust", -200.0).with_probability(0.5),
                    ],
                ),
                TreeNode::outcome("wait", 0.0),
            ],
        );
        let folded = expected_value(&root, 0.0);
        assert_relative_eq!(folded.value, 400.0, epsilon = 1e-12);
        assert_relative_eq!(folded.risk, 0.5, epsilon = 1e-12);

        let evaluation = evaluate_tree(&root, 0.0);
        assert_eq!(evaluation.enpv, 400.0);
        assert_eq!(evaluation.risk_probability, 50.0);
    }

    #[test]
    fn test_decision_tie_keeps_first() {
        let root = TreeNode::decision(
            "pick",
            vec![
                TreeNode::chance("safe", vec![TreeNode::outcome("a", 10.0)]),
                TreeNode::chance(
                    "risky",
                    vec![
                        TreeNode::outcome("up", 30.0).with_probability(0.5),
                        TreeNode::outcome("down", -10.0).with_probability(0.5),
                    ],
                ),
            ],
        );
        let folded = expected_value(&root, 0.0);
        assert_eq!(folded.value, 10.0);
        assert_eq!(folded.risk, 0.0);
    }

    #[test]
    fn test_decision_with_all_probabilities_is_weighted() {
        let scenarios = TreeNode::decision(
            "scenarios",
            vec![
                TreeNode::outcome("good", 100.0).with_probability(0.25),
                TreeNode::outcome("bad", -20.0).with_probability(0.75),
            ],
        );
        let folded = expected_value(&scenarios, 0.0);
        assert_relative_eq!(folded.value, 10.0, epsilon = 1e-12);
        assert_relative_eq!(folded.risk, 0.75, epsilon = 1e-12);

        // One branch without a probability restores max-pick
        let mixed = TreeNode::decision(
            "mixed",
            vec![
                TreeNode::outcome("good", 100.0).with_probability(0.25),
                TreeNode::outcome("bad", -20.0),
            ],
        );
        assert_eq!(expected_value(&mixed, 0.0).value, 100.0);
    }

    #[test]
    fn test_rule_checks_direct_children_only() {
        // Direct children carry probabilities; grandchildren do not
        let root = TreeNode::decision(
            "root",
            vec![
                TreeNode::decision("x", vec![TreeNode::outcome("x1", 50.0)]).with_probability(0.5),
                TreeNode::decision("y", vec![TreeNode::outcome("y1", 150.0)]).with_probability(0.5),
            ],
        );
        assert_relative_eq!(expected_value(&root, 0.0).value, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_nodes() {
        assert_eq!(
            expected_value(&TreeNode::decision("d", vec![]), 0.1),
            NodeValue { value: 0.0, risk: 0.0 }
        );
        let evaluation = evaluate_tree(&TreeNode::chance("c", vec![]), 0.1);
        assert_eq!(evaluation.enpv, 0.0);
        assert_eq!(evaluation.recommendation, Recommendation::Infeasible);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_tagged_tree() {
        let json = r#"{
            "id": "root", "name": "launch", "type": "decision",
            "children": [
                {"id": "go", "name": "go", "type": "chance", "children": [
                    {"id": "hi", "name": "high", "type": "outcome", "value": 500, "probability": 0.4},
                    {"id": "lo", "name": "low", "type": "outcome", "value": -100}
                ]},
                {"id": "stop", "name": "stop", "type": "outcome", "value": 0}
            ]
        }"#;
        let root: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].children()[0].probability, Some(0.4));

        // go: (0.4*500 - 0.6*100) / 1.1^2
        let evaluation = evaluate_tree(&root, 0.1);
        assert_relative_eq!(evaluation.enpv, 115.70, epsilon = 1e-9);
        assert_eq!(evaluation.risk_probability, 60.0);
    }

    proptest! {
        #[test]
        fn prop_weights_sum_to_one(
            declared in prop::collection::vec(prop::option::of(-1.0..2.0f64), 1..12),
        ) {
            let weights = normalize_probabilities(&declared);
            prop_assert_eq!(weights.len(), declared.len());
            prop_assert!(weights.iter().all(|w| *w >= 0.0));
            prop_assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_risk_is_a_probability(
            values in prop::collection::vec(-1_000.0..1_000.0f64, 1..8),
            rate in 0.0..0.5f64,
        ) {
            let children = values
                .iter()
                .enumerate()
                .map(|(i, v)| TreeNode::outcome(format!("o{i}"), *v))
                .collect();
            let folded = expected_value(&TreeNode::chance("root", children), rate);
            prop_assert!(folded.risk >= 0.0 && folded.risk <= 1.0 + 1e-12);
        }
    }
}
