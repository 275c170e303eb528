//! Tree command implementation

use serde::{Deserialize, Serialize};
use tracing::info;

use econ_decision::{evaluate_tree, TreeEvaluation, TreeNode};

use crate::config::EngineConfig;
use crate::Result;

/// Input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeInput {
    /// Per-level discount rate; configured default when absent.
    #[serde(alias = "discountRate")]
    pub rate: Option<f64>,
    /// Root node.
    pub root: TreeNode,
}

/// Output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOutput {
    /// Rate applied.
    pub rate: f64,
    /// Evaluation of the root.
    #[serde(flatten)]
    pub evaluation: TreeEvaluation,
}

/// Fold the tree.
pub fn execute(input: &TreeInput, config: &EngineConfig) -> TreeOutput {
    let rate = input.rate.unwrap_or(config.discount_rate);
    TreeOutput {
        rate,
        evaluation: evaluate_tree(&input.root, rate),
    }
}

/// Run the tree command
pub fn run(path: &str, compact: bool, config: &EngineConfig) -> Result<()> {
    let input: TreeInput = super::read_input(path)?;
    info!("Evaluating decision tree");
    super::emit(&execute(&input, config), compact)
}
