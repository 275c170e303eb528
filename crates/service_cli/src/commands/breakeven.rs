//! Break-even command implementation

use serde::{Deserialize, Serialize};
use tracing::info;

use econ_models::breakeven::{breakeven, target_sales, BreakevenInput, BreakevenResult};

use crate::Result;

/// Input document: the break-even fields plus an optional profit target.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenCommandInput {
    /// Cost-volume-profit figures.
    #[serde(flatten)]
    pub figures: BreakevenInput,
    /// Profit to plan sales volume for.
    pub target_profit: Option<f64>,
}

/// Units needed for a profit target.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSales {
    /// Requested profit.
    pub profit: f64,
    /// Units needed; `None` with a non-positive contribution.
    pub quantity: Option<f64>,
}

/// Output document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenOutput {
    /// Break-even figures.
    #[serde(flatten)]
    pub result: BreakevenResult,
    /// Present when a target was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetSales>,
}

/// Compute the analysis.
pub fn execute(input: &BreakevenCommandInput) -> BreakevenOutput {
    BreakevenOutput {
        result: breakeven(&input.figures),
        target: input.target_profit.map(|profit| TargetSales {
            profit,
            quantity: target_sales(&input.figures, profit),
        }),
    }
}

/// Run the breakeven command
pub fn run(path: &str, compact: bool) -> Result<()> {
    let input: BreakevenCommandInput = super::read_input(path)?;
    info!("Running break-even analysis");
    super::emit(&execute(&input), compact)
}
