//! Earned-value command implementation

use serde::Deserialize;
use tracing::info;

use econ_models::earned_value::{analyse, Phase};

use crate::Result;

/// Input document.
#[derive(Debug, Deserialize)]
pub struct EarnedValueInput {
    /// Project phases in order.
    pub phases: Vec<Phase>,
}

/// Run the earned-value command
pub fn run(path: &str, compact: bool) -> Result<()> {
    let input: EarnedValueInput = super::read_input(path)?;
    info!(phases = input.phases.len(), "Running earned value analysis");
    super::emit(&analyse(&input.phases), compact)
}
