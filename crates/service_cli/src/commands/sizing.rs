//! COSMIC, MARK II and IFPUG sizing command implementations

use serde::Deserialize;
use tracing::info;

use econ_models::sizing::{
    measure_cosmic, measure_function_points, measure_markii, CosmicEntry, FunctionPointInput,
    MarkIITransaction,
};

use crate::Result;

/// COSMIC input document.
#[derive(Debug, Deserialize)]
pub struct CosmicInput {
    /// Functional process entries.
    pub entries: Vec<CosmicEntry>,
}

/// MARK II input document.
#[derive(Debug, Deserialize)]
pub struct MarkIIInput {
    /// Logical transactions.
    pub transactions: Vec<MarkIITransaction>,
}

/// Run the cosmic command
pub fn run_cosmic(path: &str, compact: bool) -> Result<()> {
    let input: CosmicInput = super::read_input(path)?;
    let result = measure_cosmic(&input.entries);
    info!(entries = input.entries.len(), cfp = result.cfp, "COSMIC size measured");
    super::emit(&result, compact)
}

/// Run the markii command
pub fn run_markii(path: &str, compact: bool) -> Result<()> {
    let input: MarkIIInput = super::read_input(path)?;
    let result = measure_markii(&input.transactions);
    info!(
        transactions = result.transaction_count,
        fp = result.total_fp,
        "MARK II size measured"
    );
    super::emit(&result, compact)
}

/// Run the function-points command
pub fn run_function_points(path: &str, compact: bool) -> Result<()> {
    let input: FunctionPointInput = super::read_input(path)?;
    let result = measure_function_points(&input);
    info!(ufp = result.ufp, vaf = result.vaf, fp = result.fp, "function points measured");
    super::emit(&result, compact)
}
