//! MARK II function points.

use super::clamp_count;
use econ_core::math::rounding::round_money;

/// Weight per input data element.
pub const INPUT_WEIGHT: f64 = 0.58;
/// Weight per entity-type reference.
pub const ENTITY_WEIGHT: f64 = 1.66;
/// Weight per output data element.
pub const OUTPUT_WEIGHT: f64 = 0.26;

/// A logical transaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarkIITransaction {
    /// Identifier.
    pub id: String,
    /// Description.
    pub name: String,
    /// Input data elements (Ni).
    pub input_elements: f64,
    /// Entity-type references (Ne).
    pub entity_references: f64,
    /// Output data elements (No).
    pub output_elements: f64,
}

/// A transaction after clamping, with its size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarkIIDetail {
    /// Identifier.
    pub id: String,
    /// Description.
    pub name: String,
    /// Clamped Ni.
    pub input_elements: f64,
    /// Clamped Ne.
    pub entity_references: f64,
    /// Clamped No.
    pub output_elements: f64,
    /// Function points, rounded to 2 dp.
    pub fp: f64,
}

/// Totals over all transactions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarkIIResult {
    /// Number of transactions.
    pub transaction_count: usize,
    /// Sum of Ni.
    pub total_input_elements: f64,
    /// Sum of Ne.
    pub total_entity_references: f64,
    /// Sum of No.
    pub total_output_elements: f64,
    /// Sum of the per-transaction sizes, rounded to 2 dp.
    pub unadjusted_fp: f64,
    /// Equal to `unadjusted_fp`; no technical complexity adjustment is applied.
    pub total_fp: f64,
    /// Per-transaction breakdown, in input order.
    pub details: Vec<MarkIIDetail>,
}

/// Size a set of logical transactions: `0.58·Ni + 1.66·Ne + 0.26·No` each.
///
/// Negative or non-finite counts are treated as 0.
pub fn measure_markii(transactions: &[MarkIITransaction]) -> MarkIIResult {
    let details: Vec<MarkIIDetail> = transactions
        .iter()
        .map(|tx| {
            let input = clamp_count(tx.input_elements);
            let refs = clamp_count(tx.entity_references);
            let output = clamp_count(tx.output_elements);
            let fp = input * INPUT_WEIGHT + refs * ENTITY_WEIGHT + output * OUTPUT_WEIGHT;
            MarkIIDetail {
                id: tx.id.clone(),
                name: tx.name.clone(),
                input_elements: input,
                entity_references: refs,
                output_elements: output,
                fp: round_money(fp),
            }
        })
        .collect();

    let unadjusted_fp = round_money(details.iter().map(|d| d.fp).sum());

    MarkIIResult {
        transaction_count: details.len(),
        total_input_elements: details.iter().map(|d| d.input_elements).sum(),
        total_entity_references: details.iter().map(|d| d.entity_references).sum(),
        total_output_elements: details.iter().map(|d| d.output_elements).sum(),
        unadjusted_fp,
        total_fp: unadjusted_fp,
        details,
    }
}
