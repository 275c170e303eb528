//! Functional size measurement.
//!
//! - [`cosmic`]: COSMIC data-movement counting (CFP)
//! - [`markii`]: MARK II logical-transaction function points
//! - [`ifpug`]: IFPUG/NESMA function points with value adjustment

pub mod cosmic;
pub mod ifpug;
pub mod markii;

pub use cosmic::{measure_cosmic, CosmicEntry, CosmicResult, DataMovement};
pub use ifpug::{
    measure_function_points, value_adjustment_factor, ComplexityCounts, ComplexityWeights,
    FunctionCounts, FunctionPointDetail, FunctionPointInput, FunctionPointResult, FunctionType,
    WeightTable,
};
pub use markii::{measure_markii, MarkIIDetail, MarkIIResult, MarkIITransaction};

/// Negative counts become 0, and so do NaN and infinities.
pub(crate) fn clamp_count(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
