//! IFPUG function points.
//!
//! Unadjusted function points (UFP) weight the count of each base
//! functional component by its complexity:
//!
//! | Type | Low | Medium | High |
//! |------|-----|--------|------|
//! | ILF  | 7   | 10     | 15   |
//! | EIF  | 5   | 7      | 10   |
//! | EI   | 3   | 4      | 6    |
//! | EO   | 4   | 5      | 7    |
//! | EQ   | 3   | 4      | 6    |
//!
//! NESMA uses the same table, so a NESMA count only needs a different
//! [`WeightTable`] when a local calibration applies.
//!
//! The adjusted size is `UFP × VAF` with `VAF = 0.65 + 0.01 × GSC`, where GSC
//! is the sum of the 14 general system characteristics (each 0-5).

use super::clamp_count;
use econ_core::math::rounding::round_money;

/// Upper bound of the GSC total: 14 characteristics rated 0-5.
pub const MAX_GSC_TOTAL: f64 = 70.0;

/// GSC total of an "average" system; yields a VAF of 1.0.
pub const DEFAULT_GSC_TOTAL: f64 = 35.0;

/// Base functional component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum FunctionType {
    /// Internal logical file.
    Ilf,
    /// External interface file.
    Eif,
    /// External input.
    Ei,
    /// External output.
    Eo,
    /// External inquiry.
    Eq,
}

impl FunctionType {
    /// All component types in reporting order.
    pub const ALL: [FunctionType; 5] = [
        FunctionType::Ilf,
        FunctionType::Eif,
        FunctionType::Ei,
        FunctionType::Eo,
        FunctionType::Eq,
    ];
}

/// Number of components of one type at each complexity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComplexityCounts {
    /// Low-complexity components.
    pub low: f64,
    /// Average-complexity components.
    pub medium: f64,
    /// High-complexity components.
    pub high: f64,
}

impl ComplexityCounts {
    /// Counts at low, medium and high complexity.
    pub fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    fn clamped(&self) -> Self {
        Self {
            low: clamp_count(self.low),
            medium: clamp_count(self.medium),
            high: clamp_count(self.high),
        }
    }
}

/// Weight of one component type at each complexity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexityWeights {
    /// Weight of a low-complexity component.
    pub low: f64,
    /// Weight of an average-complexity component.
    pub medium: f64,
    /// Weight of a high-complexity component.
    pub high: f64,
}

impl ComplexityWeights {
    /// Weights at low, medium and high complexity.
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    fn apply(&self, counts: &ComplexityCounts) -> f64 {
        counts.low * clamp_count(self.low)
            + counts.medium * clamp_count(self.medium)
            + counts.high * clamp_count(self.high)
    }
}

/// Complexity weights for every component type.
///
/// `Default` is the IFPUG table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightTable {
    /// Internal logical files.
    pub ilf: ComplexityWeights,
    /// External interface files.
    pub eif: ComplexityWeights,
    /// External inputs.
    pub ei: ComplexityWeights,
    /// External outputs.
    pub eo: ComplexityWeights,
    /// External inquiries.
    pub eq: ComplexityWeights,
}

impl WeightTable {
    /// The IFPUG (and NESMA) weights.
    pub const IFPUG: WeightTable = WeightTable {
        ilf: ComplexityWeights::new(7.0, 10.0, 15.0),
        eif: ComplexityWeights::new(5.0, 7.0, 10.0),
        ei: ComplexityWeights::new(3.0, 4.0, 6.0),
        eo: ComplexityWeights::new(4.0, 5.0, 7.0),
        eq: ComplexityWeights::new(3.0, 4.0, 6.0),
    };

    /// Weights of one component type.
    pub fn weights(&self, function_type: FunctionType) -> &ComplexityWeights {
        match function_type {
            FunctionType::Ilf => &self.ilf,
            FunctionType::Eif => &self.eif,
            FunctionType::Ei => &self.ei,
            FunctionType::Eo => &self.eo,
            FunctionType::Eq => &self.eq,
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::IFPUG
    }
}

/// Component counts for every type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FunctionCounts {
    /// Internal logical files.
    pub ilf: ComplexityCounts,
    /// External interface files.
    pub eif: ComplexityCounts,
    /// External inputs.
    pub ei: ComplexityCounts,
    /// External outputs.
    pub eo: ComplexityCounts,
    /// External inquiries.
    pub eq: ComplexityCounts,
}

impl FunctionCounts {
    /// Counts of one component type.
    pub fn counts(&self, function_type: FunctionType) -> &ComplexityCounts {
        match function_type {
            FunctionType::Ilf => &self.ilf,
            FunctionType::Eif => &self.eif,
            FunctionType::Ei => &self.ei,
            FunctionType::Eo => &self.eo,
            FunctionType::Eq => &self.eq,
        }
    }
}

/// Input to [`measure_function_points`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FunctionPointInput {
    /// Component counts; missing types count as zero.
    pub counts: FunctionCounts,
    /// Defaults to [`WeightTable::IFPUG`].
    pub weights: WeightTable,
    /// Sum of the general system characteristics.
    pub gsc_total: f64,
}

impl Default for FunctionPointInput {
    fn default() -> Self {
        Self {
            counts: FunctionCounts::default(),
            weights: WeightTable::IFPUG,
            gsc_total: DEFAULT_GSC_TOTAL,
        }
    }
}

/// UFP contribution of one component type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FunctionPointDetail {
    /// Component type.
    pub function_type: FunctionType,
    /// Counts after clamping.
    pub counts: ComplexityCounts,
    /// Weighted count, rounded to 2 dp.
    pub ufp: f64,
}

/// Adjusted and unadjusted size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FunctionPointResult {
    /// One entry per [`FunctionType::ALL`], in that order.
    pub details: Vec<FunctionPointDetail>,
    /// Unadjusted function points, rounded to 2 dp.
    pub ufp: f64,
    /// GSC total after clamping to `[0, 70]`.
    pub gsc_total: f64,
    /// Value adjustment factor.
    pub vaf: f64,
    /// Adjusted function points, rounded to 2 dp.
    pub fp: f64,
}

/// `0.65 + 0.01 × GSC`, with GSC clamped to `[0, 70]` (non-finite as 0).
///
/// ```
/// use econ_models::sizing::value_adjustment_factor;
///
/// assert!((value_adjustment_factor(35.0) - 1.0).abs() < 1e-12);
/// assert!((value_adjustment_factor(500.0) - 1.35).abs() < 1e-12);
/// ```
pub fn value_adjustment_factor(gsc_total: f64) -> f64 {
    0.65 + 0.01 * clamp_gsc(gsc_total)
}

fn clamp_gsc(gsc_total: f64) -> f64 {
    clamp_count(gsc_total).min(MAX_GSC_TOTAL)
}

/// Compute UFP, VAF and adjusted FP.
///
/// Negative or non-finite counts and weights are treated as 0.
pub fn measure_function_points(input: &FunctionPointInput) -> FunctionPointResult {
    let details: Vec<FunctionPointDetail> = FunctionType::ALL
        .iter()
        .map(|&function_type| {
            let counts = input.counts.counts(function_type).clamped();
            let ufp = input.weights.weights(function_type).apply(&counts);
            FunctionPointDetail {
                function_type,
                counts,
                ufp: round_money(ufp),
            }
        })
        .collect();

    let ufp = round_money(details.iter().map(|d| d.ufp).sum());
    let gsc_total = clamp_gsc(input.gsc_total);
    let vaf = value_adjustment_factor(gsc_total);

    tracing::debug!(ufp, gsc_total, vaf, "function points measured");

    FunctionPointResult {
        details,
        ufp,
        gsc_total,
        vaf,
        fp: round_money(ufp * vaf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(gsc_total: f64) -> FunctionPointInput {
        // 7+10 + 5 + 2*3+4 + 4+5 + 3 = 44
        FunctionPointInput {
            counts: FunctionCounts {
                ilf: ComplexityCounts::new(1.0, 1.0, 0.0),
                eif: ComplexityCounts::new(1.0, 0.0, 0.0),
                ei: ComplexityCounts::new(2.0, 1.0, 0.0),
                eo: ComplexityCounts::new(1.0, 1.0, 0.0),
                eq: ComplexityCounts::new(1.0, 0.0, 0.0),
            },
            gsc_total,
            ..FunctionPointInput::default()
        }
    }

    #[test]
    fn test_average_system() {
        let result = measure_function_points(&sample(35.0));
        assert_eq!(result.ufp, 44.0);
        assert_relative_eq!(result.vaf, 1.0, epsilon = 1e-12);
        assert_eq!(result.fp, 44.0);
    }

    #[test]
    fn test_gsc_extremes() {
        assert_eq!(measure_function_points(&sample(70.0)).fp, 59.4);
        assert_eq!(measure_function_points(&sample(0.0)).fp, 28.6);
    }

    #[test]
    fn test_gsc_clamped() {
        let high = measure_function_points(&sample(120.0));
        assert_eq!(high.gsc_total, 70.0);
        assert_eq!(high.fp, 59.4);

        let low = measure_function_points(&sample(-10.0));
        assert_eq!(low.gsc_total, 0.0);
        assert_eq!(low.fp, 28.6);

        let nan = measure_function_points(&sample(f64::NAN));
        assert_eq!(nan.gsc_total, 0.0);
        assert_relative_eq!(nan.vaf, 0.65, epsilon = 1e-12);
    }

    #[test]
    fn test_details_per_type() {
        let result = measure_function_points(&sample(35.0));
        let types: Vec<FunctionType> = result.details.iter().map(|d| d.function_type).collect();
        assert_eq!(types, FunctionType::ALL.to_vec());

        let ufps: Vec<f64> = result.details.iter().map(|d| d.ufp).collect();
        assert_eq!(ufps, vec![17.0, 5.0, 10.0, 9.0, 3.0]);
    }

    #[test]
    fn test_counts_clamped() {
        let mut input = sample(35.0);
        input.counts.ilf = ComplexityCounts::new(-3.0, f64::INFINITY, f64::NAN);
        let result = measure_function_points(&input);

        assert_eq!(result.details[0].counts, ComplexityCounts::default());
        assert_eq!(result.details[0].ufp, 0.0);
        assert_eq!(result.ufp, 27.0);
    }

    #[test]
    fn test_custom_weights() {
        let mut input = sample(35.0);
        input.weights.ilf = ComplexityWeights::new(8.0, 12.0, 16.0);
        let result = measure_function_points(&input);
        assert_eq!(result.details[0].ufp, 20.0);
        assert_eq!(result.ufp, 47.0);
    }

    #[test]
    fn test_no_components() {
        let result = measure_function_points(&FunctionPointInput::default());
        assert_eq!(result.ufp, 0.0);
        assert_eq!(result.fp, 0.0);
        assert_eq!(result.details.len(), 5);
    }
}
