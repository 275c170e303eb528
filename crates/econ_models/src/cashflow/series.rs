//! Owned cash-flow series.

use super::{discounted_payback, irr, present_value, simple_payback};

/// Ordered cash flows indexed by period `t = 0..n`.
///
/// A thin owned wrapper over `Vec<f64>` for callers that pass series
/// around as values; every method delegates to the free functions.
///
/// ```
/// use econ_models::cashflow::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-1_000.0, 600.0, 600.0]);
/// assert_eq!(series.npv(0.0), 200.0);
/// assert!(series.irr().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    /// Wrap a vector of flows.
    pub fn new(flows: Vec<f64>) -> Self {
        Self(flows)
    }

    /// Borrow the flows.
    pub fn flows(&self) -> &[f64] {
        &self.0
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series has no periods.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present value at `rate`.
    pub fn npv(&self, rate: f64) -> f64 {
        present_value(&self.0, rate)
    }

    /// Internal rate of return with default solver settings.
    pub fn irr(&self) -> Option<f64> {
        irr(&self.0)
    }

    /// Discounted payback period at `rate`.
    pub fn discounted_payback(&self, rate: f64) -> Option<f64> {
        discounted_payback(&self.0, rate)
    }

    /// Undiscounted payback period.
    pub fn simple_payback(&self) -> Option<f64> {
        simple_payback(&self.0)
    }
}

impl From<Vec<f64>> for CashFlowSeries {
    fn from(flows: Vec<f64>) -> Self {
        Self(flows)
    }
}
