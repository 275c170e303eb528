//! Investment feasibility and scoring.

use super::discount::present_value;
use super::irr::irr_with_config;
use super::payback::discounted_payback;
use econ_core::math::rounding::round_money;
use econ_core::math::solvers::SolverConfig;

/// Combined appraisal of one investment project.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InvestmentAppraisal {
    /// Net present value at the appraisal rate, rounded to 2 dp.
    pub npv: f64,
    /// Internal rate of return, if one exists.
    pub irr: Option<f64>,
    /// Discounted payback period in years, if the outlay is recovered.
    pub dpp: Option<f64>,
    /// Whether the project adds value (`npv > 0`).
    pub feasible: bool,
    /// Score in `0..=100`, see [`investment_score`].
    pub score: u32,
}

/// A project is feasible when its NPV is strictly positive.
#[inline]
pub fn is_feasible(npv: f64) -> bool {
    npv > 0.0
}

/// Score an investment out of 100.
///
/// | Metric | Points |
/// |--------|--------|
/// | NPV > 0 / > 10 000 / > 50 000 | 20 / +10 / +10 |
/// | IRR > min / > 1.5·min / > 2·min | 20 / +10 / +10 |
/// | DPP < 5 / < 3 years | 10 / +10 |
///
/// Absent IRR or DPP contribute nothing.
///
/// # Examples
///
/// ```
/// use econ_models::cashflow::investment_score;
///
/// assert_eq!(investment_score(60_000.0, Some(0.25), Some(2.0), 0.1), 100);
/// assert_eq!(investment_score(-1.0, None, None, 0.1), 0);
/// ```
pub fn investment_score(npv: f64, irr: Option<f64>, dpp: Option<f64>, min_irr: f64) -> u32 {
    let mut score = 0;

    if npv > 0.0 {
        score += 20;
    }
    if npv > 10_000.0 {
        score += 10;
    }
    if npv > 50_000.0 {
        score += 10;
    }

    if let Some(rate) = irr {
        if rate > min_irr {
            score += 20;
        }
        if rate > min_irr * 1.5 {
            score += 10;
        }
        if rate > min_irr * 2.0 {
            score += 10;
        }
    }

    if let Some(years) = dpp {
        if years < 5.0 {
            score += 10;
        }
        if years < 3.0 {
            score += 10;
        }
    }

    score
}

/// Appraise a cash-flow series at `rate` against a hurdle rate `min_irr`.
pub fn appraise(series: &[f64], rate: f64, min_irr: f64) -> InvestmentAppraisal {
    appraise_with_config(series, rate, min_irr, &SolverConfig::default())
}

/// [`appraise`] with explicit IRR solver settings.
pub fn appraise_with_config(
    series: &[f64],
    rate: f64,
    min_irr: f64,
    solver: &SolverConfig<f64>,
) -> InvestmentAppraisal {
    let npv = present_value(series, rate);
    let irr = irr_with_config(series, solver);
    let dpp = discounted_payback(series, rate);

    InvestmentAppraisal {
        npv: round_money(npv),
        irr,
        dpp,
        feasible: is_feasible(npv),
        score: investment_score(npv, irr, dpp, min_irr),
    }
}
