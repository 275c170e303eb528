//! Break-even (cost-volume-profit) analysis.
//!
//! All monetary outputs are rounded to 2 dp with
//! [`round_money`](econ_core::math::rounding::round_money). When the unit
//! contribution is not positive the product never breaks even, and every
//! quantity that depends on the break-even point is `None`.

use econ_core::math::rounding::round_money;

/// Inputs to a break-even analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BreakevenInput {
    /// Fixed cost for the period.
    pub fixed_cost: f64,
    /// Variable cost per unit.
    pub variable_cost: f64,
    /// Selling price per unit.
    pub unit_price: f64,
    /// Expected (normal) sales volume in units.
    pub normal_sales: f64,
}

/// Profit position at normal sales volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakevenStatus {
    /// Positive safety margin.
    Profit,
    /// Normal sales exactly at the break-even point.
    Breakeven,
    /// Negative safety margin, or no break-even point at all.
    Loss,
}

impl BreakevenStatus {
    /// Classify by safety-margin rate (percent); an absent rate is a loss.
    pub fn from_safety_margin_rate(rate: Option<f64>) -> Self {
        match rate {
            Some(r) if r > 0.0 => Self::Profit,
            Some(r) if r == 0.0 => Self::Breakeven,
            _ => Self::Loss,
        }
    }
}

/// Break-even figures, rounded to 2 dp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BreakevenResult {
    /// Units needed to cover fixed cost.
    pub breakeven_quantity: Option<f64>,
    /// Revenue needed to cover fixed cost.
    pub breakeven_sales: Option<f64>,
    /// Normal sales minus break-even quantity, in units.
    pub safety_margin: Option<f64>,
    /// Safety margin as a percentage of normal sales.
    pub safety_margin_rate: Option<f64>,
    /// Price minus variable cost.
    pub unit_contribution: f64,
    /// Unit contribution as a percentage of price (0 for a non-positive price).
    pub contribution_margin_rate: f64,
    /// Profit position derived from the safety-margin rate.
    pub status: BreakevenStatus,
}

/// Run the break-even analysis.
///
/// # Examples
///
/// ```
/// use econ_models::breakeven::{breakeven, BreakevenInput, BreakevenStatus};
///
/// let result = breakeven(&BreakevenInput {
///     fixed_cost: 100_000.0,
///     variable_cost: 30.0,
///     unit_price: 50.0,
///     normal_sales: 8_000.0,
/// });
/// assert_eq!(result.breakeven_quantity, Some(5_000.0));
/// assert_eq!(result.status, BreakevenStatus::Profit);
/// ```
pub fn breakeven(input: &BreakevenInput) -> BreakevenResult {
    let unit_contribution = input.unit_price - input.variable_cost;

    let contribution_margin_rate = if input.unit_price > 0.0 {
        unit_contribution / input.unit_price * 100.0
    } else {
        0.0
    };

    let breakeven_quantity =
        (unit_contribution > 0.0).then(|| input.fixed_cost / unit_contribution);

    let breakeven_sales = (contribution_margin_rate > 0.0)
        .then(|| input.fixed_cost / (contribution_margin_rate / 100.0));

    let safety_margin = breakeven_quantity.map(|quantity| input.normal_sales - quantity);

    let safety_margin_rate = safety_margin.map(|margin| {
        if input.normal_sales > 0.0 {
            margin / input.normal_sales * 100.0
        } else {
            0.0
        }
    });

    let safety_margin_rate = safety_margin_rate.map(round_money);

    BreakevenResult {
        breakeven_quantity: breakeven_quantity.map(round_money),
        breakeven_sales: breakeven_sales.map(round_money),
        safety_margin: safety_margin.map(round_money),
        safety_margin_rate,
        unit_contribution: round_money(unit_contribution),
        contribution_margin_rate: round_money(contribution_margin_rate),
        status: BreakevenStatus::from_safety_margin_rate(safety_margin_rate),
    }
}

/// Sales volume needed to earn `target_profit`.
///
/// `None` when the unit contribution is not positive.
///
/// ```
/// use econ_models::breakeven::{target_sales, BreakevenInput};
///
/// let input = BreakevenInput {
///     fixed_cost: 100_000.0,
///     variable_cost: 30.0,
///     unit_price: 50.0,
///     normal_sales: 8_000.0,
/// };
/// assert_eq!(target_sales(&input, 50_000.0), Some(7_500.0));
/// ```
pub fn target_sales(input: &BreakevenInput, target_profit: f64) -> Option<f64> {
    let unit_contribution = input.unit_price - input.variable_cost;
    (unit_contribution > 0.0).then(|| (input.fixed_cost + target_profit) / unit_contribution)
}
