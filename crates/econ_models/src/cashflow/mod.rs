//! Cash-flow based investment appraisal.
//!
//! A cash-flow series is indexed by period `t = 0..n`; period 0 normally
//! holds the (negative) initial outlay.
//!
//! - [`discount`]: present value and discount factors
//! - [`irr`]: internal rate of return by bisection over `[-99%, 1000%]`
//! - [`payback`]: discounted payback period with linear interpolation
//! - [`appraisal`]: feasibility, 0-100 score and the combined report

pub mod appraisal;
pub mod discount;
pub mod irr;
pub mod payback;

mod series;

pub use appraisal::{
    appraise, appraise_with_config, investment_score, is_feasible, InvestmentAppraisal,
};
pub use discount::{discount_factor, discounted_flows, present_value};
pub use irr::{has_sign_change, irr, irr_with_config, IRR_LOWER_BOUND, IRR_UPPER_BOUND};
pub use payback::{discounted_payback, simple_payback};
pub use series::CashFlowSeries;
