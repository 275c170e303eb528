//! Earned value analysis.
//!
//! Ratios whose denominator is zero are reported as `0`. Forecasts that
//! depend on a zero cost-performance index are `None`.

/// Planned, earned and actual cost for one project phase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Phase {
    /// Phase name.
    pub name: String,
    /// Planned value.
    pub pv: f64,
    /// Earned value.
    pub ev: f64,
    /// Actual cost.
    pub ac: f64,
}

impl Phase {
    /// Create a phase.
    pub fn new(name: impl Into<String>, pv: f64, ev: f64, ac: f64) -> Self {
        Self {
            name: name.into(),
            pv,
            ev,
            ac,
        }
    }
}

/// Variances, indices and running totals for one phase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhaseMetrics {
    /// Phase name.
    pub name: String,
    /// Schedule variance `ev - pv`.
    pub sv: f64,
    /// Cost variance `ev - ac`.
    pub cv: f64,
    /// Schedule performance index `ev / pv`.
    pub spi: f64,
    /// Cost performance index `ev / ac`.
    pub cpi: f64,
    /// Planned value to date.
    pub cumulative_pv: f64,
    /// Earned value to date.
    pub cumulative_ev: f64,
    /// Actual cost to date.
    pub cumulative_ac: f64,
}

/// Whole-project figures and forecasts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EarnedValueSummary {
    /// Total planned value.
    pub total_pv: f64,
    /// Total earned value.
    pub total_ev: f64,
    /// Total actual cost.
    pub total_ac: f64,
    /// Total schedule variance.
    pub sv: f64,
    /// Total cost variance.
    pub cv: f64,
    /// Overall schedule performance index.
    pub spi: f64,
    /// Overall cost performance index.
    pub cpi: f64,
    /// Budget at completion (total planned value).
    pub bac: f64,
    /// Estimate at completion `bac / cpi`.
    pub eac: Option<f64>,
    /// Estimate to complete `eac - total_ac`.
    pub etc: Option<f64>,
    /// Variance at completion `bac - eac`.
    pub vac: Option<f64>,
    /// `spi >= 1`.
    pub on_schedule: bool,
    /// `cpi >= 1`.
    pub within_budget: bool,
}

/// Per-phase metrics together with the project summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EarnedValueReport {
    /// One entry per input phase, in order.
    pub phases: Vec<PhaseMetrics>,
    /// Project totals.
    pub summary: EarnedValueSummary,
}

fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Analyse a sequence of phases.
///
/// # Examples
///
/// ```
/// use econ_models::earned_value::{analyse, Phase};
///
/// let report = analyse(&[Phase::new("build", 100.0, 80.0, 100.0)]);
/// assert_eq!(report.summary.cpi, 0.8);
/// assert!((report.summary.eac.unwrap() - 125.0).abs() < 1e-9);
/// assert!(!report.summary.within_budget);
/// ```
pub fn analyse(phases: &[Phase]) -> EarnedValueReport {
    let mut cumulative_pv = 0.0;
    let mut cumulative_ev = 0.0;
    let mut cumulative_ac = 0.0;

    let metrics: Vec<PhaseMetrics> = phases
        .iter()
        .map(|phase| {
            cumulative_pv += phase.pv;
            cumulative_ev += phase.ev;
            cumulative_ac += phase.ac;
            PhaseMetrics {
                name: phase.name.clone(),
                sv: phase.ev - phase.pv,
                cv: phase.ev - phase.ac,
                spi: safe_ratio(phase.ev, phase.pv),
                cpi: safe_ratio(phase.ev, phase.ac),
                cumulative_pv,
                cumulative_ev,
                cumulative_ac,
            }
        })
        .collect();

    let total_pv: f64 = phases.iter().map(|p| p.pv).sum();
    let total_ev: f64 = phases.iter().map(|p| p.ev).sum();
    let total_ac: f64 = phases.iter().map(|p| p.ac).sum();

    let spi = safe_ratio(total_ev, total_pv);
    let cpi = safe_ratio(total_ev, total_ac);
    let bac = total_pv;
    let eac = (cpi != 0.0).then(|| bac / cpi);

    EarnedValueReport {
        phases: metrics,
        summary: EarnedValueSummary {
            total_pv,
            total_ev,
            total_ac,
            sv: total_ev - total_pv,
            cv: total_ev - total_ac,
            spi,
            cpi,
            bac,
            eac,
            etc: eac.map(|eac| eac - total_ac),
            vac: eac.map(|eac| bac - eac),
            on_schedule: spi >= 1.0,
            within_budget: cpi >= 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn project() -> Vec<Phase> {
        vec![
            Phase::new("requirements", 120.0, 110.0, 130.0),
            Phase::new("development", 260.0, 240.0, 280.0),
            Phase::new("testing", 180.0, 170.0, 175.0),
            Phase::new("rollout", 90.0, 95.0, 88.0),
        ]
    }

    #[test]
    fn test_phase_metrics() {
        let report = analyse(&project());
        let first = &report.phases[0];
        assert_eq!(first.sv, -10.0);
        assert_eq!(first.cv, -20.0);
        assert_relative_eq!(first.spi, 110.0 / 120.0, epsilon = 1e-12);

        let last = &report.phases[3];
        assert_eq!(last.sv, 5.0);
        assert_eq!(last.cumulative_pv, 650.0);
        assert_eq!(last.cumulative_ev, 615.0);
        assert_eq!(last.cumulative_ac, 673.0);
    }

    #[test]
    fn test_summary_forecasts() {
        let summary = analyse(&project()).summary;
        assert_eq!(summary.bac, 650.0);
        assert_eq!(summary.sv, -35.0);
        assert_eq!(summary.cv, -58.0);
        assert_relative_eq!(summary.cpi, 615.0 / 673.0, epsilon = 1e-12);

        let eac = summary.eac.unwrap();
        assert_relative_eq!(eac, 650.0 * 673.0 / 615.0, epsilon = 1e-9);
        assert_relative_eq!(summary.etc.unwrap(), eac - 673.0, epsilon = 1e-9);
        assert_relative_eq!(summary.vac.unwrap(), 650.0 - eac, epsilon = 1e-9);
        assert!(!summary.on_schedule);
        assert!(!summary.within_budget);
    }

    #[test]
    fn test_zero_denominators() {
        let report = analyse(&[Phase::new("idle", 0.0, 0.0, 0.0)]);
        assert_eq!(report.phases[0].spi, 0.0);
        assert_eq!(report.phases[0].cpi, 0.0);
        assert_eq!(report.summary.eac, None);
        assert_eq!(report.summary.etc, None);
        assert_eq!(report.summary.vac, None);
    }

    #[test]
    fn test_ahead_and_under_budget() {
        let summary = analyse(&[Phase::new("fast", 100.0, 120.0, 90.0)]).summary;
        assert!(summary.on_schedule);
        assert!(summary.within_budget);
    }

    #[test]
    fn test_empty_project() {
        let report = analyse(&[]);
        assert!(report.phases.is_empty());
        assert_eq!(report.summary.bac, 0.0);
        assert_eq!(report.summary.eac, None);
    }
}
