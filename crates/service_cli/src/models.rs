//! Built-in scalar models for `simulate` and `sensitivity`.
//!
//! A model reads named parameters. Each parameter resolves to an input
//! variable of the same name unless `bindings` maps it to another name;
//! variables not drawn or perturbed by the command come from `constants`.

use crate::{CliError, Result};
use econ_models::cashflow::discount_factor;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Longest horizon `project-npv` evaluates; sampled `years` above it are clamped.
pub const MAX_PROJECT_YEARS: usize = 1_000;

/// Available models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinModel {
    /// `units × (price − unit_cost) − fixed_cost`
    Profit,
    /// `−investment` followed by `years` flows of `income − cost`,
    /// discounted at `rate_pct / 100`.
    ProjectNpv,
}

impl BuiltinModel {
    /// Model name as written in input documents.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinModel::Profit => "profit",
            BuiltinModel::ProjectNpv => "project-npv",
        }
    }

    /// Parameters the model reads.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            BuiltinModel::Profit => &["units", "price", "unit_cost", "fixed_cost"],
            BuiltinModel::ProjectNpv => &["investment", "income", "cost", "years", "rate_pct"],
        }
    }

    fn evaluate_with<F: Fn(&str) -> f64>(&self, param: F) -> f64 {
        match self {
            BuiltinModel::Profit => {
                param("units") * (param("price") - param("unit_cost")) - param("fixed_cost")
            }
            BuiltinModel::ProjectNpv => {
                let years = param("years")
                    .max(0.0)
                    .round()
                    .min(MAX_PROJECT_YEARS as f64) as usize;
                let rate = param("rate_pct") / 100.0;
                let net = param("income") - param("cost");
                (1..=years).fold(-param("investment"), |npv, year| {
                    npv + net * discount_factor(rate, year)
                })
            }
        }
    }
}

/// A model with its parameter bindings and fixed values resolved.
#[derive(Debug, Clone)]
pub struct BoundModel {
    model: BuiltinModel,
    constants: HashMap<String, f64>,
    bindings: HashMap<String, String>,
}

impl BoundModel {
    /// Bind `model`, checking every parameter resolves to either one of
    /// `variables` or a constant.
    ///
    /// # Errors
    ///
    /// [`CliError::MissingVariable`] for the first unresolved parameter, and
    /// [`CliError::OutOfRange`] for a constant `years` beyond
    /// [`MAX_PROJECT_YEARS`].
    pub fn new<'a>(
        model: BuiltinModel,
        constants: HashMap<String, f64>,
        bindings: HashMap<String, String>,
        variables: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let variables: HashSet<&str> = variables.into_iter().collect();
        let bound = Self {
            model,
            constants,
            bindings,
        };
        for &parameter in model.parameters() {
            let source = bound.source(parameter);
            if !variables.contains(source) && !bound.constants.contains_key(source) {
                return Err(CliError::MissingVariable {
                    model: model.name(),
                    variable: parameter,
                });
            }
        }
        if model == BuiltinModel::ProjectNpv {
            if let Some(&years) = bound.constants.get(bound.source("years")) {
                if years.is_nan() || years > MAX_PROJECT_YEARS as f64 {
                    return Err(CliError::OutOfRange {
                        parameter: "years",
                        value: years,
                        max: MAX_PROJECT_YEARS as f64,
                    });
                }
            }
        }
        Ok(bound)
    }

    /// Bound model.
    pub fn model(&self) -> BuiltinModel {
        self.model
    }

    fn source<'s>(&'s self, parameter: &'s str) -> &'s str {
        self.bindings.get(parameter).map_or(parameter, String::as_str)
    }

    /// Evaluate with `values` taking precedence over the constants.
    pub fn evaluate(&self, values: &HashMap<String, f64>) -> f64 {
        self.model.evaluate_with(|parameter| {
            let source = self.source(parameter);
            values
                .get(source)
                .or_else(|| self.constants.get(source))
                .copied()
                .unwrap_or(0.0)
        })
    }
}
