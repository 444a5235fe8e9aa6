//! Form-level inputs as a client enters them (percent units, bounded fields)

use super::Assumptions;
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Raw assumption values from the input form
///
/// Rates are percentages (8.0 = 8%). Integers are signed so that negative
/// entries can be reported instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionInputs {
    pub initial_wealth: f64,
    pub monthly_contribution: f64,
    pub annual_dividend_pct: f64,
    pub annual_return_pct: f64,
    pub annual_inflation_pct: f64,
    pub horizon_years: i64,
    pub current_age: i64,
}

impl Default for AssumptionInputs {
    fn default() -> Self {
        Self {
            initial_wealth: 1_500_000.0,
            monthly_contribution: 5_000.0,
            annual_dividend_pct: 2.0,
            annual_return_pct: 8.0,
            annual_inflation_pct: 4.0,
            horizon_years: 20,
            current_age: 40,
        }
    }
}

/// Bounds enforced by the input form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    pub max_rate_pct: f64,
    pub min_horizon_years: i64,
    pub max_horizon_years: i64,
    pub min_age: i64,
    pub max_age: i64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_rate_pct: 100.0,
            min_horizon_years: 1,
            max_horizon_years: 60,
            min_age: 1,
            max_age: 120,
        }
    }
}

impl AssumptionInputs {
    /// Validate against the default form limits and convert to [`Assumptions`]
    pub fn to_assumptions(&self) -> Result<Assumptions> {
        self.to_assumptions_with(&InputLimits::default())
    }

    /// Validate against custom limits and convert to [`Assumptions`]
    ///
    /// Blocking input errors (negative money, empty horizon) are reported
    /// before range violations.
    pub fn to_assumptions_with(&self, limits: &InputLimits) -> Result<Assumptions> {
        if !self.initial_wealth.is_finite() || self.initial_wealth < 0.0 {
            return Err(ProjectionError::invalid(
                "initial_wealth",
                format!("must be a non-negative amount (got {})", self.initial_wealth),
            ));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_contribution",
                format!(
                    "must be a non-negative amount (got {})",
                    self.monthly_contribution
                ),
            ));
        }
        if self.horizon_years <= 0 {
            return Err(ProjectionError::invalid(
                "horizon_years",
                format!("must be at least one year (got {})", self.horizon_years),
            ));
        }

        let annual_dividend_rate =
            pct_to_rate("annual_dividend_pct", self.annual_dividend_pct, limits)?;
        let annual_return_rate = pct_to_rate("annual_return_pct", self.annual_return_pct, limits)?;
        let annual_inflation_rate =
            pct_to_rate("annual_inflation_pct", self.annual_inflation_pct, limits)?;

        let horizon_years = bounded(
            "horizon_years",
            self.horizon_years,
            limits.min_horizon_years,
            limits.max_horizon_years,
        )?;
        let current_age = bounded("current_age", self.current_age, limits.min_age, limits.max_age)?;

        let assumptions = Assumptions {
            initial_wealth: self.initial_wealth,
            monthly_contribution: self.monthly_contribution,
            annual_return_rate,
            annual_inflation_rate,
            annual_dividend_rate,
            horizon_years,
            current_age,
        };
        assumptions.validate()?;
        Ok(assumptions)
    }
}

impl From<&Assumptions> for AssumptionInputs {
    fn from(assumptions: &Assumptions) -> Self {
        Self {
            initial_wealth: assumptions.initial_wealth,
            monthly_contribution: assumptions.monthly_contribution,
            annual_dividend_pct: assumptions.annual_dividend_rate * 100.0,
            annual_return_pct: assumptions.annual_return_rate * 100.0,
            annual_inflation_pct: assumptions.annual_inflation_rate * 100.0,
            horizon_years: i64::from(assumptions.horizon_years),
            current_age: i64::from(assumptions.current_age),
        }
    }
}

fn pct_to_rate(field: &'static str, pct: f64, limits: &InputLimits) -> Result<f64> {
    if !(0.0..=limits.max_rate_pct).contains(&pct) {
        return Err(ProjectionError::OutOfRange {
            field,
            value: pct,
            min: 0.0,
            max: limits.max_rate_pct,
        });
    }
    Ok(pct / 100.0)
}

fn bounded(field: &'static str, value: i64, min: i64, max: i64) -> Result<u32> {
    if value < min || value > max {
        return Err(ProjectionError::OutOfRange {
            field,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    u32::try_from(value).map_err(|_| ProjectionError::OutOfRange {
        field,
        value: value as f64,
        min: min as f64,
        max: max as f64,
    })
}
