//! Projection assumptions: the immutable inputs of a single run

mod inputs;
pub mod loader;

pub use inputs::{AssumptionInputs, InputLimits};
pub use loader::NamedScenario;

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Container for all assumptions of one projection run
///
/// Rates are decimal fractions (0.08 = 8%). Build one per run and pass it by
/// value into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Capital at the start of year 1
    pub initial_wealth: f64,

    /// Amount invested at the end of every month
    pub monthly_contribution: f64,

    /// Expected effective annual return
    pub annual_return_rate: f64,

    /// Expected annual inflation, used to deflate nominal wealth
    pub annual_inflation_rate: f64,

    /// Expected dividend yield on the beginning-of-year balance
    pub annual_dividend_rate: f64,

    /// Number of yearly periods to project
    pub horizon_years: u32,

    /// Client age in year 1 (display only)
    pub current_age: u32,
}

impl Assumptions {
    /// Scenario used when the client has not entered anything yet
    pub fn default_scenario() -> Self {
        Self {
            initial_wealth: 1_500_000.0,
            monthly_contribution: 5_000.0,
            annual_return_rate: 0.08,
            annual_inflation_rate: 0.04,
            annual_dividend_rate: 0.02,
            horizon_years: 20,
            current_age: 40,
        }
    }

    /// Reject assumptions the engine cannot project
    pub fn validate(&self) -> Result<()> {
        check_money("initial_wealth", self.initial_wealth)?;
        check_money("monthly_contribution", self.monthly_contribution)?;
        check_rate("annual_return_rate", self.annual_return_rate)?;
        check_rate("annual_inflation_rate", self.annual_inflation_rate)?;
        check_rate("annual_dividend_rate", self.annual_dividend_rate)?;

        if self.horizon_years == 0 {
            return Err(ProjectionError::invalid(
                "horizon_years",
                "must be at least one year",
            ));
        }

        Ok(())
    }

    /// Copy of these assumptions with a different return rate (for sweeps)
    pub fn with_return_rate(self, annual_return_rate: f64) -> Self {
        Self {
            annual_return_rate,
            ..self
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_scenario()
    }
}

fn check_money(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite amount"));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}

// Rates are only range-checked by the input collector; the engine needs them finite
// and above -100% so that compounding stays defined.
fn check_rate(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite rate"));
    }
    if value <= -1.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must be greater than -100% (got {})", value),
        ));
    }
    Ok(())
}
