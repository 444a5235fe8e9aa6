//! Output structures for wealth projections

use crate::assumptions::Assumptions;
use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    // Timing
    pub year: u32,
    pub age: u32,

    // Flows during the year
    pub wealth_begin_nominal: f64,
    pub annual_contribution: f64,
    pub gross_return: f64,
    pub dividends_received: f64,

    // Year-end balances
    pub wealth_end_nominal_reinvested: f64,
    pub wealth_end_nominal_not_reinvested: f64,
    pub wealth_end_real: f64,
}

impl YearRecord {
    /// Gain from reinvesting dividends, as of the end of this year
    pub fn reinvestment_gain(&self) -> f64 {
        self.wealth_end_nominal_reinvested - self.wealth_end_nominal_not_reinvested
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Assumptions the projection was run with
    pub assumptions: Assumptions,

    /// Yearly rows, ordered by year
    pub years: Vec<YearRecord>,
}

impl ProjectionResult {
    pub fn new(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            years: Vec::with_capacity(assumptions.horizon_years as usize),
        }
    }

    /// Add a year row
    pub fn add_row(&mut self, row: YearRecord) {
        self.years.push(row);
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.years
    }

    pub fn final_record(&self) -> Option<&YearRecord> {
        self.years.last()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributions: f64 = self.years.iter().map(|r| r.annual_contribution).sum();
        let total_gross_return: f64 = self.years.iter().map(|r| r.gross_return).sum();
        let total_dividends: f64 = self.years.iter().map(|r| r.dividends_received).sum();

        let last = self.final_record();
        let final_nominal_reinvested = last.map(|r| r.wealth_end_nominal_reinvested).unwrap_or(0.0);
        let final_nominal_not_reinvested =
            last.map(|r| r.wealth_end_nominal_not_reinvested).unwrap_or(0.0);

        ProjectionSummary {
            years: self.years.len() as u32,
            final_age: last.map(|r| r.age).unwrap_or(self.assumptions.current_age),
            total_contributions,
            total_gross_return,
            total_dividends,
            final_nominal_reinvested,
            final_nominal_not_reinvested,
            final_real: last.map(|r| r.wealth_end_real).unwrap_or(0.0),
            reinvestment_gain: last.map(YearRecord::reinvestment_gain).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_age: u32,
    pub total_contributions: f64,
    pub total_gross_return: f64,
    pub total_dividends: f64,
    pub final_nominal_reinvested: f64,
    pub final_nominal_not_reinvested: f64,
    pub final_real: f64,
    pub reinvestment_gain: f64,
}
