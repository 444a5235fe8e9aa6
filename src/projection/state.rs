//! Running balances carried between projection years

use crate::assumptions::Assumptions;

/// Balances at the start of a projection year
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Projection year about to be computed (1-indexed)
    pub year: u32,

    /// Client age during `year`
    pub age: u32,

    /// Nominal balance with dividends reinvested (the client's actual balance)
    pub reinvested: f64,

    /// Nominal balance when dividends are paid out instead
    pub not_reinvested: f64,
}

impl ProjectionState {
    /// Initialize state at the start of year 1
    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        Self {
            year: 1,
            age: assumptions.current_age,
            reinvested: assumptions.initial_wealth,
            not_reinvested: assumptions.initial_wealth,
        }
    }

    /// Roll year-end balances into the next year
    pub fn advance_year(&mut self, end_reinvested: f64, end_not_reinvested: f64) {
        self.reinvested = end_reinvested;
        self.not_reinvested = end_not_reinvested;
        self.year += 1;
        self.age = self.age.saturating_add(1);
    }
}
