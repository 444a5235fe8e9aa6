//! Core projection engine for yearly wealth accumulation

use crate::assumptions::Assumptions;
use crate::error::Result;
use super::annuity::{
    effective_monthly_rate, future_value_of_annuity, inflation_factor, AnnuityTiming,
    MONTHS_PER_YEAR,
};
use super::records::{ProjectionResult, YearRecord};
use super::state::ProjectionState;
use log::debug;
use serde::{Deserialize, Serialize};

/// Configuration for a projection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// When monthly contributions are paid within each month
    pub contribution_timing: AnnuityTiming,
}

/// Main projection engine
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Run the projection for every year of the horizon
    ///
    /// Assumptions are expected to have passed [`Assumptions::validate`].
    pub fn project(&self) -> ProjectionResult {
        let a = &self.assumptions;
        let mut result = ProjectionResult::new(*a);
        let mut state = ProjectionState::from_assumptions(a);

        // Contribution flows are identical every year
        let monthly_rate = effective_monthly_rate(a.annual_return_rate);
        let annual_contribution = a.monthly_contribution * MONTHS_PER_YEAR as f64;
        let fv_contributions = future_value_of_annuity(
            monthly_rate,
            MONTHS_PER_YEAR,
            a.monthly_contribution,
            self.config.contribution_timing,
        );
        let interest_on_contributions = if a.annual_return_rate == 0.0 {
            0.0
        } else {
            fv_contributions - annual_contribution
        };

        debug!(
            "projecting {} years: monthly rate {:.8}, contribution interest {:.2}",
            a.horizon_years, monthly_rate, interest_on_contributions
        );

        for _year in 1..=a.horizon_years {
            let row = self.calculate_year(&state, annual_contribution, interest_on_contributions);
            state.advance_year(
                row.wealth_end_nominal_reinvested,
                row.wealth_end_nominal_not_reinvested,
            );
            result.add_row(row);
        }

        result
    }

    /// Calculate one year from the balances at its start
    fn calculate_year(
        &self,
        state: &ProjectionState,
        annual_contribution: f64,
        interest_on_contributions: f64,
    ) -> YearRecord {
        let a = &self.assumptions;

        let interest_reinvested = state.reinvested * a.annual_return_rate;
        let interest_plain = state.not_reinvested * a.annual_return_rate;

        let gross_return = interest_reinvested + interest_on_contributions;
        // Dividends accrue on the client's actual (reinvested) balance
        let dividends_received = state.reinvested * a.annual_dividend_rate;

        let end_reinvested =
            state.reinvested + annual_contribution + gross_return + dividends_received;
        let growth_plain = interest_plain + interest_on_contributions;
        let end_not_reinvested = state.not_reinvested + annual_contribution + growth_plain;

        let end_real = end_reinvested / inflation_factor(a.annual_inflation_rate, state.year);

        YearRecord {
            year: state.year,
            age: state.age,
            wealth_begin_nominal: state.reinvested,
            annual_contribution,
            gross_return,
            dividends_received,
            wealth_end_nominal_reinvested: end_reinvested,
            wealth_end_nominal_not_reinvested: end_not_reinvested,
            wealth_end_real: end_real,
        }
    }
}

/// Validate assumptions and project them with the default configuration
///
/// Nothing is projected when validation fails.
pub fn project(assumptions: Assumptions) -> Result<ProjectionResult> {
    assumptions.validate()?;
    Ok(ProjectionEngine::new(assumptions, ProjectionConfig::default()).project())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use approx::assert_relative_eq;

    fn concrete_scenario() -> Assumptions {
        Assumptions {
            initial_wealth: 1_500_000.0,
            monthly_contribution: 5_000.0,
            annual_return_rate: 0.08,
            annual_inflation_rate: 0.04,
            annual_dividend_rate: 0.02,
            horizon_years: 1,
            current_age: 40,
        }
    }

    fn run(assumptions: Assumptions) -> ProjectionResult {
        project(assumptions).expect("valid assumptions")
    }

    #[test]
    fn test_max_age_does_not_overflow() {
        let result = run(Assumptions {
            current_age: u32::MAX,
            horizon_years: 2,
            ..concrete_scenario()
        });
        assert_eq!(result.len(), 2);
        assert_eq!(result.records()[1].age, u32::MAX);
    }

    #[test]
    fn test_concrete_first_year() {
        let result = run(concrete_scenario());
        assert_eq!(result.len(), 1);

        let row = &result.years[0];
        assert_eq!(row.year, 1);
        assert_eq!(row.age, 40);
        assert_eq!(row.wealth_begin_nominal, 1_500_000.0);
        assert_eq!(row.annual_contribution, 60_000.0);
        assert_relative_eq!(row.dividends_received, 30_000.0, epsilon = 1e-9);

        // 120,000 on the opening balance plus 2,169.43 earned by the contributions
        assert_relative_eq!(row.gross_return, 122_169.432402576, epsilon = 1e-6);
        assert_relative_eq!(row.wealth_end_nominal_reinvested, 1_712_169.432402576, epsilon = 1e-6);
        assert_relative_eq!(
            row.wealth_end_nominal_not_reinvested,
            1_682_169.432402576,
            epsilon = 1e-6
        );
        assert_relative_eq!(row.wealth_end_real, 1_712_169.432402576 / 1.04, epsilon = 1e-6);
        assert_relative_eq!(row.wealth_end_real, 1_646_316.76, epsilon = 0.01);
    }

    #[test]
    fn test_pure_compounding_baseline() {
        let assumptions = Assumptions {
            initial_wealth: 100_000.0,
            monthly_contribution: 0.0,
            annual_return_rate: 0.07,
            annual_inflation_rate: 0.03,
            annual_dividend_rate: 0.0,
            horizon_years: 30,
            current_age: 30,
        };
        let result = run(assumptions);

        for row in result.records() {
            let expected = 100_000.0 * 1.07_f64.powi(row.year as i32);
            assert_relative_eq!(row.wealth_end_nominal_reinvested, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate_neutrality() {
        let assumptions = Assumptions {
            initial_wealth: 10_000.0,
            monthly_contribution: 250.0,
            annual_return_rate: 0.0,
            annual_inflation_rate: 0.02,
            annual_dividend_rate: 0.03,
            horizon_years: 10,
            current_age: 50,
        };
        let result = run(assumptions);

        let mut cumulative_dividends = 0.0;
        for row in result.records() {
            assert_eq!(row.gross_return, 0.0);
            cumulative_dividends += row.dividends_received;
            let expected = 10_000.0 + row.year as f64 * 250.0 * 12.0 + cumulative_dividends;
            assert_relative_eq!(row.wealth_end_nominal_reinvested, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_dividend_divergence_is_monotonic() {
        let assumptions = Assumptions {
            horizon_years: 40,
            ..Assumptions::default_scenario()
        };
        let result = run(assumptions);

        let mut previous_gap = 0.0;
        for row in result.records() {
            let gap = row.reinvestment_gain();
            if row.year >= 2 {
                assert!(gap > 0.0, "year {} gap {}", row.year, gap);
            }
            assert!(gap >= previous_gap, "gap shrank in year {}", row.year);
            previous_gap = gap;
        }
    }

    #[test]
    fn test_no_dividends_tracks_equal() {
        let assumptions = Assumptions {
            annual_dividend_rate: 0.0,
            horizon_years: 60,
            ..Assumptions::default_scenario()
        };
        let result = run(assumptions);

        for row in result.records() {
            assert_relative_eq!(
                row.wealth_end_nominal_reinvested,
                row.wealth_end_nominal_not_reinvested,
                max_relative = 1e-12
            );
            assert_eq!(row.dividends_received, 0.0);
        }
    }

    #[test]
    fn test_zero_inflation_real_equals_nominal() {
        let assumptions = Assumptions {
            annual_inflation_rate: 0.0,
            ..Assumptions::default_scenario()
        };
        for row in run(assumptions).records() {
            assert_eq!(row.wealth_end_real, row.wealth_end_nominal_reinvested);
        }
    }

    #[test]
    fn test_higher_inflation_lowers_real_wealth() {
        let low = run(Assumptions {
            annual_inflation_rate: 0.02,
            ..Assumptions::default_scenario()
        });
        let high = run(Assumptions {
            annual_inflation_rate: 0.06,
            ..Assumptions::default_scenario()
        });

        for (l, h) in low.records().iter().zip(high.records()) {
            // Inflation does not touch the nominal path
            assert_eq!(l.wealth_end_nominal_reinvested, h.wealth_end_nominal_reinvested);
            assert!(h.wealth_end_real < l.wealth_end_real);
            assert!(h.wealth_end_real < h.wealth_end_nominal_reinvested);
        }
    }

    #[test]
    fn test_sequence_length_and_ordering() {
        let assumptions = Assumptions {
            horizon_years: 25,
            current_age: 33,
            ..Assumptions::default_scenario()
        };
        let result = run(assumptions);

        assert_eq!(result.len(), 25);
        for (i, row) in result.records().iter().enumerate() {
            assert_eq!(row.year, i as u32 + 1);
            assert_eq!(row.age, 33 + row.year - 1);
        }
    }

    #[test]
    fn test_begin_balance_chains_from_previous_year() {
        let result = run(Assumptions::default_scenario());
        assert_eq!(result.years[0].wealth_begin_nominal, 1_500_000.0);
        for pair in result.records().windows(2) {
            assert_eq!(pair[1].wealth_begin_nominal, pair[0].wealth_end_nominal_reinvested);
            assert_relative_eq!(
                pair[1].dividends_received,
                pair[1].wealth_begin_nominal * 0.02,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_sixty_year_horizon_stays_finite() {
        let assumptions = Assumptions {
            annual_return_rate: 1.0,
            annual_dividend_rate: 1.0,
            horizon_years: 60,
            ..Assumptions::default_scenario()
        };
        let result = run(assumptions);
        assert_eq!(result.len(), 60);
        assert!(result.records().iter().all(|r| r.wealth_end_nominal_reinvested.is_finite()));
    }

    #[test]
    fn test_invalid_inputs_rejected_before_projection() {
        let cases = [
            Assumptions {
                initial_wealth: -1.0,
                ..Assumptions::default_scenario()
            },
            Assumptions {
                monthly_contribution: -1.0,
                ..Assumptions::default_scenario()
            },
            Assumptions {
                horizon_years: 0,
                ..Assumptions::default_scenario()
            },
        ];

        for assumptions in cases {
            let err = project(assumptions).unwrap_err();
            assert!(matches!(err, ProjectionError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_annuity_due_config_adds_contribution_interest() {
        let assumptions = concrete_scenario();
        let ordinary = ProjectionEngine::new(assumptions, ProjectionConfig::default()).project();
        let due = ProjectionEngine::new(
            assumptions,
            ProjectionConfig {
                contribution_timing: AnnuityTiming::Begin,
            },
        )
        .project();

        let extra = due.years[0].gross_return - ordinary.years[0].gross_return;
        let monthly = effective_monthly_rate(0.08);
        assert_relative_eq!(extra, 62_169.432402576 * monthly, epsilon = 1e-6);
        assert_eq!(due.years[0].dividends_received, ordinary.years[0].dividends_received);
    }
}
