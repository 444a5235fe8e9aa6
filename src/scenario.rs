//! Scenario runner for batch what-if projections
//!
//! Holds one projection config and evaluates many assumption sets against
//! it. Independent projections run in parallel; results keep input order.

use crate::assumptions::{Assumptions, NamedScenario};
use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use log::{debug, warn};
use rayon::prelude::*;

/// Outcome of one named scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult>,
}

/// Pre-configured scenario runner
///
/// # Example
/// ```
/// use wealth_projection::{Assumptions, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let results = runner
///     .sweep_return_rates(Assumptions::default_scenario(), &[0.04, 0.06, 0.08])
///     .unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create runner with the default projection config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific projection config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Validate and run a single projection
    pub fn run(&self, assumptions: Assumptions) -> Result<ProjectionResult> {
        assumptions.validate()?;
        Ok(ProjectionEngine::new(assumptions, self.config.clone()).project())
    }

    /// Run projections for several assumption sets
    ///
    /// Fails without returning any result if one of the sets is invalid.
    pub fn run_batch(&self, batch: &[Assumptions]) -> Result<Vec<ProjectionResult>> {
        for assumptions in batch {
            assumptions.validate()?;
        }
        debug!("running batch of {} projections", batch.len());

        Ok(batch
            .par_iter()
            .map(|assumptions| ProjectionEngine::new(*assumptions, self.config.clone()).project())
            .collect())
    }

    /// Re-run the same assumptions under different annual return rates
    pub fn sweep_return_rates(
        &self,
        base: Assumptions,
        return_rates: &[f64],
    ) -> Result<Vec<ProjectionResult>> {
        let batch: Vec<Assumptions> = return_rates
            .iter()
            .map(|&rate| base.with_return_rate(rate))
            .collect();
        self.run_batch(&batch)
    }

    /// Run named form scenarios; each one succeeds or fails on its own
    pub fn run_named(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| {
                let result = scenario
                    .inputs
                    .to_assumptions()
                    .and_then(|assumptions| self.run(assumptions));
                if let Err(e) = &result {
                    warn!("scenario '{}' rejected: {}", scenario.name, e);
                }
                ScenarioOutcome {
                    name: scenario.name.clone(),
                    result,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssumptionInputs;
    use crate::error::ProjectionError;
    use crate::projection::AnnuityTiming;

    #[test]
    fn test_scenario_runner_sweep() {
        let runner = ScenarioRunner::new();
        let results = runner
            .sweep_return_rates(Assumptions::default_scenario(), &[0.03, 0.05, 0.08])
            .unwrap();
        assert_eq!(results.len(), 3);

        // Results keep input order, and a higher return ends higher
        assert_eq!(results[0].assumptions.annual_return_rate, 0.03);
        assert_eq!(results[2].assumptions.annual_return_rate, 0.08);
        let high = results[2].summary();
        let low = results[0].summary();
        assert!(high.final_nominal_reinvested > low.final_nominal_reinvested);
        assert!(results[1].summary().final_real > results[0].summary().final_real);
    }

    #[test]
    fn test_batch_rejects_any_invalid_set() {
        let runner = ScenarioRunner::new();
        let batch = [
            Assumptions::default_scenario(),
            Assumptions {
                horizon_years: 0,
                ..Assumptions::default_scenario()
            },
        ];
        let err = runner.run_batch(&batch).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { .. }));
    }

    #[test]
    fn test_run_named_isolates_failures() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            NamedScenario {
                name: "ok".to_string(),
                inputs: AssumptionInputs::default(),
            },
            NamedScenario {
                name: "negative".to_string(),
                inputs: AssumptionInputs {
                    monthly_contribution: -1.0,
                    ..Default::default()
                },
            },
        ];

        let outcomes = runner.run_named(&scenarios);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, "ok");
        assert_eq!(outcomes[0].result.as_ref().unwrap().len(), 20);
        assert_eq!(outcomes[1].name, "negative");
        assert!(outcomes[1].result.is_err());
    }

    #[test]
    fn test_runner_applies_config() {
        let runner = ScenarioRunner::with_config(ProjectionConfig {
            contribution_timing: AnnuityTiming::Begin,
        });
        let due = runner.run(Assumptions::default_scenario()).unwrap();
        let ordinary = ScenarioRunner::new().run(Assumptions::default_scenario()).unwrap();
        assert!(
            due.summary().final_nominal_reinvested > ordinary.summary().final_nominal_reinvested
        );
    }
}
