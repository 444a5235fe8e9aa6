//! CSV-based scenario loader
//!
//! Reads a batch of named what-if scenarios, one per row, in the same percent
//! units the input form uses.

use super::AssumptionInputs;
use crate::error::Result;
use csv::Reader;
use log::debug;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    initial_wealth: f64,
    monthly_contribution: f64,
    annual_return_pct: f64,
    annual_inflation_pct: f64,
    annual_dividend_pct: f64,
    horizon_years: i64,
    current_age: i64,
}

impl CsvRow {
    fn into_scenario(self) -> NamedScenario {
        NamedScenario {
            name: self.name,
            inputs: AssumptionInputs {
                initial_wealth: self.initial_wealth,
                monthly_contribution: self.monthly_contribution,
                annual_dividend_pct: self.annual_dividend_pct,
                annual_return_pct: self.annual_return_pct,
                annual_inflation_pct: self.annual_inflation_pct,
                horizon_years: self.horizon_years,
                current_age: self.current_age,
            },
        }
    }
}

/// A labelled set of form inputs
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: AssumptionInputs,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let path = path.as_ref();
    debug!("loading scenarios from {}", path.display());
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedScenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}
