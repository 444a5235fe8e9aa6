//! CSV and JSON export of projection results

use super::chart::{chart_series, ChartSeries};
use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::projection::{ProjectionResult, ProjectionSummary, YearRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Everything a front end needs to display one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub generated_at: DateTime<Utc>,
    pub assumptions: Assumptions,
    pub summary: ProjectionSummary,
    pub records: Vec<YearRecord>,
    pub series: Vec<ChartSeries>,
}

impl ProjectionReport {
    pub fn new(result: &ProjectionResult) -> Self {
        Self::at(result, Utc::now())
    }

    /// Build a report stamped with a fixed time
    pub fn at(result: &ProjectionResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            assumptions: result.assumptions,
            summary: result.summary(),
            records: result.years.clone(),
            series: chart_series(result),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write yearly records as CSV (header row plus one row per year, full precision)
pub fn write_csv<W: Write>(records: &[YearRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// A report tagged with the scenario it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedReport {
    pub name: String,
    pub report: ProjectionReport,
}

/// Yearly record with a leading scenario label
#[derive(Debug, Serialize)]
struct LabelledRow<'a> {
    scenario: &'a str,
    year: u32,
    age: u32,
    wealth_begin_nominal: f64,
    annual_contribution: f64,
    gross_return: f64,
    dividends_received: f64,
    wealth_end_nominal_reinvested: f64,
    wealth_end_nominal_not_reinvested: f64,
    wealth_end_real: f64,
}

impl<'a> LabelledRow<'a> {
    fn new(scenario: &'a str, r: &YearRecord) -> Self {
        Self {
            scenario,
            year: r.year,
            age: r.age,
            wealth_begin_nominal: r.wealth_begin_nominal,
            annual_contribution: r.annual_contribution,
            gross_return: r.gross_return,
            dividends_received: r.dividends_received,
            wealth_end_nominal_reinvested: r.wealth_end_nominal_reinvested,
            wealth_end_nominal_not_reinvested: r.wealth_end_nominal_not_reinvested,
            wealth_end_real: r.wealth_end_real,
        }
    }
}

/// Write several named projections as one CSV table with a `scenario` column
pub fn write_named_csv<W: Write>(runs: &[(String, ProjectionResult)], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (name, result) in runs {
        for record in result.records() {
            csv_writer.serialize(LabelledRow::new(name, record))?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Several named projections as one pretty-printed JSON array
pub fn named_reports_json(runs: &[(String, ProjectionResult)]) -> Result<String> {
    let generated_at = Utc::now();
    let reports: Vec<NamedReport> = runs
        .iter()
        .map(|(name, result)| NamedReport {
            name: name.clone(),
            report: ProjectionReport::at(result, generated_at),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}
