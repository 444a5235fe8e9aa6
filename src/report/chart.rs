//! Chart-ready series of year-end wealth

use crate::projection::{ProjectionResult, YearRecord};
use serde::{Deserialize, Serialize};

/// How a series should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One plotted line: `(year, value)` points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub style: LineStyle,
    pub points: Vec<(u32, f64)>,
}

/// Build the three wealth series, in order: nominal with dividends
/// reinvested, nominal without reinvestment, real
pub fn chart_series(result: &ProjectionResult) -> Vec<ChartSeries> {
    vec![
        line(
            result,
            "Nominal wealth (dividends reinvested)",
            LineStyle::Solid,
            |r| r.wealth_end_nominal_reinvested,
        ),
        line(
            result,
            "Nominal wealth (dividends not reinvested)",
            LineStyle::Dashed,
            |r| r.wealth_end_nominal_not_reinvested,
        ),
        line(
            result,
            "Real wealth (inflation adjusted)",
            LineStyle::Solid,
            |r| r.wealth_end_real,
        ),
    ]
}

fn line<F>(result: &ProjectionResult, name: &str, style: LineStyle, value: F) -> ChartSeries
where
    F: Fn(&YearRecord) -> f64,
{
    ChartSeries {
        name: name.to_string(),
        style,
        points: result.records().iter().map(|r| (r.year, value(r))).collect(),
    }
}
