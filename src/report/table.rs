//! Fixed-width text table of yearly records

use super::format::format_currency;
use super::ReportConfig;
use crate::projection::{ProjectionResult, YearRecord};

/// Column headers, in display order
pub const TABLE_HEADERS: [&str; 9] = [
    "Year",
    "Age",
    "Begin Wealth",
    "Contributions",
    "Gross Return",
    "Dividends",
    "End Nominal (reinv.)",
    "End Nominal (no reinv.)",
    "End Real",
];

const YEAR_WIDTH: usize = 5;
const AGE_WIDTH: usize = 4;
const MONEY_WIDTH: usize = 24;

/// Render the projection as a text table, one line per year
pub fn render_table(result: &ProjectionResult, config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str(&timing_cells(TABLE_HEADERS[0], TABLE_HEADERS[1]));
    for header in &TABLE_HEADERS[2..] {
        out.push_str(&money_cell(header));
    }
    out.push('\n');

    let width = YEAR_WIDTH + AGE_WIDTH + 1 + (MONEY_WIDTH + 1) * (TABLE_HEADERS.len() - 2);
    out.push_str(&"-".repeat(width));
    out.push('\n');

    let shown = config.max_rows.unwrap_or(result.len()).min(result.len());
    for row in result.records().iter().take(shown) {
        write_row(&mut out, row, &config.currency_symbol);
    }

    if result.len() > shown {
        out.push_str(&format!("... ({} more years)\n", result.len() - shown));
    }

    out
}

fn write_row(out: &mut String, row: &YearRecord, symbol: &str) {
    let money = [
        row.wealth_begin_nominal,
        row.annual_contribution,
        row.gross_return,
        row.dividends_received,
        row.wealth_end_nominal_reinvested,
        row.wealth_end_nominal_not_reinvested,
        row.wealth_end_real,
    ];

    out.push_str(&timing_cells(row.year, row.age));
    for value in money {
        out.push_str(&money_cell(&format_currency(value, symbol)));
    }
    out.push('\n');
}

fn timing_cells(year: impl std::fmt::Display, age: impl std::fmt::Display) -> String {
    format!("{:>yw$} {:>aw$}", year, age, yw = YEAR_WIDTH, aw = AGE_WIDTH)
}

fn money_cell(text: &str) -> String {
    format!(" {:>mw$}", text, mw = MONEY_WIDTH)
}
