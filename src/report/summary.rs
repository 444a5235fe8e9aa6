//! Plain-text summary of a projection's final year

use super::format::format_currency;
use super::ReportConfig;
use crate::projection::ProjectionResult;

/// Shown under every projection
pub const DISCLAIMER: &str = "Disclaimer: financial projections are estimates, not guarantees of \
future results. Values depend on the assumptions entered and may vary significantly with market \
conditions and changes in contributions or rates. This tool is for education and general \
planning; seek professional advice.";

/// Render the three headline values of the final year plus the disclaimer
pub fn render_summary(result: &ProjectionResult, config: &ReportConfig) -> String {
    let summary = result.summary();
    let symbol = &config.currency_symbol;

    let mut lines = vec![
        format!(
            "Projected final wealth (nominal, dividends reinvested): {}",
            format_currency(summary.final_nominal_reinvested, symbol)
        ),
        format!(
            "Projected final wealth (nominal, dividends not reinvested): {}",
            format_currency(summary.final_nominal_not_reinvested, symbol)
        ),
        format!(
            "Projected final wealth (real, inflation adjusted): {}",
            format_currency(summary.final_real, symbol)
        ),
    ];

    if summary.years > 0 {
        lines.push(format!(
            "After {} years (age {}): contributed {}, earned {} in returns and {} in dividends",
            summary.years,
            summary.final_age,
            format_currency(summary.total_contributions, symbol),
            format_currency(summary.total_gross_return, symbol),
            format_currency(summary.total_dividends, symbol),
        ));
    }

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}
