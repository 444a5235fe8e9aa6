//! Presentation of projection results: table, chart series, summary, export
//!
//! Presenters only read [`crate::projection::ProjectionResult`] values; nothing here feeds back
//! into the engine.

pub mod format;
mod table;
mod chart;
mod summary;
pub mod export;

pub use chart::{chart_series, ChartSeries, LineStyle};
pub use export::ProjectionReport;
pub use format::{format_currency, format_percent};
pub use summary::{render_summary, DISCLAIMER};
pub use table::{render_table, TABLE_HEADERS};

/// Display options shared by the text presenters
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Prefix for currency values
    pub currency_symbol: String,

    /// Maximum number of table rows to print (None = all)
    pub max_rows: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            max_rows: None,
        }
    }
}
