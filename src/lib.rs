//! Wealth Projection - year-by-year wealth accumulation for what-if planning
//!
//! This library provides:
//! - A pure projection engine (annual compounding, monthly contributions,
//!   dividend reinvestment vs. payout, inflation deflation)
//! - Form-level input collection and validation
//! - Text, chart-series, CSV and JSON presenters
//! - Batch and sensitivity scenario runs

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::ProjectionError;
pub use assumptions::{Assumptions, AssumptionInputs};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ProjectionResult, YearRecord};
pub use scenario::ScenarioRunner;
