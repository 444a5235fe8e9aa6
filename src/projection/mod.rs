//! Projection engine for yearly wealth accumulation

pub mod annuity;
mod state;
mod engine;
mod records;

pub use annuity::{AnnuityTiming, MONTHS_PER_YEAR};
pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine, ProjectionConfig};
pub use records::{ProjectionResult, ProjectionSummary, YearRecord};
