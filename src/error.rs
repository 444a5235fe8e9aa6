//! Error types for input validation, scenario loading and report export

use thiserror::Error;

/// Errors raised before a projection runs or while moving data in and out
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// An assumption the engine cannot accept (negative money, empty horizon, NaN)
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A form value outside the range the input collector allows
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the user's assumptions rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ProjectionError::InvalidInput { .. } | ProjectionError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
