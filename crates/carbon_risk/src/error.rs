//! Sweep error types.

use carbon_models::ModelError;
use thiserror::Error;

/// Errors raised while building or running a sweep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Grid cannot be built from the requested size or range.
    #[error("Invalid sweep grid: {0}")]
    InvalidGrid(String),

    /// Unknown parameter name.
    #[error("Unknown sweep parameter '{0}'. Supported: scc, lcoe, beta")]
    UnknownParameter(String),

    /// Evaluation failed at one grid point.
    #[error("Evaluation failed at {value}: {source}")]
    Evaluation {
        /// Grid value being evaluated
        value: f64,
        /// Underlying model error
        #[source]
        source: ModelError,
    },
}

impl SweepError {
    /// Model error behind an evaluation failure, if any.
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            Self::Evaluation { source, .. } => Some(source),
            _ => None,
        }
    }
}
