//! CLI error types.

use crate::config::ConfigError;
use adapter_loader::LoaderError;
use carbon_models::ModelError;
use carbon_risk::SweepError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dataset could not be loaded
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Model evaluation failed
    #[error("Evaluation failed: {0}")]
    Model(#[from] ModelError),

    /// Sweep failed
    #[error("Sweep failed: {0}")]
    Sweep(#[from] SweepError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Dataset check found problems
    #[error("Dataset check failed: {0} problem(s) found")]
    CheckFailed(usize),

    /// CSV output error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
