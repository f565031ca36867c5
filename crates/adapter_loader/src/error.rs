//! Loader error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a scenario snapshot.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Data file does not exist.
    #[error("CSV file not found at: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure other than a missing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required column absent from the header.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// Year cell that is neither blank nor a number.
    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValue {
        /// 1-based line in the file, header included
        line: u64,
        /// Column header
        column: String,
        /// Raw cell content
        value: String,
    },
}
