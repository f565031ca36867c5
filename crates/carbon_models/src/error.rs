//! Model error types.

use carbon_core::types::{DiscountError, InterpolationError};
use thiserror::Error;

/// Errors raised while extracting, integrating or evaluating scenario pathways.
///
/// Every failure is surfaced to the caller; no variant is ever replaced
/// by a zero or NaN figure.
///
/// # Examples
///
/// ```
/// use carbon_models::ModelError;
///
/// let err = ModelError::lookup("NGFS2_Below 2°C", "Emissions|CO2");
/// assert!(err.to_string().contains("NGFS2_Below 2°C"));
/// assert!(err.is_lookup());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// No dataset row matches the (scenario, variable) pair.
    #[error("No row for scenario '{scenario}' and variable '{variable}'")]
    Lookup {
        /// Requested scenario identifier
        scenario: String,
        /// Requested variable name
        variable: String,
    },

    /// The row exists but a required sample year is blank.
    #[error("Scenario '{scenario}' variable '{variable}' has no value for {year}")]
    MissingSample {
        /// Scenario identifier
        scenario: String,
        /// Variable name
        variable: String,
        /// Sample year without a value
        year: i32,
    },

    /// Query year outside the interpolation domain.
    #[error("Year {year} outside sample domain [{min}, {max}]")]
    Range {
        /// Requested year
        year: i32,
        /// First sample year
        min: i32,
        /// Last sample year
        max: i32,
    },

    /// Interpolated emissions at the anchor year cannot be used to rescale.
    #[error("Scenario '{scenario}' has unusable emissions {value} at anchor year {year}")]
    DegenerateAnchor {
        /// Scenario identifier
        scenario: String,
        /// Anchor year
        year: i32,
        /// Interpolated emissions at the anchor year
        value: f64,
    },

    /// Interpolant construction failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Discount factor evaluation failed.
    #[error("Discount error: {0}")]
    Discount(#[from] DiscountError),

    /// Inconsistent model configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ModelError {
    /// Create a lookup error.
    pub fn lookup(scenario: impl Into<String>, variable: impl Into<String>) -> Self {
        Self::Lookup {
            scenario: scenario.into(),
            variable: variable.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for failures caused by rows or samples missing from the dataset.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. } | Self::MissingSample { .. })
    }

    /// True for queries outside the sample domain.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}
