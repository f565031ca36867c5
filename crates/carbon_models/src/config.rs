//! Model configuration.
//!
//! Every constant of the calculation lives in [`ModelConfig`] so alternative
//! datasets, scenarios or horizons can be run without code changes. All
//! fields have defaults matching the NGFS phase 2 setup.

use crate::error::ModelError;
use crate::integrator::PathwayIntegrator;
use carbon_core::discounting::DiscountRateModel;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Default "current policies" scenario identifier.
pub const DEFAULT_BASELINE_SCENARIO: &str = "NGFS2_Current Policies";
/// Default "net-zero 2050" scenario identifier.
pub const DEFAULT_POLICY_SCENARIO: &str = "NGFS2_Net-Zero 2050";
/// Default emissions variable.
pub const DEFAULT_EMISSIONS_VARIABLE: &str = "Emissions|CO2";
/// Default coal production variable.
pub const DEFAULT_PRODUCTION_VARIABLE: &str = "Primary Energy|Coal";

/// Yearly summation window and the year it is anchored to.
///
/// Summation covers `start..=end`; discounting measures time from
/// `anchor_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Horizon {
    /// Valuation and emissions-anchor year
    pub anchor_year: i32,
    /// First summed year
    pub start: i32,
    /// Last summed year (inclusive)
    pub end: i32,
}

impl Default for Horizon {
    fn default() -> Self {
        Self {
            anchor_year: 2022,
            start: 2023,
            end: 2100,
        }
    }
}

impl Horizon {
    /// Integer years summed over.
    #[inline]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Number of summed years.
    #[inline]
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    /// True if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the anchor year and every summed year lie in `[min, max]`.
    ///
    /// # Errors
    ///
    /// `ModelError::Range` naming the first offending year,
    /// `ModelError::InvalidConfig` for an empty window or an anchor after
    /// the first summed year.
    pub fn validate(&self, min: i32, max: i32) -> Result<(), ModelError> {
        if self.is_empty() {
            return Err(ModelError::invalid_config(format!(
                "horizon start {} is after end {}",
                self.start, self.end
            )));
        }
        if self.anchor_year > self.start {
            return Err(ModelError::invalid_config(format!(
                "anchor year {} is after horizon start {}",
                self.anchor_year, self.start
            )));
        }
        for year in [self.anchor_year, self.start, self.end] {
            if year < min || year > max {
                return Err(ModelError::Range { year, min, max });
            }
        }
        Ok(())
    }
}

/// Full set of model constants.
///
/// # Example
///
/// ```
/// use carbon_models::ModelConfig;
///
/// let config = ModelConfig::default();
/// assert_eq!(config.sample_years().len(), 19);
/// assert_eq!(config.horizon.len(), 78);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Scenario treated as the baseline ("current policies")
    pub baseline_scenario: String,
    /// Scenario treated as the policy case ("net-zero 2050")
    pub policy_scenario: String,
    /// Variable holding CO2 emissions (Mt CO2 / yr)
    pub emissions_variable: String,
    /// Variable holding coal primary energy (EJ / yr)
    pub production_variable: String,
    /// Divisor turning source emissions units into gigatonnes
    pub emissions_divisor: f64,
    /// Trusted emissions at the anchor year (Gt CO2)
    pub anchor_emissions_gt: f64,
    /// Summation window
    pub horizon: Horizon,
    /// First sample year in the dataset
    pub sample_start: i32,
    /// Last sample year in the dataset
    pub sample_end: i32,
    /// Spacing between sample years
    pub sample_step: i32,
    /// Discount rate constants
    pub discount: DiscountRateModel,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            baseline_scenario: DEFAULT_BASELINE_SCENARIO.to_string(),
            policy_scenario: DEFAULT_POLICY_SCENARIO.to_string(),
            emissions_variable: DEFAULT_EMISSIONS_VARIABLE.to_string(),
            production_variable: DEFAULT_PRODUCTION_VARIABLE.to_string(),
            emissions_divisor: 1e3,
            anchor_emissions_gt: 15.5,
            horizon: Horizon::default(),
            sample_start: 2010,
            sample_end: 2100,
            sample_step: 5,
            discount: DiscountRateModel::default(),
        }
    }
}

impl ModelConfig {
    /// Sample years read from each dataset row.
    pub fn sample_years(&self) -> Vec<i32> {
        if self.sample_step <= 0 {
            return Vec::new();
        }
        (self.sample_start..=self.sample_end)
            .step_by(self.sample_step as usize)
            .collect()
    }

    /// Interpolation domain `(first, last)` of the sample grid.
    pub fn sample_domain(&self) -> Option<(i32, i32)> {
        let years = self.sample_years();
        Some((*years.first()?, *years.last()?))
    }

    /// Integrator built from the horizon and anchor.
    pub fn integrator(&self) -> PathwayIntegrator {
        PathwayIntegrator::new(self.horizon, self.anchor_emissions_gt)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidConfig` for a malformed sample grid or anchor,
    /// `ModelError::Range` if the horizon leaves the sample domain.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.sample_step <= 0 {
            return Err(ModelError::invalid_config(format!(
                "sample_step must be positive, got {}",
                self.sample_step
            )));
        }
        if self.sample_start >= self.sample_end {
            return Err(ModelError::invalid_config(format!(
                "sample_start {} must precede sample_end {}",
                self.sample_start, self.sample_end
            )));
        }
        if !self.anchor_emissions_gt.is_finite() {
            return Err(ModelError::invalid_config(
                "anchor_emissions_gt must be finite",
            ));
        }
        if !(self.emissions_divisor.is_finite() && self.emissions_divisor != 0.0) {
            return Err(ModelError::invalid_config(format!(
                "emissions_divisor must be finite and non-zero, got {}",
                self.emissions_divisor
            )));
        }
        let (min, max) = self
            .sample_domain()
            .ok_or_else(|| ModelError::invalid_config("empty sample grid"))?;
        self.horizon.validate(min, max)
    }
}
