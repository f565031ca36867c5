//! Scenario extraction: dataset rows to continuous pathways.

use crate::config::ModelConfig;
use crate::dataset::ScenarioDataset;
use crate::error::ModelError;
use carbon_core::math::interpolators::{Interpolator, LinearInterpolator};
use carbon_core::types::InterpolationError;

/// A dataset series interpolated over its sample years.
///
/// # Example
///
/// ```
/// use carbon_models::Pathway;
///
/// let pathway = Pathway::new("S", "Primary Energy|Coal", &[2020, 2025], &[100.0, 90.0]).unwrap();
/// assert_eq!(pathway.value_at(2022).unwrap(), 96.0);
/// assert!(pathway.value_at(2026).unwrap_err().is_range());
/// ```
#[derive(Debug, Clone)]
pub struct Pathway {
    scenario: String,
    variable: String,
    interpolator: LinearInterpolator<f64>,
}

impl Pathway {
    /// Interpolate `values` sampled at `years`.
    pub fn new(
        scenario: impl Into<String>,
        variable: impl Into<String>,
        years: &[i32],
        values: &[f64],
    ) -> Result<Self, ModelError> {
        let xs: Vec<f64> = years.iter().map(|&y| f64::from(y)).collect();
        Ok(Self {
            scenario: scenario.into(),
            variable: variable.into(),
            interpolator: LinearInterpolator::new(&xs, values)?,
        })
    }

    /// Scenario identifier.
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    /// Variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// First and last sample year.
    pub fn domain(&self) -> (i32, i32) {
        let (lo, hi) = self.interpolator.domain();
        (lo as i32, hi as i32)
    }

    /// Interpolated value at a calendar year.
    ///
    /// # Errors
    ///
    /// `ModelError::Range` if `year` lies outside the sample years.
    pub fn value_at(&self, year: i32) -> Result<f64, ModelError> {
        self.interpolator
            .interpolate(f64::from(year))
            .map_err(|err| match err {
                InterpolationError::OutOfBounds { .. } => {
                    let (min, max) = self.domain();
                    ModelError::Range { year, min, max }
                }
                other => ModelError::Interpolation(other),
            })
    }

    /// Sum of interpolated values over the given years.
    pub fn sum_over(&self, years: impl IntoIterator<Item = i32>) -> Result<f64, ModelError> {
        years.into_iter().map(|y| self.value_at(y)).sum()
    }
}

/// Emissions and coal production pathways of one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioPathways {
    /// CO2 emissions in Gt / yr
    pub emissions: Pathway,
    /// Coal primary energy in EJ / yr
    pub production: Pathway,
}

impl ScenarioPathways {
    /// Scenario identifier shared by both pathways.
    pub fn scenario(&self) -> &str {
        self.emissions.scenario()
    }
}

/// Builds [`ScenarioPathways`] from a dataset.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioExtractor<'a> {
    dataset: &'a ScenarioDataset,
    config: &'a ModelConfig,
}

impl<'a> ScenarioExtractor<'a> {
    /// Create an extractor reading `dataset` with the variables and sample
    /// grid of `config`.
    pub fn new(dataset: &'a ScenarioDataset, config: &'a ModelConfig) -> Self {
        Self { dataset, config }
    }

    /// Extract emissions (scaled to Gt) and production pathways.
    ///
    /// # Errors
    ///
    /// `ModelError::Lookup` if either row is absent,
    /// `ModelError::MissingSample` if a sample year is blank.
    pub fn extract(&self, scenario: &str) -> Result<ScenarioPathways, ModelError> {
        let emissions = self.pathway(
            scenario,
            &self.config.emissions_variable,
            self.config.emissions_divisor,
        )?;
        let production = self.pathway(scenario, &self.config.production_variable, 1.0)?;
        Ok(ScenarioPathways {
            emissions,
            production,
        })
    }

    /// Interpolate one (scenario, variable) row, dividing values by `divisor`.
    pub fn pathway(
        &self,
        scenario: &str,
        variable: &str,
        divisor: f64,
    ) -> Result<Pathway, ModelError> {
        let row = self.dataset.get(scenario, variable)?;
        let years = self.config.sample_years();
        let values: Vec<f64> = row
            .values_at(&years)?
            .into_iter()
            .map(|v| v / divisor)
            .collect();
        Pathway::new(scenario, variable, &years, &values)
    }
}
