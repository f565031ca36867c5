//! Yearly summation of scenario pathways.
//!
//! Pathways are summed at whole calendar years, not integrated
//! continuously: the underlying series are annual quantities.

use crate::config::Horizon;
use crate::error::ModelError;
use crate::scenario::{Pathway, ScenarioPathways};
use carbon_core::discounting::DiscountCurve;
use carbon_core::units::ej_to_mt_coal;
use tracing::debug;

/// Per-scenario totals over the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathwayTotals {
    /// Anchored cumulative emissions (Gt CO2)
    pub total_emissions: f64,
    /// Cumulative interpolated emissions before anchoring (Gt CO2)
    pub raw_emissions: f64,
    /// `anchor_emissions / emissions(anchor_year)`
    pub anchor_scale: f64,
    /// Coal production at the anchor year (Mt coal)
    pub production_at_anchor: f64,
    /// Discounted cumulative coal production (EJ)
    pub discounted_production: f64,
}

/// Sums emissions and discounted production over a [`Horizon`].
///
/// # Example
///
/// ```
/// use carbon_core::discounting::AnnualDiscountCurve;
/// use carbon_models::{Horizon, Pathway, PathwayIntegrator};
///
/// let integrator = PathwayIntegrator::new(Horizon::default(), 15.5);
/// let flat = Pathway::new("S", "Emissions|CO2", &[2010, 2100], &[2.0, 2.0]).unwrap();
///
/// // Flat emissions anchor to 15.5 Gt in every one of the 78 years.
/// let total = integrator.cumulative_emissions(&flat).unwrap();
/// assert!((total - 78.0 * 15.5).abs() < 1e-9);
///
/// let production = Pathway::new("S", "Primary Energy|Coal", &[2010, 2100], &[1.0, 1.0]).unwrap();
/// let undiscounted = integrator
///     .discounted_production(&production, &AnnualDiscountCurve::new(0.0))
///     .unwrap();
/// assert_eq!(undiscounted, 78.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathwayIntegrator {
    horizon: Horizon,
    anchor_emissions: f64,
}

impl PathwayIntegrator {
    /// Create an integrator anchoring emissions at `horizon.anchor_year`
    /// to `anchor_emissions` (Gt CO2).
    pub fn new(horizon: Horizon, anchor_emissions: f64) -> Self {
        Self {
            horizon,
            anchor_emissions,
        }
    }

    /// Summation window.
    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Trusted emissions at the anchor year.
    pub fn anchor_emissions(&self) -> f64 {
        self.anchor_emissions
    }

    /// Factor mapping the interpolated anchor-year value onto the trusted one.
    ///
    /// # Errors
    ///
    /// `ModelError::DegenerateAnchor` if the interpolated value is zero or
    /// not finite.
    pub fn anchor_scale(&self, emissions: &Pathway) -> Result<f64, ModelError> {
        let year = self.horizon.anchor_year;
        let value = emissions.value_at(year)?;
        if value == 0.0 || !value.is_finite() {
            return Err(ModelError::DegenerateAnchor {
                scenario: emissions.scenario().to_string(),
                year,
                value,
            });
        }
        Ok(self.anchor_emissions / value)
    }

    /// Interpolated emissions summed over the horizon, without anchoring.
    pub fn raw_emissions(&self, emissions: &Pathway) -> Result<f64, ModelError> {
        emissions.sum_over(self.horizon.years())
    }

    /// Anchored cumulative emissions.
    pub fn cumulative_emissions(&self, emissions: &Pathway) -> Result<f64, ModelError> {
        let raw = self.raw_emissions(emissions)?;
        Ok(raw * self.anchor_scale(emissions)?)
    }

    /// Production summed over the horizon, each year discounted back to the
    /// anchor year.
    pub fn discounted_production<C>(
        &self,
        production: &Pathway,
        curve: &C,
    ) -> Result<f64, ModelError>
    where
        C: DiscountCurve<f64>,
    {
        let anchor = self.horizon.anchor_year;
        self.horizon
            .years()
            .map(|year| -> Result<f64, ModelError> {
                let value = production.value_at(year)?;
                Ok(curve.present_value(value, f64::from(year - anchor))?)
            })
            .sum()
    }

    /// All totals for one scenario.
    pub fn integrate<C>(
        &self,
        pathways: &ScenarioPathways,
        curve: &C,
    ) -> Result<PathwayTotals, ModelError>
    where
        C: DiscountCurve<f64>,
    {
        let raw_emissions = self.raw_emissions(&pathways.emissions)?;
        let anchor_scale = self.anchor_scale(&pathways.emissions)?;
        let production_at_anchor =
            ej_to_mt_coal(pathways.production.value_at(self.horizon.anchor_year)?);
        let discounted_production = self.discounted_production(&pathways.production, curve)?;

        let totals = PathwayTotals {
            total_emissions: raw_emissions * anchor_scale,
            raw_emissions,
            anchor_scale,
            production_at_anchor,
            discounted_production,
        };

        debug!(
            scenario = pathways.scenario(),
            total_emissions = totals.total_emissions,
            anchor_scale = totals.anchor_scale,
            discounted_production = totals.discounted_production,
            "Integrated scenario pathways"
        );

        Ok(totals)
    }
}
