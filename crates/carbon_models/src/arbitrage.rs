//! Carbon arbitrage evaluation.
//!
//! Compares a baseline ("current policies") scenario against a policy
//! ("net-zero") scenario:
//!
//! ```text
//! avoided_emissions = E(baseline) - E(policy)                      [Gt CO2]
//! cost              = lcoe * MWh(P(baseline) - P(policy)) / 1e12   [trillion]
//! benefit           = avoided_emissions * scc / 1e3                [trillion]
//! arbitrage         = benefit - cost
//! ```
//!
//! where `E` is anchored cumulative emissions and `P` discounted cumulative
//! coal production. Both scenarios are discounted at the same rate so the
//! comparison isolates the scenario effect.

use crate::config::ModelConfig;
use crate::dataset::ScenarioDataset;
use crate::error::ModelError;
use crate::integrator::PathwayTotals;
use crate::scenario::ScenarioExtractor;
use carbon_core::discounting::{AnnualDiscountCurve, DiscountCurve};
use carbon_core::units::ej_to_mwh;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Price and risk inputs of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Social cost of carbon (currency per tonne CO2)
    pub social_cost_of_carbon: f64,
    /// Global average levelised cost of renewable energy (currency per MWh)
    pub global_lcoe: f64,
    /// Unleveraged equity beta
    pub beta: f64,
}

impl Parameters {
    /// Create parameters.
    pub fn new(social_cost_of_carbon: f64, global_lcoe: f64, beta: f64) -> Self {
        Self {
            social_cost_of_carbon,
            global_lcoe,
            beta,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(80.0, 59.25, 0.91)
    }
}

/// Headline figures of one evaluation. Monetary fields are in trillions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Cumulative emissions avoided by the policy scenario (Gt CO2)
    pub avoided_emissions: f64,
    /// Value of coal production foregone, priced at the LCOE
    pub cost: f64,
    /// Avoided emissions priced at the social cost of carbon
    pub benefit: f64,
    /// `benefit - cost`
    pub arbitrage: f64,
    /// Baseline coal production at the anchor year (Mt coal)
    pub baseline_production_2022: f64,
}

/// Evaluates the arbitrage between the configured baseline and policy
/// scenarios.
///
/// Holds only borrowed, read-only state; one evaluator can serve any number
/// of evaluations, including concurrent ones.
#[derive(Debug, Clone, Copy)]
pub struct ArbitrageEvaluator<'a> {
    dataset: &'a ScenarioDataset,
    config: &'a ModelConfig,
}

impl<'a> ArbitrageEvaluator<'a> {
    /// Create an evaluator.
    pub fn new(dataset: &'a ScenarioDataset, config: &'a ModelConfig) -> Self {
        Self { dataset, config }
    }

    /// Model configuration in use.
    pub fn config(&self) -> &ModelConfig {
        self.config
    }

    /// Totals for one scenario at the given annual discount rate.
    pub fn scenario_totals(&self, scenario: &str, rate: f64) -> Result<PathwayTotals, ModelError> {
        let pathways = ScenarioExtractor::new(self.dataset, self.config).extract(scenario)?;
        let curve = AnnualDiscountCurve::try_new(rate)?;
        self.config.integrator().integrate(&pathways, &curve)
    }

    /// Evaluate baseline against policy.
    ///
    /// # Errors
    ///
    /// Configuration errors, then any lookup, range or anchor error of
    /// either scenario.
    pub fn evaluate(&self, params: &Parameters) -> Result<EvaluationResult, ModelError> {
        self.config.validate()?;

        let rate = self.config.discount.rate(params.beta);
        let baseline = self.scenario_totals(&self.config.baseline_scenario, rate)?;
        let policy = self.scenario_totals(&self.config.policy_scenario, rate)?;

        let avoided_emissions = baseline.total_emissions - policy.total_emissions;
        let production_increase = baseline.discounted_production - policy.discounted_production;

        let cost = params.global_lcoe * ej_to_mwh(production_increase) / 1e12;
        let benefit = avoided_emissions * params.social_cost_of_carbon / 1e3;

        let result = EvaluationResult {
            avoided_emissions,
            cost,
            benefit,
            arbitrage: benefit - cost,
            baseline_production_2022: baseline.production_at_anchor,
        };

        debug!(
            scc = params.social_cost_of_carbon,
            lcoe = params.global_lcoe,
            beta = params.beta,
            rate,
            arbitrage = result.arbitrage,
            "Evaluated carbon arbitrage"
        );

        Ok(result)
    }
}

/// Evaluate with the default [`ModelConfig`].
///
/// # Example
///
/// ```
/// use carbon_models::{evaluate, ModelError, ScenarioDataset};
///
/// let empty = ScenarioDataset::new();
/// let err = evaluate(80.0, 59.25, 0.91, &empty).unwrap_err();
/// assert!(matches!(err, ModelError::Lookup { .. }));
/// ```
pub fn evaluate(
    social_cost_of_carbon: f64,
    global_lcoe: f64,
    beta: f64,
    dataset: &ScenarioDataset,
) -> Result<EvaluationResult, ModelError> {
    let config = ModelConfig::default();
    ArbitrageEvaluator::new(dataset, &config).evaluate(&Parameters::new(
        social_cost_of_carbon,
        global_lcoe,
        beta,
    ))
}

/// Present value of a flat annual amount over the configured horizon.
///
/// Used to express the discount rate's effect independently of any
/// scenario data.
pub fn horizon_annuity_factor(config: &ModelConfig, beta: f64) -> Result<f64, ModelError> {
    let curve = AnnualDiscountCurve::try_new(config.discount.rate(beta))?;
    let anchor = config.horizon.anchor_year;
    config
        .horizon
        .years()
        .map(|year| -> Result<f64, ModelError> {
            Ok(curve.discount_factor(f64::from(year - anchor))?)
        })
        .sum()
}
