//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer and log progress through `tracing`.

pub mod check;
pub mod evaluate;
pub mod sweep;

use crate::{CliError, Result};
use carbon_models::Parameters;
use clap::Args;
use std::ops::RangeInclusive;

/// Accepted social cost of carbon (USD per tonne CO2).
pub const SCC_RANGE: RangeInclusive<f64> = 1.0..=200.0;
/// Accepted global LCOE (USD per MWh).
pub const LCOE_RANGE: RangeInclusive<f64> = 1.0..=200.0;
/// Accepted unleveraged beta.
pub const BETA_RANGE: RangeInclusive<f64> = 0.0..=2.0;

/// Parameter overrides shared by `evaluate` and `sweep`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Args)]
pub struct ParameterArgs {
    /// Social cost of carbon (USD per ton CO2)
    #[arg(long)]
    pub scc: Option<f64>,

    /// Global average LCOE (USD/MWh for renewables)
    #[arg(long)]
    pub lcoe: Option<f64>,

    /// Unleveraged beta
    #[arg(long)]
    pub beta: Option<f64>,
}

impl ParameterArgs {
    /// Fill unset values from `defaults` and check the accepted ranges.
    pub fn resolve(&self, defaults: &Parameters) -> Result<Parameters> {
        let params = Parameters::new(
            self.scc.unwrap_or(defaults.social_cost_of_carbon),
            self.lcoe.unwrap_or(defaults.global_lcoe),
            self.beta.unwrap_or(defaults.beta),
        );
        let violations = parameter_violations(&params);
        if violations.is_empty() {
            Ok(params)
        } else {
            Err(CliError::InvalidArgument(violations.join("; ")))
        }
    }
}

/// Messages for every parameter outside its accepted range.
pub fn parameter_violations(params: &Parameters) -> Vec<String> {
    [
        ("scc", params.social_cost_of_carbon, SCC_RANGE),
        ("lcoe", params.global_lcoe, LCOE_RANGE),
        ("beta", params.beta, BETA_RANGE),
    ]
    .into_iter()
    .filter(|(_, value, range)| !range.contains(value))
    .map(|(name, value, range)| {
        format!(
            "{} must be within [{}, {}], got {}",
            name,
            range.start(),
            range.end(),
            value
        )
    })
    .collect()
}
