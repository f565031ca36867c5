//! Evaluate command implementation
//!
//! Evaluates the carbon arbitrage opportunity for one parameter set.

use super::ParameterArgs;
use crate::config::CliConfig;
use crate::output::{write_evaluation, EvaluationReport, OutputFormat};
use crate::Result;
use adapter_loader::load_dataset;
use carbon_models::{horizon_annuity_factor, ArbitrageEvaluator};
use clap::Args;
use std::io::Write;
use tracing::info;

/// Arguments of `carbonarb evaluate`.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct EvaluateArgs {
    /// Parameter overrides
    #[command(flatten)]
    pub params: ParameterArgs,

    /// Output format (table, csv, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Also print discounting and production details (table format only)
    #[arg(long)]
    pub detail: bool,
}

/// Run the evaluate command
pub fn run<W: Write>(config: &CliConfig, args: &EvaluateArgs, out: &mut W) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let params = args.params.resolve(&config.defaults)?;

    info!("Starting evaluation...");
    info!("  Data: {}", config.data_path.display());
    info!(
        "  SCC: {}, LCOE: {}, beta: {}",
        params.social_cost_of_carbon, params.global_lcoe, params.beta
    );

    let dataset = load_dataset(&config.data_path)?;
    let result = ArbitrageEvaluator::new(&dataset, &config.model).evaluate(&params)?;
    let discount_rate = config.model.discount.rate(params.beta);

    let report = EvaluationReport {
        parameters: &params,
        discount_rate,
        result: &result,
    };
    write_evaluation(out, &report, format)?;

    if args.detail && format == OutputFormat::Table {
        let annuity = horizon_annuity_factor(&config.model, params.beta)?;
        let horizon = config.model.horizon;
        writeln!(out)?;
        writeln!(out, "Discount rate: {:.4}%", discount_rate * 100.0)?;
        writeln!(
            out,
            "Annuity factor {}-{}: {:.4}",
            horizon.start, horizon.end, annuity
        )?;
        writeln!(
            out,
            "Baseline coal production {}: {:.2} Mt coal",
            horizon.anchor_year, result.baseline_production_2022
        )?;
    }

    info!("Evaluation complete");
    Ok(())
}
