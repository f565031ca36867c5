//! Sweep command implementation
//!
//! Varies one parameter over its default range, holding the others fixed.

use super::ParameterArgs;
use crate::config::CliConfig;
use crate::output::{write_sweep, OutputFormat};
use crate::Result;
use adapter_loader::load_dataset;
use carbon_risk::{SweepDriver, SweepParameter};
use clap::Args;
use std::io::Write;
use tracing::info;

/// Arguments of `carbonarb sweep`.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct SweepArgs {
    /// Parameter to sweep (scc, lcoe, beta)
    #[arg(short, long)]
    pub parameter: String,

    /// Number of grid points (defaults to sweep.grid_size)
    #[arg(short = 'n', long)]
    pub points: Option<usize>,

    /// Fixed values of the other parameters
    #[command(flatten)]
    pub params: ParameterArgs,

    /// Output format (table, csv, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Evaluate grid points in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Run the sweep command
pub fn run<W: Write>(config: &CliConfig, args: &SweepArgs, out: &mut W) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let parameter: SweepParameter = args.parameter.parse()?;
    let fixed = args.params.resolve(&config.defaults)?;
    let points = args.points.unwrap_or(config.sweep.grid_size);
    let (start, end) = parameter.default_range();

    info!("Starting sweep...");
    info!("  Parameter: {} over [{}, {}]", parameter.label(), start, end);
    info!("  Points: {}", points);
    for other in SweepParameter::ALL.iter().filter(|&&p| p != parameter) {
        info!("  {} fixed at {}", other.label(), other.get(&fixed));
    }

    let dataset = load_dataset(&config.data_path)?;
    let table = SweepDriver::new(&dataset, &config.model)
        .with_parallel(config.sweep.parallel_config(args.parallel))
        .sweep(parameter, &fixed, points)?;

    write_sweep(out, &table, format)?;

    info!("Sweep complete");
    Ok(())
}
