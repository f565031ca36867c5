//! carbonarb - Carbon Arbitrage Opportunity Calculator
//!
//! Compares the cost of phasing out coal against the social benefit of the
//! emissions avoided, using IPCC AR6 / NGFS scenario snapshots.
//!
//! # Commands
//!
//! - `carbonarb evaluate [--scc N] [--lcoe N] [--beta N]` - Headline figures
//! - `carbonarb sweep --parameter <scc|lcoe|beta>` - One-parameter sweep
//! - `carbonarb check` - Verify the dataset holds the required series

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands::{self, evaluate::EvaluateArgs, sweep::SweepArgs};
use service_cli::config::CliConfig;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Carbon arbitrage opportunity calculator
#[derive(Parser)]
#[command(name = "carbonarb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "carbonarb.toml")]
    config: PathBuf,

    /// Scenario snapshot CSV (overrides data_path)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the arbitrage for one parameter set
    Evaluate(EvaluateArgs),

    /// Sweep one parameter over its default range
    Sweep(SweepArgs),

    /// Check the dataset and configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_env_override();
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    init_tracing(&log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    config.validate()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(&config, &args, &mut out)?,
        Commands::Sweep(args) => commands::sweep::run(&config, &args, &mut out)?,
        Commands::Check => commands::check::run(&config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
