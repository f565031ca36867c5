//! Check command implementation
//!
//! Verifies that the configured dataset holds every series the model reads.

use crate::config::CliConfig;
use crate::{CliError, Result};
use adapter_loader::load_dataset;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{info, warn};

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Checking dataset...");

    let model = &config.model;
    let dataset = load_dataset(&config.data_path)?;
    let sample_years = model.sample_years();

    writeln!(out, "Dataset: {}", config.data_path.display())?;
    writeln!(
        out,
        "  {} rows, {} scenarios",
        dataset.len(),
        dataset.scenarios().len()
    )?;

    let mut rows_per_scenario: BTreeMap<&str, usize> = BTreeMap::new();
    for row in dataset.rows() {
        *rows_per_scenario.entry(row.scenario()).or_default() += 1;
    }
    for (scenario, count) in &rows_per_scenario {
        writeln!(out, "  {}: {} rows", scenario, count)?;
    }

    let mut problems = 0;
    for scenario in [&model.baseline_scenario, &model.policy_scenario] {
        for variable in [&model.emissions_variable, &model.production_variable] {
            let status = match dataset.get(scenario, variable) {
                Ok(row) => match row.values_at(&sample_years) {
                    Ok(_) => format!("ok ({} samples)", row.sample_count()),
                    Err(e) => {
                        problems += 1;
                        format!("incomplete: {}", e)
                    }
                },
                Err(_) => {
                    problems += 1;
                    "missing".to_string()
                }
            };
            writeln!(out, "  [{}] {}: {}", scenario, variable, status)?;
        }
    }

    for dup in dataset.duplicates() {
        warn!(
            scenario = %dup.scenario,
            variable = %dup.variable,
            "Duplicate row"
        );
        writeln!(
            out,
            "  duplicate: [{}] {} (row {} ignored, row {} kept)",
            dup.scenario, dup.variable, dup.ignored_index, dup.kept_index
        )?;
    }

    writeln!(
        out,
        "Discount rate at beta {}: {:.4}%",
        config.defaults.beta,
        model.discount.rate(config.defaults.beta) * 100.0
    )?;

    if problems > 0 {
        return Err(CliError::CheckFailed(problems));
    }

    writeln!(out, "All required series present")?;
    info!("Check complete");
    Ok(())
}
