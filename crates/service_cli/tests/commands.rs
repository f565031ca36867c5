//! Command tests against a synthetic snapshot written to a temp dir.

use approx::assert_relative_eq;
use service_cli::commands::evaluate::{self, EvaluateArgs};
use service_cli::commands::sweep::{self, SweepArgs};
use service_cli::commands::{check, ParameterArgs};
use service_cli::config::CliConfig;
use service_cli::CliError;
use std::io::Write;
use tempfile::TempDir;

const YEARS: std::ops::RangeInclusive<i32> = 2010..=2100;

/// Baseline flat; the net-zero case phases out linearly to 5% by 2050.
fn write_snapshot(dir: &TempDir, include_policy_coal: bool) -> std::path::PathBuf {
    let path = dir.path().join("snapshot.csv");
    let mut file = std::fs::File::create(&path).unwrap();

    let years: Vec<String> = YEARS.step_by(5).map(|y| y.to_string()).collect();
    writeln!(file, "Model,Scenario,Region,Variable,Unit,{}", years.join(",")).unwrap();

    for (scenario, phase_out) in [
        ("NGFS2_Current Policies", false),
        ("NGFS2_Net-Zero 2050", true),
    ] {
        for (variable, base) in [("Emissions|CO2", 36_000.0), ("Primary Energy|Coal", 160.0)] {
            if phase_out && !include_policy_coal && variable == "Primary Energy|Coal" {
                continue;
            }
            let values: Vec<String> = YEARS
                .step_by(5)
                .map(|year| {
                    let decline = if phase_out && year > 2020 {
                        (1.0 - f64::from(year - 2020) / 30.0).max(0.05)
                    } else {
                        1.0
                    };
                    (base * decline).to_string()
                })
                .collect();
            writeln!(
                file,
                "GCAM,{},World,{},unit,{}",
                scenario,
                variable,
                values.join(",")
            )
            .unwrap();
        }
    }
    path
}

fn config_for(dir: &TempDir, include_policy_coal: bool) -> CliConfig {
    CliConfig {
        data_path: write_snapshot(dir, include_policy_coal),
        ..CliConfig::default()
    }
}

fn evaluate_args(format: &str) -> EvaluateArgs {
    EvaluateArgs {
        params: ParameterArgs::default(),
        format: format.to_string(),
        detail: false,
    }
}

fn sweep_args(parameter: &str, format: &str) -> SweepArgs {
    SweepArgs {
        parameter: parameter.to_string(),
        points: None,
        params: ParameterArgs::default(),
        format: format.to_string(),
        parallel: false,
    }
}

#[test]
fn test_evaluate_prints_headline_figures() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let mut out = Vec::new();
    evaluate::run(&config, &evaluate_args("table"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Total emissions prevented: 955.74 GtCO2");
    assert_eq!(lines[1], "Cost: 55.66 trillion dollars");
    assert_eq!(lines[2], "Benefit: 76.46 trillion dollars");
    assert_eq!(lines[3], "Carbon arbitrage opportunity: 20.79 trillion dollars");
}

#[test]
fn test_evaluate_detail_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let args = EvaluateArgs {
        detail: true,
        ..evaluate_args("table")
    };
    let mut out = Vec::new();
    evaluate::run(&config, &args, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Discount rate: 2.7922%"));
    assert!(text.contains("Annuity factor 2023-2100: "));
    assert!(text.contains("Baseline coal production 2022: 5459.33 Mt coal"));
}

#[test]
fn test_evaluate_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let mut out = Vec::new();
    evaluate::run(&config, &evaluate_args("json"), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let arbitrage = value["result"]["arbitrage"].as_f64().unwrap();
    assert_relative_eq!(arbitrage, 20.79463367240735, max_relative = 1e-9);
    assert_relative_eq!(
        value["discount_rate"].as_f64().unwrap(),
        0.027922411907123974,
        max_relative = 1e-12
    );
}

#[test]
fn test_evaluate_rejects_out_of_range_beta() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let args = EvaluateArgs {
        params: ParameterArgs {
            beta: Some(2.5),
            ..ParameterArgs::default()
        },
        ..evaluate_args("table")
    };
    let err = evaluate::run(&config, &args, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
}

#[test]
fn test_evaluate_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = CliConfig {
        data_path: dir.path().join("nope.csv"),
        ..CliConfig::default()
    };
    let err = evaluate::run(&config, &evaluate_args("table"), &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("CSV file not found at: "));
}

#[test]
fn test_sweep_csv_has_header_and_twenty_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let mut out = Vec::new();
    sweep::run(&config, &sweep_args("beta", "csv"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "beta,avoided_emissions,cost,benefit,arbitrage");
    assert!(lines[1].starts_with("0,"));
    assert!(lines[20].starts_with("2,"));
}

#[test]
fn test_sweep_table_and_parallel_json_agree_on_points() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);

    let mut table_out = Vec::new();
    sweep::run(&config, &sweep_args("scc", "table"), &mut table_out).unwrap();
    let table_text = String::from_utf8(table_out).unwrap();
    assert!(table_text.starts_with("Sweeping Social Cost of Carbon"));
    // title, 3 rules, header, 20 rows
    assert_eq!(table_text.lines().count(), 25);

    let args = SweepArgs {
        parallel: true,
        points: Some(12),
        ..sweep_args("scc", "json")
    };
    let mut json_out = Vec::new();
    sweep::run(&config, &args, &mut json_out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();
    assert_eq!(value["parameter"], "scc");
    assert_eq!(value["points"].as_array().unwrap().len(), 12);
}

#[test]
fn test_sweep_unknown_parameter() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let err = sweep::run(&config, &sweep_args("gamma", "table"), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Sweep(_)));
}

#[test]
fn test_check_passes_on_complete_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, true);
    let mut out = Vec::new();
    check::run(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("4 rows, 2 scenarios"));
    assert!(text.contains("  NGFS2_Current Policies: 2 rows"));
    assert!(text.contains("  NGFS2_Net-Zero 2050: 2 rows"));
    assert!(text.contains("[NGFS2_Net-Zero 2050] Primary Energy|Coal: ok (19 samples)"));
    assert!(text.contains("All required series present"));
}

#[test]
fn test_check_reports_missing_series() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir, false);
    let mut out = Vec::new();
    let err = check::run(&config, &mut out).unwrap_err();

    assert!(matches!(err, CliError::CheckFailed(1)));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[NGFS2_Net-Zero 2050] Primary Energy|Coal: missing"));
}
