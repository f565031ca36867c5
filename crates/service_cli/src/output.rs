//! Result rendering.
//!
//! Results go to stdout in one of three formats; logs go to stderr.

use crate::{CliError, Result};
use carbon_models::{EvaluationResult, Parameters};
use carbon_risk::{Metric, SweepTable};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Single evaluation as written by `json` output.
#[derive(Debug, Serialize)]
pub struct EvaluationReport<'a> {
    /// Parameters evaluated
    pub parameters: &'a Parameters,
    /// Annual discount rate implied by beta
    pub discount_rate: f64,
    /// Headline figures
    pub result: &'a EvaluationResult,
}

/// Write one evaluation.
pub fn write_evaluation<W: Write>(
    out: &mut W,
    report: &EvaluationReport<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for metric in Metric::ALL {
                writeln!(
                    out,
                    "{}: {:.2} {}",
                    metric.label(),
                    metric.extract(report.result),
                    metric.unit()
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record([
                "scc",
                "lcoe",
                "beta",
                "discount_rate",
                "avoided_emissions",
                "cost",
                "benefit",
                "arbitrage",
                "baseline_production_2022",
            ])?;
            let p = report.parameters;
            let r = report.result;
            writer.write_record(
                [
                    p.social_cost_of_carbon,
                    p.global_lcoe,
                    p.beta,
                    report.discount_rate,
                    r.avoided_emissions,
                    r.cost,
                    r.benefit,
                    r.arbitrage,
                    r.baseline_production_2022,
                ]
                .iter()
                .map(|v| v.to_string()),
            )?;
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write a sweep table.
pub fn write_sweep<W: Write>(out: &mut W, table: &SweepTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_sweep_table(out, table)?,
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(
                std::iter::once(table.parameter().name())
                    .chain(["avoided_emissions", "cost", "benefit", "arbitrage"]),
            )?;
            for point in table {
                writer.write_record(
                    std::iter::once(point.value)
                        .chain(Metric::ALL.iter().map(|m| m.extract(&point.result)))
                        .map(|v| v.to_string()),
                )?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

const COLUMN_WIDTH: usize = 14;

fn write_sweep_table<W: Write>(out: &mut W, table: &SweepTable) -> Result<()> {
    let rule = |left: &str, mid: &str, right: &str| {
        let cell = "─".repeat(COLUMN_WIDTH + 2);
        format!("{}{}{}", left, vec![cell; 5].join(mid), right)
    };

    writeln!(out, "Sweeping {}", table.parameter().label())?;
    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(
        out,
        "│ {:>w$} │ {:>w$} │ {:>w$} │ {:>w$} │ {:>w$} │",
        table.parameter().name(),
        "Avoided GtCO2",
        "Cost (tn $)",
        "Benefit (tn $)",
        "Arbitrage",
        w = COLUMN_WIDTH
    )?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    for point in table {
        let r = &point.result;
        writeln!(
            out,
            "│ {:>w$.2} │ {:>w$.2} │ {:>w$.2} │ {:>w$.2} │ {:>w$.2} │",
            point.value,
            r.avoided_emissions,
            r.cost,
            r.benefit,
            r.arbitrage,
            w = COLUMN_WIDTH
        )?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> EvaluationResult {
        EvaluationResult {
            avoided_emissions: 955.741,
            cost: 55.6646,
            benefit: 76.4593,
            arbitrage: 20.7946,
            baseline_production_2022: 5459.33,
        }
    }

    fn render(format: OutputFormat) -> String {
        let params = Parameters::default();
        let result = result();
        let report = EvaluationReport {
            parameters: &params,
            discount_rate: 0.0279,
            result: &result,
        };
        let mut buf = Vec::new();
        write_evaluation(&mut buf, &report, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Supported: json, csv, table"));
    }

    #[test]
    fn test_evaluation_table_lines() {
        let text = render(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Total emissions prevented: 955.74 GtCO2",
                "Cost: 55.66 trillion dollars",
                "Benefit: 76.46 trillion dollars",
                "Carbon arbitrage opportunity: 20.79 trillion dollars",
            ]
        );
    }

    #[test]
    fn test_evaluation_csv() {
        let text = render(OutputFormat::Csv);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("scc,lcoe,beta,discount_rate"));
        assert!(lines.next().unwrap().starts_with("80,59.25,0.91,0.0279,955.741"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_evaluation_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["parameters"]["beta"], 0.91);
        assert_eq!(value["result"]["cost"], 55.6646);
    }
}
