//! CSV snapshot reader.

use crate::error::LoaderError;
use carbon_models::{ScenarioDataset, ScenarioRow};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Header of the scenario identifier column.
pub const SCENARIO_COLUMN: &str = "Scenario";

/// Header of the variable name column.
pub const VARIABLE_COLUMN: &str = "Variable";

/// Load a snapshot CSV from disk.
///
/// # Errors
///
/// `LoaderError::FileNotFound` if `path` does not exist, otherwise any
/// error of [`read_dataset`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<ScenarioDataset, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let dataset = read_dataset(file)?;

    info!(
        path = %path.display(),
        rows = dataset.len(),
        scenarios = dataset.scenarios().len(),
        "Loaded scenario dataset"
    );
    Ok(dataset)
}

/// Read a snapshot CSV from any reader.
///
/// Rows are kept in file order. Blank year cells are absent samples. When a
/// (scenario, variable) pair repeats, the first row wins.
pub fn read_dataset<R: Read>(reader: R) -> Result<ScenarioDataset, LoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);
    let scenario_idx = required_column(&header_map, SCENARIO_COLUMN)?;
    let variable_idx = required_column(&header_map, VARIABLE_COLUMN)?;
    let year_columns = year_columns(&headers);

    debug!(
        columns = headers.len(),
        year_columns = year_columns.len(),
        "Parsed snapshot header"
    );

    let mut dataset = ScenarioDataset::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row = parse_row(&record, line, scenario_idx, variable_idx, &year_columns, &headers)?;

        if !dataset.push(row) {
            if let Some(dup) = dataset.duplicates().last() {
                warn!(
                    scenario = %dup.scenario,
                    variable = %dup.variable,
                    line,
                    "Duplicate row ignored; first occurrence kept"
                );
            }
        }
    }

    Ok(dataset)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}

fn required_column(map: &HashMap<String, usize>, name: &str) -> Result<usize, LoaderError> {
    map.get(&name.to_lowercase())
        .copied()
        .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
}

/// `(column index, year)` for every header that is an integer.
fn year_columns(headers: &StringRecord) -> Vec<(usize, i32)> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            normalize_header_name(name)
                .parse::<i32>()
                .ok()
                .map(|year| (idx, year))
        })
        .collect()
}

fn parse_row(
    record: &StringRecord,
    line: u64,
    scenario_idx: usize,
    variable_idx: usize,
    year_columns: &[(usize, i32)],
    headers: &StringRecord,
) -> Result<ScenarioRow, LoaderError> {
    let scenario = record.get(scenario_idx).unwrap_or_default();
    let variable = record.get(variable_idx).unwrap_or_default();
    let mut row = ScenarioRow::new(scenario, variable);

    for &(idx, year) in year_columns {
        let cell = record.get(idx).unwrap_or_default();
        if cell.is_empty() {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| LoaderError::InvalidValue {
            line,
            column: headers.get(idx).unwrap_or_default().to_string(),
            value: cell.to_string(),
        })?;
        row.insert(year, value);
    }

    Ok(row)
}
