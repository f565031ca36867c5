//! In-memory scenario dataset.
//!
//! Rows are identified by (scenario, variable) and hold year → value
//! samples. The index is built as rows are pushed so lookups are a pair of
//! hash lookups instead of a scan. The first row pushed for a key wins; later
//! rows with the same key are kept out of the index and reported through
//! [`ScenarioDataset::duplicates`].

use crate::error::ModelError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One (scenario, variable) series.
///
/// # Example
///
/// ```
/// use carbon_models::ScenarioRow;
///
/// let row = ScenarioRow::new("NGFS2_Current Policies", "Primary Energy|Coal")
///     .with_sample(2020, 160.0)
///     .with_sample(2025, 158.0);
/// assert_eq!(row.sample(2025), Some(158.0));
/// assert_eq!(row.sample(2030), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    scenario: String,
    variable: String,
    samples: BTreeMap<i32, f64>,
}

impl ScenarioRow {
    /// Create an empty row.
    pub fn new(scenario: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            variable: variable.into(),
            samples: BTreeMap::new(),
        }
    }

    /// Builder-style sample insertion.
    pub fn with_sample(mut self, year: i32, value: f64) -> Self {
        self.insert(year, value);
        self
    }

    /// Set the value for `year`, replacing any previous value.
    pub fn insert(&mut self, year: i32, value: f64) {
        self.samples.insert(year, value);
    }

    /// Scenario identifier.
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    /// Variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Value at `year`, if present.
    pub fn sample(&self, year: i32) -> Option<f64> {
        self.samples.get(&year).copied()
    }

    /// All samples in ascending year order.
    pub fn samples(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.samples.iter().map(|(&y, &v)| (y, v))
    }

    /// Number of samples present.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Values at the given years, failing on the first missing one.
    ///
    /// # Errors
    ///
    /// `ModelError::MissingSample` naming the first year without a value.
    pub fn values_at(&self, years: &[i32]) -> Result<Vec<f64>, ModelError> {
        years
            .iter()
            .map(|&year| {
                self.sample(year).ok_or_else(|| ModelError::MissingSample {
                    scenario: self.scenario.clone(),
                    variable: self.variable.clone(),
                    year,
                })
            })
            .collect()
    }
}

/// A row ignored because its key was already indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRow {
    /// Scenario identifier
    pub scenario: String,
    /// Variable name
    pub variable: String,
    /// Position of the row that was kept
    pub kept_index: usize,
    /// Position of the ignored row
    pub ignored_index: usize,
}

/// Read-only table of scenario rows.
#[derive(Debug, Clone, Default)]
pub struct ScenarioDataset {
    rows: Vec<ScenarioRow>,
    index: HashMap<String, HashMap<String, usize>>,
    duplicates: Vec<DuplicateRow>,
}

impl ScenarioDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from rows in order.
    pub fn from_rows(rows: impl IntoIterator<Item = ScenarioRow>) -> Self {
        let mut dataset = Self::new();
        for row in rows {
            dataset.push(row);
        }
        dataset
    }

    /// Append a row.
    ///
    /// Returns `false` if a row with the same (scenario, variable) was
    /// already present; the new row is stored but not indexed.
    pub fn push(&mut self, row: ScenarioRow) -> bool {
        let position = self.rows.len();
        let by_variable = self.index.entry(row.scenario.clone()).or_default();

        let indexed = match by_variable.get(&row.variable) {
            Some(&kept_index) => {
                self.duplicates.push(DuplicateRow {
                    scenario: row.scenario.clone(),
                    variable: row.variable.clone(),
                    kept_index,
                    ignored_index: position,
                });
                false
            }
            None => {
                by_variable.insert(row.variable.clone(), position);
                true
            }
        };

        self.rows.push(row);
        indexed
    }

    /// Look up the row for (scenario, variable).
    ///
    /// # Errors
    ///
    /// `ModelError::Lookup` if either key is absent.
    pub fn get(&self, scenario: &str, variable: &str) -> Result<&ScenarioRow, ModelError> {
        self.find(scenario, variable)
            .ok_or_else(|| ModelError::lookup(scenario, variable))
    }

    /// Look up the row for (scenario, variable), if any.
    pub fn find(&self, scenario: &str, variable: &str) -> Option<&ScenarioRow> {
        let position = *self.index.get(scenario)?.get(variable)?;
        self.rows.get(position)
    }

    /// True if at least one row carries the scenario identifier.
    pub fn has_scenario(&self, scenario: &str) -> bool {
        self.index.contains_key(scenario)
    }

    /// Distinct scenario identifiers in sorted order.
    pub fn scenarios(&self) -> BTreeSet<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    /// All rows, including unindexed duplicates, in insertion order.
    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }

    /// Rows ignored because their key appeared earlier.
    pub fn duplicates(&self) -> &[DuplicateRow] {
        &self.duplicates
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
