//! # adapter_loader (A: Adapter)
//!
//! Reads scenario snapshot CSV files into a [`ScenarioDataset`].
//!
//! The expected layout is the IPCC AR6 / NGFS snapshot export: one row per
//! (model, scenario, region, variable) with descriptive columns followed by
//! one column per sample year.
//!
//! ```text
//! Model,Scenario,Region,Variable,Unit,2010,2015,...,2100
//! ```
//!
//! Only `Scenario`, `Variable` and the year columns are read. Header names
//! are matched case-insensitively.
//!
//! ## Example
//!
//! ```
//! use adapter_loader::read_dataset;
//!
//! let csv = "Model,Scenario,Region,Variable,Unit,2020,2025\n\
//!            M,S,World,Emissions|CO2,Mt CO2/yr,36000,34000\n";
//! let dataset = read_dataset(csv.as_bytes()).unwrap();
//! let row = dataset.get("S", "Emissions|CO2").unwrap();
//! assert_eq!(row.sample(2025), Some(34000.0));
//! ```
//!
//! [`ScenarioDataset`]: carbon_models::ScenarioDataset

#![deny(missing_docs)]

mod error;
mod reader;

pub use error::LoaderError;
pub use reader::{load_dataset, read_dataset, SCENARIO_COLUMN, VARIABLE_COLUMN};
