//! # carbon_risk (L4: Application)
//!
//! Sensitivity analysis of the carbon arbitrage model.
//!
//! This crate provides:
//! - One-parameter sweeps over social cost of carbon, LCOE or beta
//! - Evenly spaced sweep grids with per-parameter default ranges
//! - Sweep tables exposing one series per reported metric
//! - Rayon-based parallel evaluation of grid points
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            carbon_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  sweep/     - SweepParameter, SweepGrid │
//! │               SweepDriver, SweepTable   │
//! │  parallel/  - Rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          carbon_models (L2)             │
//! │  ArbitrageEvaluator, EvaluationResult   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Grid points are independent evaluations over read-only inputs, so the
//! sequential and parallel drivers return identical tables.
//!
//! ## Example
//!
//! ```
//! use carbon_models::{ModelConfig, Parameters, ScenarioDataset, ScenarioRow};
//! use carbon_risk::sweep::{Metric, SweepDriver, SweepParameter};
//!
//! let config = ModelConfig::default();
//! let mut dataset = ScenarioDataset::new();
//! for (scenario, coal) in [(&config.baseline_scenario, 160.0), (&config.policy_scenario, 80.0)] {
//!     let mut e = ScenarioRow::new(scenario.as_str(), "Emissions|CO2");
//!     let mut p = ScenarioRow::new(scenario.as_str(), "Primary Energy|Coal");
//!     for year in (2010..=2100).step_by(5) {
//!         e.insert(year, 36_000.0);
//!         p.insert(year, coal);
//!     }
//!     dataset.push(e);
//!     dataset.push(p);
//! }
//!
//! let driver = SweepDriver::new(&dataset, &config);
//! let table = driver
//!     .sweep(SweepParameter::Beta, &Parameters::default(), 20)
//!     .unwrap();
//! assert_eq!(table.len(), 20);
//! assert_eq!(table.values().first(), Some(&0.0));
//! assert_eq!(table.series(Metric::Cost).len(), 20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod parallel;
pub mod sweep;

pub use error::SweepError;
pub use parallel::ParallelConfig;
pub use sweep::{
    Metric, SweepDriver, SweepGrid, SweepParameter, SweepPoint, SweepTable, DEFAULT_GRID_SIZE,
};
