//! # carbon_models: Scenario Pathways and Arbitrage Evaluation
//!
//! ## Layer 2 (Models) Role
//!
//! Turns a parsed scenario dataset into the headline figures of the carbon
//! arbitrage calculation:
//!
//! ```text
//! ScenarioDataset ──▶ ScenarioExtractor ──▶ Pathway (emissions, production)
//!                                               │
//!                      DiscountRateModel ──▶ PathwayIntegrator
//!                                               │
//!                   baseline vs policy ──▶ ArbitrageEvaluator ──▶ EvaluationResult
//! ```
//!
//! - [`dataset`]: `ScenarioDataset` keyed by (scenario, variable)
//! - [`scenario`]: `ScenarioExtractor` and interpolated `Pathway`s
//! - [`integrator`]: `PathwayIntegrator` summing pathways over the horizon
//! - [`arbitrage`]: `ArbitrageEvaluator`, `Parameters`, `EvaluationResult`
//! - [`config`]: `ModelConfig` holding every tunable constant
//!
//! Everything here is a pure function of its inputs; no state survives
//! between evaluations.
//!
//! ## Example
//!
//! ```
//! use carbon_models::{evaluate, ModelConfig, ScenarioDataset, ScenarioRow};
//!
//! let config = ModelConfig::default();
//! let mut dataset = ScenarioDataset::new();
//! for scenario in [config.baseline_scenario.as_str(), config.policy_scenario.as_str()] {
//!     let mut emissions = ScenarioRow::new(scenario, "Emissions|CO2");
//!     let mut coal = ScenarioRow::new(scenario, "Primary Energy|Coal");
//!     for year in (2010..=2100).step_by(5) {
//!         emissions.insert(year, 30_000.0);
//!         coal.insert(year, 150.0);
//!     }
//!     dataset.push(emissions);
//!     dataset.push(coal);
//! }
//!
//! let result = evaluate(80.0, 59.25, 0.91, &dataset).unwrap();
//! assert_eq!(result.avoided_emissions, 0.0);
//! assert_eq!(result.arbitrage, 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod arbitrage;
pub mod config;
pub mod dataset;
pub mod error;
pub mod integrator;
pub mod scenario;

pub use arbitrage::{
    evaluate, horizon_annuity_factor, ArbitrageEvaluator, EvaluationResult, Parameters,
};
pub use config::{Horizon, ModelConfig};
pub use dataset::{DuplicateRow, ScenarioDataset, ScenarioRow};
pub use error::ModelError;
pub use integrator::{PathwayIntegrator, PathwayTotals};
pub use scenario::{Pathway, ScenarioExtractor, ScenarioPathways};
