//! Carbon arbitrage calculator CLI.
//!
//! Library half of the `carbonarb` binary: configuration, command
//! implementations and output rendering. `main.rs` only parses arguments,
//! initialises tracing and dispatches.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the adapter
//! (`adapter_loader`) to the calculator crates (`carbon_models`,
//! `carbon_risk`).

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
