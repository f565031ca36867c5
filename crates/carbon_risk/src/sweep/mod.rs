//! One-parameter sweeps.
//!
//! A sweep varies one of the three [`Parameters`](carbon_models::Parameters)
//! over an evenly spaced grid while holding the other two fixed, and records
//! one [`EvaluationResult`](carbon_models::EvaluationResult) per grid point.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Sweep Driver                  │
//! ├──────────────────────────────────────────────┤
//! │  SweepParameter - which input varies, range  │
//! │  SweepGrid      - evenly spaced grid values  │
//! │  SweepDriver    - evaluation per grid point  │
//! │  SweepTable     - ordered points and series  │
//! └──────────────────────────────────────────────┘
//! ```

mod driver;
mod grid;
mod parameter;
mod table;

pub use driver::{sweep, SweepDriver};
pub use grid::{SweepGrid, DEFAULT_GRID_SIZE};
pub use parameter::SweepParameter;
pub use table::{Metric, SweepPoint, SweepTable};
