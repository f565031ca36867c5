//! # carbon_core: Numerical Foundation for the Carbon Arbitrage Calculator
//!
//! ## Layer 1 (Foundation) Role
//!
//! carbon_core is the bottom layer of the calculator workspace, providing:
//! - Piecewise linear interpolation over sampled pathways (`math::interpolators`)
//! - The blended discount-rate model and annual discount curves (`discounting`)
//! - Energy unit conversions (`units`)
//! - Error types: `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other carbon_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use carbon_core::discounting::{AnnualDiscountCurve, DiscountCurve, DiscountRateModel};
//! use carbon_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let rho = DiscountRateModel::default().rate(0.91);
//! let curve = AnnualDiscountCurve::new(rho);
//! assert!(curve.discount_factor(10.0).unwrap() < 1.0);
//!
//! let interp = LinearInterpolator::new(&[2020.0_f64, 2025.0], &[10.0, 5.0]).unwrap();
//! assert!((interp.interpolate(2022.0).unwrap() - 8.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `DiscountRateModel` and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod discounting;
pub mod math;
pub mod types;
pub mod units;
