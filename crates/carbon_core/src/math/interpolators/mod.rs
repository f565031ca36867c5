//! Interpolation methods for sampled pathways.
//!
//! Scenario datasets publish values on a coarse year grid (every five years);
//! the calculator needs values at every calendar year in between. This module
//! provides the interpolation used to fill those gaps.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! Queries outside the domain are rejected; there is no extrapolation.
//!
//! ## Example
//!
//! ```
//! use carbon_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let years = [2010.0_f64, 2015.0, 2020.0];
//! let values = [30.0_f64, 35.0, 33.0];
//!
//! let interp = LinearInterpolator::new(&years, &values).unwrap();
//! assert_eq!(interp.domain(), (2010.0, 2020.0));
//!
//! let y = interp.interpolate(2012.0).unwrap();
//! assert!((y - 32.0).abs() < 1e-10);
//! assert!(interp.interpolate(2021.0).is_err());
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;
