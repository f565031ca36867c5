//! Numerical methods.
//!
//! - [`interpolators`]: 1D interpolation over sampled time series

pub mod interpolators;
