//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation and discounting
//!
//! # Re-exports
//!
//! [`InterpolationError`] and [`DiscountError`] are re-exported at this level.

pub mod error;

pub use error::{DiscountError, InterpolationError};
