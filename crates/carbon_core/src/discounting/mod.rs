//! Discount rates and discount factors.
//!
//! - [`DiscountRateModel`]: blends a risk-free rate with a beta-scaled equity
//!   premium into a single annual discount rate
//! - [`DiscountCurve`] / [`AnnualDiscountCurve`]: annually compounded discount
//!   factors `(1 + rho)^-t`

mod curve;
mod rate_model;

pub use curve::{AnnualDiscountCurve, DiscountCurve};
pub use rate_model::DiscountRateModel;
