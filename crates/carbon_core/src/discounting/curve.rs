//! Discount curve trait and the annually compounded flat curve.

use crate::types::DiscountError;
use num_traits::Float;

/// Discount factors as a function of time since the valuation year.
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
/// - D is non-increasing in t for non-negative rates
pub trait DiscountCurve<T: Float> {
    /// Return the discount factor `t` years after the valuation year.
    ///
    /// # Errors
    ///
    /// `DiscountError::NegativeTime` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, DiscountError>;

    /// Present value of `amount` received `t` years out.
    fn present_value(&self, amount: T, t: T) -> Result<T, DiscountError> {
        Ok(amount * self.discount_factor(t)?)
    }
}

/// Flat curve with annual compounding: `D(t) = (1 + rho)^-t`.
///
/// # Example
///
/// ```
/// use carbon_core::discounting::{AnnualDiscountCurve, DiscountCurve};
///
/// let curve = AnnualDiscountCurve::new(0.05_f64);
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((df - 1.0 / 1.1025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualDiscountCurve<T: Float> {
    rate: T,
}

impl<T: Float> AnnualDiscountCurve<T> {
    /// Construct a curve with the given annual rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Construct a curve, rejecting rates at or below -100%.
    pub fn try_new(rate: T) -> Result<Self, DiscountError> {
        if !(rate > -T::one()) {
            return Err(DiscountError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self::new(rate))
    }

    /// Return the annual rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> DiscountCurve<T> for AnnualDiscountCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, DiscountError> {
        if t < T::zero() {
            return Err(DiscountError::NegativeTime {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((T::one() + self.rate).powf(-t))
    }
}
