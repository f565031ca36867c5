//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores (x, y) knots sorted by x and joins adjacent knots with straight
/// lines. This is the interpolant used for scenario pathways: knots are the
/// five-yearly sample years, values are the published series.
///
/// # Construction
///
/// Knots are sorted by x during construction. At least 2 knots are required
/// and x-coordinates must be distinct and finite.
///
/// # Example
///
/// ```
/// use carbon_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[2020.0_f64, 2025.0, 2030.0], &[10.0, 5.0, 0.0]).unwrap();
/// assert_eq!(interp.domain(), (2020.0, 2030.0));
/// assert!((interp.interpolate(2027.0).unwrap() - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Values in the same order as `xs`
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from knot coordinates.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 knots
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths, repeated
    ///   or non-finite x-coordinates
    ///
    /// # Example
    ///
    /// ```
    /// use carbon_core::math::interpolators::LinearInterpolator;
    ///
    /// assert!(LinearInterpolator::new(&[2010.0, 2015.0], &[1.0, 2.0]).is_ok());
    /// assert!(LinearInterpolator::new(&[2010.0], &[1.0]).is_err());
    /// assert!(LinearInterpolator::new(&[2010.0, 2010.0], &[1.0, 2.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
            return Err(InterpolationError::InvalidInput(format!(
                "x-coordinate at index {} is not finite",
                i
            )));
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // A repeated knot would give a zero-width segment.
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(InterpolationError::InvalidInput(format!(
                "repeated x-coordinate {}",
                w[0].0.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let (xs, ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        Ok(Self { xs, ys })
    }

    /// Returns the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the values in sorted x order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index `i` such that `xs[i] <= x < xs[i+1]`, clamped to `[0, n-2]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();

        // NaN fails both comparisons, so test containment positively.
        if !(x >= x_min && x <= x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
