//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolation over a bounded domain.
///
/// Implementations are generic over `T: Float` so the same interpolant can
/// be evaluated with `f32` or `f64`.
///
/// # Contract
///
/// - `interpolate(x)` returns `Err(InterpolationError::OutOfBounds)` for any
///   `x` outside `domain()`; implementations never extrapolate.
/// - At a knot, `interpolate` returns the knot value exactly.
pub trait Interpolator<T: Float> {
    /// Interpolate the value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the closed domain `(x_min, x_max)` of valid query points.
    fn domain(&self) -> (T, T);

    /// Check whether `x` lies inside the domain.
    #[inline]
    fn contains(&self, x: T) -> bool {
        let (lo, hi) = self.domain();
        x >= lo && x <= hi
    }
}
