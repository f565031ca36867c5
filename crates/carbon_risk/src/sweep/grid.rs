//! Evenly spaced sweep grids.

use crate::error::SweepError;

/// Number of grid points used when none is given.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Evenly spaced values from `start` to `end`, both included.
///
/// # Example
///
/// ```
/// use carbon_risk::SweepGrid;
///
/// let grid = SweepGrid::linspace(0.0, 2.0, 5).unwrap();
/// assert_eq!(grid.values(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    values: Vec<f64>,
}

impl SweepGrid {
    /// Build `size` points spanning `[start, end]`.
    ///
    /// # Errors
    ///
    /// `SweepError::InvalidGrid` if `size < 2`, a bound is not finite, or
    /// `start >= end`.
    pub fn linspace(start: f64, end: f64, size: usize) -> Result<Self, SweepError> {
        if size < 2 {
            return Err(SweepError::InvalidGrid(format!(
                "grid needs at least 2 points, got {}",
                size
            )));
        }
        if !(start.is_finite() && end.is_finite()) {
            return Err(SweepError::InvalidGrid(format!(
                "bounds must be finite: [{}, {}]",
                start, end
            )));
        }
        if start >= end {
            return Err(SweepError::InvalidGrid(format!(
                "start {} must be below end {}",
                start, end
            )));
        }

        let step = (end - start) / (size - 1) as f64;
        let values = (0..size)
            .map(|i| {
                if i == size - 1 {
                    end
                } else {
                    start + i as f64 * step
                }
            })
            .collect();
        Ok(Self { values })
    }

    /// Grid values in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
