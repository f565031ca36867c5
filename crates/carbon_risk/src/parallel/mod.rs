//! Rayon-based parallelisation utilities.
//!
//! Sweep grid points are independent, so they map cleanly onto Rayon's
//! indexed parallel iterators. `collect` on an indexed iterator preserves
//! input order, which keeps sweep tables in ascending grid order.

use rayon::prelude::*;

/// Default minimum number of items before parallel execution pays off.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Parallel map preserving input order.
pub fn parallel_map<T, R, F>(items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// Parallel fallible map.
///
/// Every item is evaluated; on failure the error of the earliest failing
/// item in input order is returned, matching a sequential run.
pub fn parallel_try_map<T, R, E, F>(items: &[T], mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    parallel_map(items, mapper).into_iter().collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Whether parallel execution is allowed at all
    pub enabled: bool,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(enabled: bool, parallel_threshold: usize) -> Self {
        Self {
            enabled,
            parallel_threshold,
        }
    }

    /// Parallel execution for any input large enough.
    pub fn parallel() -> Self {
        Self::new(true, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        self.enabled && n_items >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<i32> = (0..100).collect();
        let doubled: Vec<i32> = parallel_map(&items, |&x| x * 2);

        assert_eq!(doubled.len(), 100);
        assert!(doubled.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(doubled[50], 100);
    }

    #[test]
    fn test_parallel_try_map_ok() {
        let items: Vec<i32> = (1..=10).collect();
        let result: Result<Vec<i32>, String> = parallel_try_map(&items, |&x| Ok(x + 1));
        assert_eq!(result.unwrap(), (2..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_parallel_try_map_err() {
        let items: Vec<i32> = (1..=10).collect();
        let result: Result<Vec<i32>, String> = parallel_try_map(&items, |&x| {
            if x % 3 == 0 {
                Err(format!("bad {}", x))
            } else {
                Ok(x)
            }
        });
        assert_eq!(result.unwrap_err(), "bad 3");
    }

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(!config.should_parallelize(1000));
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::parallel();
        assert!(!config.should_parallelize(4));
        assert!(config.should_parallelize(8));
        assert!(config.should_parallelize(20));
    }
}
