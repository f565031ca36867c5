//! Sweep execution.

use super::grid::SweepGrid;
use super::parameter::SweepParameter;
use super::table::{SweepPoint, SweepTable};
use crate::error::SweepError;
use crate::parallel::{parallel_try_map, ParallelConfig};
use carbon_models::{ArbitrageEvaluator, ModelConfig, Parameters, ScenarioDataset};
use tracing::{debug, info};

/// Runs one-parameter sweeps against a fixed dataset and configuration.
///
/// The driver only borrows its inputs, so parallel grid evaluation shares
/// them across Rayon workers without copying.
#[derive(Debug, Clone, Copy)]
pub struct SweepDriver<'a> {
    evaluator: ArbitrageEvaluator<'a>,
    parallel: ParallelConfig,
}

impl<'a> SweepDriver<'a> {
    /// Create a sequential driver.
    pub fn new(dataset: &'a ScenarioDataset, config: &'a ModelConfig) -> Self {
        Self {
            evaluator: ArbitrageEvaluator::new(dataset, config),
            parallel: ParallelConfig::default(),
        }
    }

    /// Use the given parallel execution settings.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parallel execution settings.
    pub fn parallel(&self) -> ParallelConfig {
        self.parallel
    }

    /// Sweep `parameter` over its default range with `grid_size` points.
    pub fn sweep(
        &self,
        parameter: SweepParameter,
        fixed: &Parameters,
        grid_size: usize,
    ) -> Result<SweepTable, SweepError> {
        let (start, end) = parameter.default_range();
        let grid = SweepGrid::linspace(start, end, grid_size)?;
        self.run(parameter, &grid, fixed)
    }

    /// Evaluate every point of `grid`, holding the other parameters at `fixed`.
    ///
    /// # Errors
    ///
    /// `SweepError::Evaluation` for the first grid value, in grid order,
    /// whose evaluation fails.
    pub fn run(
        &self,
        parameter: SweepParameter,
        grid: &SweepGrid,
        fixed: &Parameters,
    ) -> Result<SweepTable, SweepError> {
        let evaluate_point = |&value: &f64| -> Result<SweepPoint, SweepError> {
            let parameters = parameter.apply(fixed, value);
            let result = self
                .evaluator
                .evaluate(&parameters)
                .map_err(|source| SweepError::Evaluation { value, source })?;
            Ok(SweepPoint {
                value,
                parameters,
                result,
            })
        };

        let parallel = self.parallel.should_parallelize(grid.len());
        debug!(
            parameter = parameter.name(),
            points = grid.len(),
            parallel,
            "Running sweep"
        );

        let points = if parallel {
            parallel_try_map(grid.values(), evaluate_point)?
        } else {
            grid.values()
                .iter()
                .map(evaluate_point)
                .collect::<Result<Vec<_>, _>>()?
        };

        info!(
            parameter = parameter.name(),
            points = points.len(),
            "Sweep complete"
        );

        Ok(SweepTable::new(parameter, *fixed, points))
    }
}

/// Sweep with the default [`ModelConfig`], sequentially.
///
/// # Example
///
/// ```
/// use carbon_models::{Parameters, ScenarioDataset};
/// use carbon_risk::{sweep::sweep, SweepError, SweepParameter};
///
/// let empty = ScenarioDataset::new();
/// let err = sweep(SweepParameter::Scc, &Parameters::default(), &empty, 20).unwrap_err();
/// assert!(matches!(err, SweepError::Evaluation { value, .. } if value == 10.0));
/// ```
pub fn sweep(
    parameter: SweepParameter,
    fixed: &Parameters,
    dataset: &ScenarioDataset,
    grid_size: usize,
) -> Result<SweepTable, SweepError> {
    let config = ModelConfig::default();
    SweepDriver::new(dataset, &config).sweep(parameter, fixed, grid_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_models::ScenarioRow;

    fn dataset(config: &ModelConfig) -> ScenarioDataset {
        let mut dataset = ScenarioDataset::new();
        for (scenario, coal) in [
            (config.baseline_scenario.as_str(), 160.0),
            (config.policy_scenario.as_str(), 80.0),
        ] {
            let mut e = ScenarioRow::new(scenario, config.emissions_variable.as_str());
            let mut p = ScenarioRow::new(scenario, config.production_variable.as_str());
            for year in (2010..=2100).step_by(5) {
                e.insert(year, 36_000.0);
                p.insert(year, coal);
            }
            dataset.push(e);
            dataset.push(p);
        }
        dataset
    }

    #[test]
    fn test_sweep_uses_default_range() {
        let config = ModelConfig::default();
        let dataset = dataset(&config);
        let table = SweepDriver::new(&dataset, &config)
            .sweep(SweepParameter::Lcoe, &Parameters::default(), 20)
            .unwrap();

        assert_eq!(table.len(), 20);
        assert_eq!(table.values()[0], 10.0);
        assert_eq!(table.values()[19], 200.0);
        for point in table.points() {
            assert_eq!(point.parameters.global_lcoe, point.value);
            assert_eq!(point.parameters.beta, 0.91);
        }
    }

    #[test]
    fn test_free_sweep_matches_driver() {
        let config = ModelConfig::default();
        let dataset = dataset(&config);
        let fixed = Parameters::default();
        let via_driver = SweepDriver::new(&dataset, &config)
            .sweep(SweepParameter::Scc, &fixed, 20)
            .unwrap();
        let via_fn = sweep(SweepParameter::Scc, &fixed, &dataset, 20).unwrap();
        assert_eq!(via_driver, via_fn);
    }

    #[test]
    fn test_invalid_grid_size() {
        let config = ModelConfig::default();
        let dataset = dataset(&config);
        let err = SweepDriver::new(&dataset, &config)
            .sweep(SweepParameter::Scc, &Parameters::default(), 1)
            .unwrap_err();
        assert!(matches!(err, SweepError::InvalidGrid(_)));
    }

    #[test]
    fn test_evaluation_error_carries_grid_value() {
        let config = ModelConfig::default();
        let empty = ScenarioDataset::new();
        let err = SweepDriver::new(&empty, &config)
            .sweep(SweepParameter::Beta, &Parameters::default(), 5)
            .unwrap_err();
        match err {
            SweepError::Evaluation { value, source } => {
                assert_eq!(value, 0.0);
                assert!(source.is_lookup());
            }
            other => panic!("Expected Evaluation, got {:?}", other),
        }
    }
}
