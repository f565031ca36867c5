//! Integration tests for one-parameter sweeps.

use approx::assert_relative_eq;
use carbon_models::{ArbitrageEvaluator, ModelConfig, Parameters, ScenarioDataset, ScenarioRow};
use carbon_risk::{
    Metric, ParallelConfig, SweepDriver, SweepError, SweepGrid, SweepParameter,
    DEFAULT_GRID_SIZE,
};

fn phase_out_dataset(config: &ModelConfig) -> ScenarioDataset {
    let mut dataset = ScenarioDataset::new();
    for (scenario, phase_out) in [
        (config.baseline_scenario.as_str(), false),
        (config.policy_scenario.as_str(), true),
    ] {
        let mut emissions = ScenarioRow::new(scenario, config.emissions_variable.as_str());
        let mut coal = ScenarioRow::new(scenario, config.production_variable.as_str());
        for year in (2010..=2100).step_by(5) {
            let decline = if phase_out && year > 2020 {
                (1.0 - f64::from(year - 2020) / 30.0).max(0.05)
            } else {
                1.0
            };
            emissions.insert(year, 36_000.0 * decline);
            coal.insert(year, 160.0 * decline);
        }
        dataset.push(emissions);
        dataset.push(coal);
    }
    dataset
}

#[test]
fn test_beta_sweep_has_twenty_ascending_points() {
    let config = ModelConfig::default();
    let dataset = phase_out_dataset(&config);
    let table = SweepDriver::new(&dataset, &config)
        .sweep(SweepParameter::Beta, &Parameters::default(), DEFAULT_GRID_SIZE)
        .unwrap();

    let values = table.values();
    assert_eq!(values.len(), 20);
    assert_eq!(values[0], 0.0);
    assert_eq!(values[19], 2.0);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(table.parameter(), SweepParameter::Beta);
}

#[test]
fn test_beta_sweep_cost_falls_and_benefit_is_flat() {
    let config = ModelConfig::default();
    let dataset = phase_out_dataset(&config);
    let table = SweepDriver::new(&dataset, &config)
        .sweep(SweepParameter::Beta, &Parameters::default(), 20)
        .unwrap();

    let cost = table.series(Metric::Cost);
    assert!(cost.windows(2).all(|w| w[1].1 < w[0].1));

    let benefit = table.series(Metric::Benefit);
    assert!(benefit.iter().all(|&(_, b)| b == benefit[0].1));
}

#[test]
fn test_scc_sweep_matches_direct_evaluation() {
    let config = ModelConfig::default();
    let dataset = phase_out_dataset(&config);
    let fixed = Parameters::default();
    let table = SweepDriver::new(&dataset, &config)
        .sweep(SweepParameter::Scc, &fixed, 20)
        .unwrap();

    let evaluator = ArbitrageEvaluator::new(&dataset, &config);
    for point in table.points() {
        let direct = evaluator
            .evaluate(&Parameters::new(point.value, fixed.global_lcoe, fixed.beta))
            .unwrap();
        assert_eq!(point.result, direct);
    }

    // Benefit scales linearly from the first to the last grid point.
    let benefit = table.series(Metric::Benefit);
    assert_relative_eq!(benefit[19].1 / benefit[0].1, 20.0, max_relative = 1e-12);
}

#[test]
fn test_parallel_sweep_equals_sequential() {
    let config = ModelConfig::default();
    let dataset = phase_out_dataset(&config);
    let fixed = Parameters::default();
    let grid = SweepGrid::linspace(10.0, 200.0, 64).unwrap();

    let sequential = SweepDriver::new(&dataset, &config)
        .run(SweepParameter::Lcoe, &grid, &fixed)
        .unwrap();
    let parallel = SweepDriver::new(&dataset, &config)
        .with_parallel(ParallelConfig::parallel())
        .run(SweepParameter::Lcoe, &grid, &fixed)
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_sweep_reports_first_failing_point() {
    let config = ModelConfig::default();
    let empty = ScenarioDataset::new();
    let grid = SweepGrid::linspace(0.0, 2.0, 32).unwrap();
    let err = SweepDriver::new(&empty, &config)
        .with_parallel(ParallelConfig::parallel())
        .run(SweepParameter::Beta, &grid, &Parameters::default())
        .unwrap_err();

    match err {
        SweepError::Evaluation { value, .. } => assert_eq!(value, 0.0),
        other => panic!("Expected Evaluation, got {:?}", other),
    }
}
