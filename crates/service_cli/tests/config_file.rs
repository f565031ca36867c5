//! Configuration file loading.

use service_cli::config::{CliConfig, ConfigError};
use std::io::Write;

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CliConfig::load_or_default(&dir.path().join("carbonarb.toml")).unwrap();
    assert_eq!(config, CliConfig::default());
}

#[test]
fn test_config_file_with_model_section() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
data_path = "snapshots/ngfs.csv"

[model]
policy_scenario = "NGFS2_Delayed transition"

[model.horizon]
end = 2050

[model.discount]
risk_free_rate = 0.03
"#
    )
    .unwrap();

    let config = CliConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.data_path.to_str(), Some("snapshots/ngfs.csv"));
    assert_eq!(config.model.policy_scenario, "NGFS2_Delayed transition");
    assert_eq!(config.model.baseline_scenario, "NGFS2_Current Policies");
    assert_eq!(config.model.horizon.end, 2050);
    assert_eq!(config.model.horizon.start, 2023);
    assert_eq!(config.model.discount.risk_free_rate, 0.03);
    assert!(config.validate().is_ok());
}

#[test]
fn test_horizon_past_samples_fails_validation() {
    let config = CliConfig::from_toml("[model.horizon]\nend = 2110\n").unwrap();
    match config.validate().unwrap_err() {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with("model: "));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("carbonarb.toml");
    let config = CliConfig::load(&path).unwrap();
    let defaults = CliConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.data_path, defaults.data_path);
    assert_eq!(config.defaults, defaults.defaults);
    assert_eq!(config.sweep, defaults.sweep);
    assert_eq!(config.model.horizon, defaults.model.horizon);
    approx::assert_relative_eq!(
        config.model.discount.rate(0.91),
        defaults.model.discount.rate(0.91),
        max_relative = 1e-12
    );
}
