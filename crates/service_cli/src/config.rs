//! CLI configuration management.
//!
//! Handles loading of `carbonarb.toml` with environment variable override
//! support. Every field is optional in the file.
//!
//! ```toml
//! data_path = "data/ar6_snapshot_1700882949.csv"
//! log_level = "info"
//!
//! [model]
//! policy_scenario = "NGFS2_Net-Zero 2050"
//!
//! [model.discount]
//! risk_free_rate = 0.0208
//!
//! [defaults]
//! social_cost_of_carbon = 80.0
//! global_lcoe = 59.25
//! beta = 0.91
//!
//! [sweep]
//! grid_size = 20
//! parallel = false
//! ```

use crate::commands::parameter_violations;
use carbon_models::{ModelConfig, Parameters};
use carbon_risk::{ParallelConfig, DEFAULT_GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding `data_path`.
pub const ENV_DATA_PATH: &str = "CARBONARB_DATA_PATH";
/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "CARBONARB_LOG_LEVEL";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Sweep settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Number of grid points
    pub grid_size: usize,
    /// Evaluate grid points on the Rayon pool
    pub parallel: bool,
    /// Minimum grid size before going parallel
    pub parallel_threshold: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        let parallel = ParallelConfig::default();
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            parallel: parallel.enabled,
            parallel_threshold: parallel.parallel_threshold,
        }
    }
}

impl SweepSettings {
    /// Parallel execution settings, forcing parallel on if `force` is set.
    pub fn parallel_config(&self, force: bool) -> ParallelConfig {
        ParallelConfig::new(self.parallel || force, self.parallel_threshold)
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Scenario snapshot CSV
    pub data_path: PathBuf,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Model configuration
    pub model: ModelConfig,
    /// Parameter values used when not given on the command line
    pub defaults: Parameters,
    /// Sweep settings
    pub sweep: SweepSettings,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data").join("ar6_snapshot_1700882949.csv")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            log_level: "info".to_string(),
            model: ModelConfig::default(),
            defaults: Parameters::default(),
            sweep: SweepSettings::default(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_path) = lookup(ENV_DATA_PATH) {
            self.data_path = PathBuf::from(data_path);
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.data_path.as_os_str().is_empty() {
            errors.push("data_path cannot be empty".to_string());
        }

        if self.sweep.grid_size < 2 {
            errors.push(format!(
                "sweep.grid_size must be at least 2, got {}",
                self.sweep.grid_size
            ));
        }

        if let Err(e) = self.model.validate() {
            errors.push(format!("model: {}", e));
        }

        errors.extend(
            parameter_violations(&self.defaults)
                .into_iter()
                .map(|msg| format!("defaults: {}", msg)),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(
            config.data_path,
            PathBuf::from("data/ar6_snapshot_1700882949.csv")
        );
        assert_eq!(config.log_level, "info");
        assert_eq!(config.defaults, Parameters::new(80.0, 59.25, 0.91));
        assert_eq!(config.sweep.grid_size, 20);
        assert!(!config.sweep.parallel);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = CliConfig::from_toml(
            r#"
            log_level = "debug"

            [defaults]
            beta = 1.2

            [sweep]
            parallel = true
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.defaults.beta, 1.2);
        assert_eq!(config.defaults.social_cost_of_carbon, 80.0);
        assert!(config.sweep.parallel);
        assert_eq!(config.sweep.grid_size, 20);
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml("log_level = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> =
            [(ENV_DATA_PATH, "/tmp/snapshot.csv"), (ENV_LOG_LEVEL, "warn")].into();
        let config =
            CliConfig::default().with_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_path, PathBuf::from("/tmp/snapshot.csv"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_no_overrides_keeps_values() {
        let config = CliConfig::default().with_overrides(|_| None);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.sweep.grid_size = 1;
        config.defaults.beta = 3.0;

        match config.validate().unwrap_err() {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("log_level"));
                assert!(errors[1].contains("grid_size"));
                assert!(errors[2].contains("beta"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_model_section() {
        let mut config = CliConfig::default();
        config.model.sample_step = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("model: "));
    }

    #[test]
    fn test_parallel_config() {
        let sweep = SweepSettings::default();
        assert!(!sweep.parallel_config(false).enabled);
        assert!(sweep.parallel_config(true).enabled);
    }
}
