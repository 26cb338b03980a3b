//! Configuration management for the insight engine
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HI__)

use crate::error::{EngineError, EngineResult};
use health_insights_shared::ThresholdTables;
use serde::{Deserialize, Serialize};
use std::env;

/// Default number of insights returned per run
pub const DEFAULT_INSIGHT_LIMIT: usize = 3;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub insights: InsightsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Rule cascade constants; defaults are the builtin reference values
    #[serde(default)]
    pub thresholds: ThresholdTables,
}

/// Insight selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Maximum number of insights returned after ranking
    pub limit: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_INSIGHT_LIMIT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
    /// Emit JSON lines instead of pretty output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "health_insights_engine=info".to_string(),
            json: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on HI_ENV (development.toml or production.toml)
    /// 3. Environment variables with HI__ prefix
    pub fn load() -> EngineResult<Self> {
        let env = env::var("HI_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&EngineConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (HI__ prefix)
            // e.g., HI__INSIGHTS__LIMIT=5 sets insights.limit
            .add_source(config::Environment::with_prefix("HI").separator("__"))
            .build()?;

        let loaded: EngineConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration from TOML text layered over the defaults
    pub fn from_toml_str(toml: &str) -> EngineResult<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&EngineConfig::default())?)
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let loaded: EngineConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> EngineResult<()> {
        if self.insights.limit == 0 {
            return Err(EngineError::InvalidConfig(
                "insights.limit must be at least 1".to_string(),
            ));
        }
        self.thresholds.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.insights.limit, 3);
        assert!(!config.logging.json);
        assert_eq!(config.thresholds, ThresholdTables::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [insights]
            limit = 5

            [thresholds.glucose]
            poor_at_or_above = 130.0
            "#,
        )
        .unwrap();

        assert_eq!(config.insights.limit, 5);
        assert_eq!(config.thresholds.glucose.poor_at_or_above, 130.0);
        assert_eq!(config.thresholds.glucose.excellent_min, 70.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let result = EngineConfig::from_toml_str("[insights]\nlimit = 0\n");
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_inconsistent_thresholds_are_rejected() {
        let result = EngineConfig::from_toml_str(
            "[thresholds.stress]\nlow_max = 8.0\nhigh_min = 7.0\n",
        );
        assert!(matches!(result, Err(EngineError::Reference(_))));
    }

    #[test]
    fn test_load_without_config_files_falls_back_to_defaults() {
        // Tests run from the crate directory, which has no config/ folder
        if env::var_os("HI_ENV").is_none() {
            let config = EngineConfig::load().unwrap();
            assert_eq!(config.thresholds, ThresholdTables::default());
            assert!(config.insights.limit >= 1);
        }
    }
}
