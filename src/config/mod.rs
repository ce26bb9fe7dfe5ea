// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for stepvar.
//!
//! Model defaults (steps per measure, bars per part) and logging settings,
//! loadable from YAML or TOML files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Steps in a newly created measure
    #[serde(default = "default_steps_per_measure")]
    pub steps_per_measure: usize,
    /// Bars in a newly created part
    #[serde(default = "default_bars_per_part")]
    pub bars_per_part: usize,
    /// Name of the measure in a blank bar
    #[serde(default = "default_blank_measure_name")]
    pub blank_measure_name: String,
    /// Logging settings
    #[serde(default)]
    pub logging: LogConfig,
}

fn default_steps_per_measure() -> usize {
    16
}
fn default_bars_per_part() -> usize {
    4
}
fn default_blank_measure_name() -> String {
    "blank measure".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            steps_per_measure: default_steps_per_measure(),
            bars_per_part: default_bars_per_part(),
            blank_measure_name: default_blank_measure_name(),
            logging: LogConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Load a configuration file, YAML or TOML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            _ => Self::from_yaml(&contents)?,
        };
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.steps_per_measure == 0 {
            bail!("steps_per_measure must be at least 1");
        }
        self.logging.level()?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Maximum level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Include module targets in log lines
    #[serde(default)]
    pub show_target: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

impl LogConfig {
    /// Parsed log level
    pub fn level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.steps_per_measure, 16);
        assert_eq!(config.bars_per_part, 4);
        assert_eq!(config.blank_measure_name, "blank measure");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let config = ModelConfig::from_yaml("steps_per_measure: 12\n").unwrap();
        assert_eq!(config.steps_per_measure, 12);
        assert_eq!(config.bars_per_part, 4);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
bars_per_part = 8
blank_measure_name = "rest"

[logging]
level = "debug"
"#;
        let config = ModelConfig::from_toml(toml).unwrap();
        assert_eq!(config.bars_per_part, 8);
        assert_eq!(config.blank_measure_name, "rest");
        assert_eq!(config.logging.level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(config.steps_per_measure, 16);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ModelConfig {
            bars_per_part: 2,
            ..ModelConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ModelConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_negative_steps_rejected() {
        assert!(ModelConfig::from_yaml("steps_per_measure: -1\n").is_err());
    }

    #[test]
    fn test_validate() {
        let zero = ModelConfig {
            steps_per_measure: 0,
            ..ModelConfig::default()
        };
        assert!(zero.validate().is_err());

        let mut bad_level = ModelConfig::default();
        bad_level.logging.level = "loud".to_string();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("stepvar.yaml");
        let config = ModelConfig {
            steps_per_measure: 32,
            ..ModelConfig::default()
        };
        config.save(&yaml_path).unwrap();
        assert_eq!(ModelConfig::load(&yaml_path).unwrap(), config);

        let toml_path = dir.path().join("stepvar.toml");
        fs::write(&toml_path, "steps_per_measure = 0\n").unwrap();
        assert!(ModelConfig::load(&toml_path).is_err());

        assert!(ModelConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
