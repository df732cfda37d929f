//! Configuration System
//!
//! Loads run settings from keepaway.toml. Every section is optional and falls
//! back to its defaults; command line flags override whatever is loaded here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::output::ReportFormat;

/// Default settings file path
pub const DEFAULT_CONFIG_PATH: &str = "keepaway.toml";

/// Rounds simulated when nothing else is specified
pub const DEFAULT_ROUNDS: u64 = 10_000;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of rounds to run
    pub rounds: u64,
    /// Record a snapshot every N rounds (0 disables)
    pub checkpoint_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            checkpoint_interval: 0,
        }
    }
}

/// Where the notes come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub notes: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            notes: PathBuf::from("data/monkeys.ini"),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, or use defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.simulation.rounds, 10_000);
        assert_eq!(config.simulation.checkpoint_interval, 0);
        assert_eq!(config.input.notes, PathBuf::from("data/monkeys.ini"));
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [simulation]
            rounds = 20
            checkpoint_interval = 5

            [input]
            notes = "notes.txt"

            [report]
            format = "json"
        "#;

        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.simulation.rounds, 20);
        assert_eq!(config.simulation.checkpoint_interval, 5);
        assert_eq!(config.input.notes, PathBuf::from("notes.txt"));
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_str("[simulation]\nrounds = 1\n").unwrap();

        assert_eq!(config.simulation.rounds, 1);
        assert_eq!(config.simulation.checkpoint_interval, 0);
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_str("[simulation]\nrounds = \"many\"\n").unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulation]\nrounds = 42").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.simulation.rounds, 42);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("no/such/keepaway.toml");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_to_toml() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(toml.contains("[simulation]"));
        assert!(toml.contains("rounds = 10000"));
        assert_eq!(Config::from_str(&toml).unwrap(), Config::default());
    }
}
