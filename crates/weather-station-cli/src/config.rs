//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use weather_station_core::{RawInput, DEFAULT_LOG_FILE};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Observation log file, appended to on every cycle
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Sensor type identifiers, registered in this order
    #[serde(default = "default_sensors")]
    pub sensors: Vec<String>,

    /// Notification recipients
    #[serde(default)]
    pub recipients: Vec<String>,

    /// Raw input used when none is given on the command line
    #[serde(default = "default_input")]
    pub input: BTreeMap<String, f64>,
}

// Default value functions
fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_sensors() -> Vec<String> {
    vec!["TEMPERATURE".to_string(), "HUMIDITY".to_string()]
}

fn default_input() -> RawInput {
    RawInput::from([
        ("temperature".to_string(), 50.0),
        ("humidity".to_string(), 45.5),
    ])
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path.as_ref(), content).context("Failed to write configuration file")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            sensors: default_sensors(),
            recipients: Vec::new(),
            input: default_input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_file, "weather.txt");
        assert_eq!(config.sensors, vec!["TEMPERATURE", "HUMIDITY"]);
        assert_eq!(config.input.get("humidity"), Some(&45.5));
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            log_file = "/var/log/station.txt"
            sensors = ["HUMIDITY"]
            recipients = ["ops@example.com"]

            [input]
            humidity = 80.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_file, "/var/log/station.txt");
        assert_eq!(config.sensors, vec!["HUMIDITY"]);
        assert_eq!(config.recipients, vec!["ops@example.com"]);
        assert_eq!(config.input.len(), 1);
        assert_eq!(config.input["humidity"], 80.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station.toml");

        let mut config = Config::default();
        config.recipients.push("ops@example.com".to_string());
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(dir.path().join("missing.toml")).is_err());
    }
}
