//! Configuration module
//!
//! Loaded from `~/.config/express-courier/config.toml` unless another path is
//! given. Every section is optional and falls back to its default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{RateTable, SurchargeWindow};
use crate::support::errors::ConfigError;

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("express-courier")
        .join("config.toml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base price per started 100 g, per city
    pub rates: BTreeMap<String, Decimal>,
    pub surcharge: SurchargeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurchargeConfig {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), cities = config.rates.len(), "Configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Validated rate table built from `[rates]`
    pub fn rate_table(&self) -> Result<RateTable, ConfigError> {
        Ok(RateTable::new(
            self.rates.iter().map(|(city, rate)| (city.clone(), *rate)),
        )?)
    }

    pub fn surcharge_window(&self) -> Result<SurchargeWindow, ConfigError> {
        SurchargeWindow::new(self.surcharge.start, self.surcharge.end)
            .ok_or(ConfigError::InvalidSurchargeWindow)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let rates = [("Banglore", 3000), ("Delhi", 3500), ("Goa", 4000)]
            .into_iter()
            .map(|(city, cents)| (city.to_string(), Decimal::new(cents, 2)))
            .collect();

        Self {
            rates,
            surcharge: SurchargeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SurchargeConfig {
    fn default() -> Self {
        let window = SurchargeWindow::default();
        Self {
            start: window.start,
            end: window.end,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
[rates]
Banglore = "30.00"
Delhi = "35.00"
Goa = "40.00"

[surcharge]
start = "15:00:00"
end = "21:00:00"

[logging]
level = "debug"
format = "json"
"#;

    #[test]
    fn parses_full_config() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.rates.get("Delhi"), Some(&dec!(35.00)));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.surcharge_window().unwrap(), SurchargeWindow::default());
    }

    #[test]
    fn sample_matches_defaults_except_logging() {
        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.logging = LoggingConfig::default();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.rate_table().unwrap().len(), 3);
    }

    #[test]
    fn numeric_rates_are_accepted() {
        let config = AppConfig::from_toml_str("[rates]\nPune = 25\n").unwrap();
        let table = config.rate_table().unwrap();
        assert_eq!(table.rate_for("Pune"), Some(dec!(25)));
        assert!(!table.contains("Goa"));
    }

    #[test]
    fn non_positive_rate_fails_validation() {
        let config = AppConfig::from_toml_str("[rates]\nPune = \"-5.00\"\n").unwrap();
        assert!(matches!(config.rate_table(), Err(ConfigError::RateTable(_))));
    }

    #[test]
    fn inverted_surcharge_window_fails_validation() {
        let config = AppConfig::from_toml_str("[surcharge]\nstart = \"21:00:00\"\nend = \"15:00:00\"\n").unwrap();
        assert!(matches!(
            config.surcharge_window(),
            Err(ConfigError::InvalidSurchargeWindow)
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[rates\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/express-courier.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        assert!(default_config_path().ends_with("express-courier/config.toml"));
    }
}
