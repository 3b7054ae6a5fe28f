//! Configuration management for hilo.
//!
//! Loads configuration from TOML files; every field has a default so a
//! partial (or absent) config file still works.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./hilo.toml`
    /// 2. `~/.config/hilo/config.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("hilo.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("hilo").join("config.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("hilo.toml")
    }
}

/// General application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Trading symbol to fetch and analyze.
    pub symbol: String,
    /// Candle sampling interval.
    pub interval: String,
    /// Default candle data file.
    pub data_file: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            symbol: "BTC/USDT".to_string(),
            interval: "1h".to_string(),
            data_file: "bitcoin_data.json".to_string(),
        }
    }
}

/// Finazon API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL.
    pub base_url: String,
    /// API key; empty means fetching is disabled.
    pub api_key: String,
    /// Candles per page, max 1000.
    pub page_size: u32,
    /// Delay between paginated requests in milliseconds.
    pub page_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.finazon.io/latest/finazon".to_string(),
            api_key: String::new(),
            page_size: 1000,
            page_delay_ms: 250,
        }
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Timezone candles are localized to before day/hour extraction.
    pub timezone: String,
    /// Week grouping: "iso" or "monday".
    pub week_policy: String,
    /// How many (day, hour) slots to keep per day in the ranking.
    pub top_hours_per_day: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timezone: "Australia/Adelaide".to_string(),
            week_policy: "iso".to_string(),
            top_hours_per_day: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.symbol, "BTC/USDT");
        assert_eq!(config.general.interval, "1h");
        assert_eq!(config.api.page_size, 1000);
        assert_eq!(config.analysis.timezone, "Australia/Adelaide");
        assert_eq!(config.analysis.top_hours_per_day, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let toml_str = r#"
            [analysis]
            week_policy = "monday"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analysis.week_policy, "monday");
        assert_eq!(config.analysis.timezone, "Australia/Adelaide");
        assert_eq!(config.general.symbol, "BTC/USDT");
    }

    #[test]
    fn test_full_file() {
        let toml_str = r#"
            [general]
            symbol = "ETH/USDT"
            interval = "4h"
            data_file = "eth.json"

            [api]
            base_url = "http://localhost:9000"
            api_key = "secret"
            page_size = 500
            page_delay_ms = 0

            [analysis]
            timezone = "UTC"
            week_policy = "iso"
            top_hours_per_day = 3
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.symbol, "ETH/USDT");
        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.api.page_size, 500);
        assert_eq!(config.analysis.top_hours_per_day, 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("hilo-config-test-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.general.symbol = "SOL/USDT".to_string();

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.general.symbol, "SOL/USDT");
        assert_eq!(loaded.api.page_delay_ms, 250);
    }
}
