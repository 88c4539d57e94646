//! Configuration management for the `RaceMeteo` application
//!
//! Handles loading configuration from a TOML file and environment variables,
//! and provides validation for all configuration settings.

use crate::RaceMeteoError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const VALID_LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Root configuration structure for the `RaceMeteo` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceMeteoConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Provider API key. Unused while synthesis stands in for a real provider,
    /// but kept so existing configs carry over once one is wired in.
    pub api_key: Option<String>,
    /// Artificial latency of the simulated provider call, in milliseconds
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_simulated_latency_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for RaceMeteoConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RaceMeteoConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with RACEMETEO_ prefix
        builder = builder.add_source(
            Environment::with_prefix("RACEMETEO")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: RaceMeteoConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("racemeteo").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.is_empty() {
                return Err(RaceMeteoError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        if self.weather.simulated_latency_ms > 10_000 {
            return Err(RaceMeteoError::config(format!(
                "Simulated latency of {}ms is unreasonably high (maximum 10000ms)",
                self.weather.simulated_latency_ms
            ))
            .into());
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(RaceMeteoError::config(format!(
                "Invalid log level '{}'. Valid levels: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ))
            .into());
        }

        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(RaceMeteoError::config(format!(
                "Invalid log format '{}'. Valid formats: {}",
                self.logging.format,
                VALID_LOG_FORMATS.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
