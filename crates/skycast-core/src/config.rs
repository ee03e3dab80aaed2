use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "skycast";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `config.toml`; taken from where the file lives
    #[serde(skip)]
    pub config_dir: PathBuf,

    /// Weather lookup settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Frontend preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Temperature unit requested from the provider. `Auto` leaves the
/// provider's default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Auto,
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// City queried automatically on startup
    pub default_city: String,

    /// Base URL of the geocoding API
    pub geocoding_url: String,

    /// Base URL of the forecast API
    pub forecast_url: String,

    /// Temperature unit preference
    pub temperature_unit: TemperatureUnit,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Drop completions that belong to a superseded query.
    /// When false, whichever query completes last wins.
    pub discard_stale_results: bool,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            default_city: "San Francisco".to_string(),
            geocoding_url: "https://geocoding-api.open-meteo.com".to_string(),
            forecast_url: "https://api.open-meteo.com".to_string(),
            temperature_unit: TemperatureUnit::Auto,
            request_timeout_secs: 10,
            discard_stale_results: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Hint shown in the search input
    pub placeholder: String,

    /// How often the frontend drains completed lookups, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: "Search any city".to_string(),
            poll_interval_ms: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, writing defaults there if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let mut config = Self::default();
            if let Some(parent) = config_path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        if let Some(parent) = config_path.parent() {
            config.config_dir = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        Self::check(config)
    }

    /// Same as [`Config::load_validated`] for an explicit path
    pub fn load_validated_from(config_path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(config_path)?;
        Self::check(config)
    }

    fn check(config: Self) -> Result<(Self, ValidationResult)> {
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.geocoding_url, "weather.geocoding_url", &mut result);
        self.validate_url(&self.weather.forecast_url, "weather.forecast_url", &mut result);

        if self.weather.default_city.trim().is_empty() {
            result.add_warning(
                "weather.default_city",
                "No default city - nothing is shown until a search is made",
            );
        }

        if self.weather.request_timeout_secs == 0 {
            result.add_error(
                "weather.request_timeout_secs",
                "Request timeout must be greater than 0",
            );
        } else if self.weather.request_timeout_secs > 120 {
            result.add_warning(
                "weather.request_timeout_secs",
                "Request timeout is more than 2 minutes",
            );
        }

        if !self.weather.discard_stale_results {
            result.add_warning(
                "weather.discard_stale_results",
                "Results of superseded searches may overwrite newer ones",
            );
        }

        if self.ui.poll_interval_ms == 0 {
            result.add_error("ui.poll_interval_ms", "Poll interval must be greater than 0");
        } else if self.ui.poll_interval_ms > 5000 {
            result.add_warning("ui.poll_interval_ms", "Poll interval is unusually large (>5s)");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }
}
