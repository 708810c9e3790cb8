//! Configuration management for `LodgeDesk`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::LodgeDeskError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `LodgeDesk` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LodgeDeskConfig {
    /// Exchange-rate API configuration
    pub rates: RatesConfig,
    /// Cache configuration
    pub cache: CacheConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default application settings
    pub defaults: DefaultsConfig,
}

/// Exchange-rate API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Base URL for the exchange-rate API
    #[serde(default = "default_rates_base_url")]
    pub base_url: String,
    /// Anchor currency for the stored rate table
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Minutes between automatic rate refreshes
    #[serde(default = "default_update_frequency")]
    pub update_frequency_minutes: u32,
    /// Whether the background refresh task runs at all
    #[serde(default = "default_auto_update")]
    pub auto_update: bool,
    /// Request timeout in seconds
    #[serde(default = "default_rates_timeout")]
    pub timeout_seconds: u32,
}

/// Cache configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache directory location
    #[serde(default = "default_cache_location")]
    pub location: String,
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

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Markup percentage new pricing tiers start with
    #[serde(default = "default_markup")]
    pub markup_percent: f64,
    /// Agency commission percentage
    #[serde(default = "default_commission")]
    pub commission_percent: f64,
    /// Booking-history page size
    #[serde(default = "default_bookings_per_page")]
    pub bookings_per_page: u32,
    /// Address the web server binds to
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
}

// Default value functions
fn default_rates_base_url() -> String {
    "https://api.exchangerate-api.com/v4/latest".to_string()
}

fn default_base_currency() -> String {
    "ZAR".to_string()
}

fn default_update_frequency() -> u32 {
    60
}

fn default_auto_update() -> bool {
    true
}

fn default_rates_timeout() -> u32 {
    30
}

fn default_cache_location() -> String {
    "~/.cache/lodgedesk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_markup() -> f64 {
    25.0
}

fn default_commission() -> f64 {
    15.0
}

fn default_bookings_per_page() -> u32 {
    10
}

fn default_listen_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for LodgeDeskConfig {
    fn default() -> Self {
        Self {
            rates: RatesConfig {
                base_url: default_rates_base_url(),
                base_currency: default_base_currency(),
                update_frequency_minutes: default_update_frequency(),
                auto_update: default_auto_update(),
                timeout_seconds: default_rates_timeout(),
            },
            cache: CacheConfig {
                location: default_cache_location(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            defaults: DefaultsConfig {
                markup_percent: default_markup(),
                commission_percent: default_commission(),
                bookings_per_page: default_bookings_per_page(),
                listen_address: default_listen_address(),
            },
        }
    }
}

impl LodgeDeskConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

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

        // Environment variable overrides with LODGEDESK_ prefix
        builder = builder.add_source(
            Environment::with_prefix("LODGEDESK")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: LodgeDeskConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lodgedesk").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.rates.base_url.is_empty() {
            self.rates.base_url = default_rates_base_url();
        }
        if self.rates.base_currency.is_empty() {
            self.rates.base_currency = default_base_currency();
        }
        if self.rates.update_frequency_minutes == 0 {
            self.rates.update_frequency_minutes = default_update_frequency();
        }
        if self.rates.timeout_seconds == 0 {
            self.rates.timeout_seconds = default_rates_timeout();
        }
        if self.cache.location.is_empty() {
            self.cache.location = default_cache_location();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.bookings_per_page == 0 {
            self.defaults.bookings_per_page = default_bookings_per_page();
        }
        if self.defaults.listen_address.is_empty() {
            self.defaults.listen_address = default_listen_address();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.rates.timeout_seconds > 300 {
            return Err(
                LodgeDeskError::config("Exchange-rate API timeout cannot exceed 300 seconds")
                    .into(),
            );
        }

        if !(5..=1440).contains(&self.rates.update_frequency_minutes) {
            return Err(LodgeDeskError::config(
                "Rate update frequency must be between 5 minutes and 24 hours",
            )
            .into());
        }

        if !(0.0..=100.0).contains(&self.defaults.commission_percent) {
            return Err(
                LodgeDeskError::config("Commission percentage must be between 0 and 100").into(),
            );
        }

        if self.defaults.markup_percent < 0.0 {
            return Err(LodgeDeskError::config("Default markup cannot be negative").into());
        }

        if self.defaults.bookings_per_page > 100 {
            return Err(
                LodgeDeskError::config("Bookings per page cannot exceed 100").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(LodgeDeskError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(LodgeDeskError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.rates.base_url.starts_with("http://")
            && !self.rates.base_url.starts_with("https://")
        {
            return Err(LodgeDeskError::config(
                "Exchange-rate API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.rates.base_currency.len() != 3
            || !self.rates.base_currency.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(LodgeDeskError::config(
                "Base currency must be a three-letter uppercase code such as ZAR",
            )
            .into());
        }

        Ok(())
    }

    /// Create configuration directory if it doesn't exist
    pub fn ensure_config_dir() -> Result<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            let lodgedesk_config_dir = config_dir.join("lodgedesk");
            std::fs::create_dir_all(&lodgedesk_config_dir).with_context(|| {
                format!(
                    "Failed to create config directory: {}",
                    lodgedesk_config_dir.display()
                )
            })?;
            Ok(lodgedesk_config_dir)
        } else {
            Err(LodgeDeskError::config("Unable to determine config directory").into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LodgeDeskConfig::default();
        assert_eq!(
            config.rates.base_url,
            "https://api.exchangerate-api.com/v4/latest"
        );
        assert_eq!(config.rates.base_currency, "ZAR");
        assert_eq!(config.rates.update_frequency_minutes, 60);
        assert!(config.rates.auto_update);
        assert_eq!(config.defaults.markup_percent, 25.0);
        assert_eq!(config.defaults.commission_percent, 15.0);
        assert_eq!(config.defaults.bookings_per_page, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(LodgeDeskConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = LodgeDeskConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_update_frequency_range() {
        let mut config = LodgeDeskConfig::default();
        config.rates.update_frequency_minutes = 1;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("update frequency"));
    }

    #[test]
    fn test_config_validation_base_currency_shape() {
        let mut config = LodgeDeskConfig::default();
        config.rates.base_currency = "rand".to_string();
        assert!(config.validate().is_err());

        config.rates.base_currency = "USD".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_commission_range() {
        let mut config = LodgeDeskConfig::default();
        config.defaults.commission_percent = 120.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_strings() {
        let mut config = LodgeDeskConfig::default();
        config.rates.base_url = String::new();
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.rates.base_url, default_rates_base_url());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        let path = LodgeDeskConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("lodgedesk"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
