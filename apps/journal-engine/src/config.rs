//! Configuration loading, validation, and environment variable
//! interpolation for the journal engine.
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::journal::catalog;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Account settings.
    #[serde(default)]
    pub account: AccountConfig,
    /// Analytics settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Account-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Balance the equity curve starts from.
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
        }
    }
}

/// Analytics tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Emotion tags whose trades are excluded from the comparison
    /// ("clean") series in stats and the equity curve. Empty disables
    /// the comparison.
    #[serde(default)]
    pub excluded_emotions: Vec<String>,
    /// Emotion tags counted as mistakes in the mistake report.
    #[serde(default = "default_negative_emotions")]
    pub negative_emotions: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            excluded_emotions: Vec::new(),
            negative_emotions: default_negative_emotions(),
        }
    }
}

fn default_starting_balance() -> Decimal {
    crate::analytics::constants::DEFAULT_STARTING_BALANCE
}

fn default_negative_emotions() -> Vec<String> {
    catalog::NEGATIVE_EMOTIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. An unset or empty
/// variable resolves to its fallback, or to the empty string without one.
#[allow(clippy::expect_used)] // Placeholder pattern is a compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static PLACEHOLDER: OnceLock<regex::Regex> = OnceLock::new();

    let re = PLACEHOLDER.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("placeholder pattern is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let fallback = caps.get(2).map_or("", |m| m.as_str());
        caps.get(1)
            .map_or_else(String::new, |name| match std::env::var(name.as_str()) {
                Ok(value) if !value.is_empty() => value,
                _ => fallback.to_string(),
            })
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.account.starting_balance <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "account.starting_balance must be positive".to_string(),
        ));
    }

    Ok(())
}
