//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. The estimator is stateless, so the state holds
//! only configuration and the precomputed factor catalogue.

use std::sync::Arc;

use footprint_core::{factor_table, EmissionsEstimator, FactorEntry};
use thiserror::Error;

/// Log output format for the server binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration errors raised while reading the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port bound on all interfaces.
    pub port: u16,
    /// Reject estimate requests with no usable entry (422).
    pub require_input: bool,
    /// Log formatter selected by `LOG_FORMAT`.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            require_input: false,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORT` (default: 8080)
    /// - `FOOTPRINT_REQUIRE_INPUT` (default: false)
    /// - `LOG_FORMAT`, `text` or `json` (default: text)
    ///
    /// A variable that is set but unparseable is an error rather than a
    /// silent fallback to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                value: raw,
                expected: "a port number 0-65535",
            })?,
            None => defaults.port,
        };

        let require_input = match lookup("FOOTPRINT_REQUIRE_INPUT") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                var: "FOOTPRINT_REQUIRE_INPUT",
                value: raw,
                expected: "true/false, 1/0, yes/no",
            })?,
            None => defaults.require_input,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "text" | "" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "LOG_FORMAT",
                        value: raw,
                        expected: "text or json",
                    })
                }
            },
            None => defaults.log_format,
        };

        Ok(Self {
            port,
            require_input,
            log_format,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub estimator: EmissionsEstimator,
    pub factors: Arc<Vec<FactorEntry>>,
}

impl AppState {
    /// State with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            estimator: EmissionsEstimator,
            factors: Arc::new(factor_table()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert!(!config.require_input);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("FOOTPRINT_REQUIRE_INPUT", "yes"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.require_input);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"), "{err}");
    }

    #[test]
    fn rejects_bad_flag() {
        let err = AppConfig::from_lookup(lookup(&[("FOOTPRINT_REQUIRE_INPUT", "maybe")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue {
                var: "FOOTPRINT_REQUIRE_INPUT",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_log_format() {
        assert!(AppConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).is_err());
    }

    #[test]
    fn state_carries_factor_catalogue() {
        let state = AppState::new();
        assert_eq!(state.factors.len(), factor_table().len());
    }
}
