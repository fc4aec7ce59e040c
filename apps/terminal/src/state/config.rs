//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`POE_CALC_*`)
//! 2. Defaults (this file)
//!
//! An invalid variable never stops the app: the default is kept and the
//! error is returned so it can be logged once tracing is up.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use poe_core::validation::{validate_display_decimals, validate_policy};
use poe_core::{RecommendationPolicy, ValidationError, Watts};
use serde::Serialize;
use thiserror::Error;

pub const ENV_RECOMMENDATION: &str = "POE_CALC_RECOMMENDATION";
pub const ENV_LOG_DIR: &str = "POE_CALC_LOG_DIR";
pub const ENV_PRINT_SUMMARY: &str = "POE_CALC_PRINT_SUMMARY";
pub const ENV_WATTS_DECIMALS: &str = "POE_CALC_WATTS_DECIMALS";

/// A configuration variable that could not be applied.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{var}: expected true or false, got '{value}'")]
    NotBoolean { var: &'static str, value: String },

    #[error("{var}: expected a whole number, got '{value}'")]
    NotNumber { var: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// How a switch is recommended for a device load.
    /// Default: first match in catalog order
    pub recommendation_policy: RecommendationPolicy,

    /// Decimals shown for wattages (0-3). Default: 1
    pub watts_decimals: u8,

    /// Directory holding `poe-calc.log`.
    /// Default: the platform data directory
    pub log_dir: Option<PathBuf>,

    /// Print the final session summary as JSON after the terminal closes.
    pub print_summary_on_exit: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            recommendation_policy: RecommendationPolicy::FirstMatch,
            watts_decimals: 1,
            log_dir: None,
            print_summary_on_exit: false,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `POE_CALC_RECOMMENDATION`: `first_match` or `tightest_fit`
    /// - `POE_CALC_LOG_DIR`: directory for the log file
    /// - `POE_CALC_PRINT_SUMMARY`: `true` / `false`
    /// - `POE_CALC_WATTS_DECIMALS`: `0`..`3`
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        ConfigState::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a configuration from any variable source.
    ///
    /// Returns the configuration together with the variables that were
    /// rejected (their defaults are kept).
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let mut errors = Vec::new();

        if let Some(value) = lookup(ENV_RECOMMENDATION) {
            match validate_policy(&value) {
                Ok(policy) => config.recommendation_policy = policy,
                Err(source) => errors.push(ConfigError::Invalid {
                    var: ENV_RECOMMENDATION,
                    source,
                }),
            }
        }

        if let Some(value) = lookup(ENV_LOG_DIR) {
            if !value.trim().is_empty() {
                config.log_dir = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = lookup(ENV_PRINT_SUMMARY) {
            match parse_bool(&value) {
                Some(flag) => config.print_summary_on_exit = flag,
                None => errors.push(ConfigError::NotBoolean {
                    var: ENV_PRINT_SUMMARY,
                    value,
                }),
            }
        }

        if let Some(value) = lookup(ENV_WATTS_DECIMALS) {
            match value.trim().parse::<i64>() {
                Ok(n) => match validate_display_decimals(n) {
                    Ok(decimals) => config.watts_decimals = decimals,
                    Err(source) => errors.push(ConfigError::Invalid {
                        var: ENV_WATTS_DECIMALS,
                        source,
                    }),
                },
                Err(_) => errors.push(ConfigError::NotNumber {
                    var: ENV_WATTS_DECIMALS,
                    value,
                }),
            }
        }

        (config, errors)
    }

    /// Formats a wattage for display, e.g. `61.6 W`.
    pub fn format_watts(&self, watts: Watts) -> String {
        format!("{} W", watts.format_fixed(self.watts_decimals))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let (config, errors) = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_overrides_applied() {
        let (config, errors) = ConfigState::from_lookup(lookup_from(&[
            (ENV_RECOMMENDATION, "tightest_fit"),
            (ENV_LOG_DIR, "/tmp/poe"),
            (ENV_PRINT_SUMMARY, "yes"),
            (ENV_WATTS_DECIMALS, "2"),
        ]));
        assert!(errors.is_empty());
        assert_eq!(config.recommendation_policy, RecommendationPolicy::TightestFit);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/poe")));
        assert!(config.print_summary_on_exit);
        assert_eq!(config.watts_decimals, 2);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let (config, errors) = ConfigState::from_lookup(lookup_from(&[
            (ENV_RECOMMENDATION, "cheapest"),
            (ENV_PRINT_SUMMARY, "maybe"),
            (ENV_WATTS_DECIMALS, "7"),
        ]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(errors.len(), 3);
        assert!(errors[1].to_string().contains("maybe"));
    }

    #[test]
    fn test_non_numeric_decimals() {
        let (_, errors) = ConfigState::from_lookup(lookup_from(&[(ENV_WATTS_DECIMALS, "one")]));
        assert!(matches!(errors[0], ConfigError::NotNumber { .. }));
    }

    #[test]
    fn test_format_watts() {
        let config = ConfigState::default();
        assert_eq!(config.format_watts(Watts::from_tenths(616)), "61.6 W");

        let config = ConfigState {
            watts_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_watts(Watts::from_tenths(616)), "62 W");
    }
}
