//! Host configuration from environment variables.
//!
//! # Responsibility
//! - Resolve log level, optional log directory and seeding switch.
//!
//! # Invariants
//! - Blank values behave as unset.
//! - Parsing never panics; bad values surface as `ConfigError`.

use pubnote_core::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "PUBNOTE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PUBNOTE_LOG_DIR";
pub const ENV_SEED: &str = "PUBNOTE_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBool { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBool { key, value } => write!(
                f,
                "`{key}` must be one of 1|true|yes|on|0|false|no|off, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved host settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub log_level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<String>,
    /// Start with the welcome notes.
    pub seed: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let seed = match read(ENV_SEED) {
            Some(value) => parse_bool(ENV_SEED, &value)?,
            None => true,
        };

        Ok(Self {
            log_level: read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(ENV_LOG_DIR),
            seed,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, HostConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SEED};
    use pubnote_core::default_log_level;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
        assert!(config.seed);
    }

    #[test]
    fn blank_values_behave_as_unset() {
        let config = config_from(&[(ENV_LOG_DIR, "   "), (ENV_SEED, "")]).unwrap();
        assert_eq!(config.log_dir, None);
        assert!(config.seed);
    }

    #[test]
    fn explicit_values_are_read() {
        let config = config_from(&[
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "/var/log/pubnote"),
            (ENV_SEED, "OFF"),
        ])
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/pubnote"));
        assert!(!config.seed);
    }

    #[test]
    fn invalid_seed_flag_is_rejected() {
        let err = config_from(&[(ENV_SEED, "maybe")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: ENV_SEED,
                value: "maybe".to_string()
            }
        );
    }
}
