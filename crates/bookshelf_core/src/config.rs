//! Runtime configuration resolved from environment variables.
//!
//! # Responsibility
//! - Resolve log level, log directory and seeding policy for entry points.
//!
//! # Invariants
//! - Blank variables fall back to defaults.
//! - Malformed values are rejected, never silently replaced.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "BOOKSHELF_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "BOOKSHELF_LOG_DIR";
pub const ENV_SEED: &str = "BOOKSHELF_SEED";

const DEFAULT_LOG_DIR_NAME: &str = "bookshelf-logs";

/// Configuration error for malformed environment values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Entry-point configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Normalized log level (`trace|debug|info|warn|error`).
    pub log_level: &'static str,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Whether the shared catalog starts with the reference books.
    pub seed_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
            seed_catalog: true,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, one call per key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&level).map_err(|reason| ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    value: level.clone(),
                    reason,
                })?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: dir,
                    reason: "must be an absolute path".to_string(),
                });
            }
            config.log_dir = path;
        }

        if let Some(seed) = read(ENV_SEED) {
            config.seed_catalog = parse_flag(&seed).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SEED,
                value: seed.clone(),
                reason: "expected 1|true|on|yes or 0|false|off|no".to_string(),
            })?;
        }

        Ok(config)
    }

    /// Log directory as UTF-8 text for `init_logging`.
    pub fn log_dir_str(&self) -> String {
        self.log_dir.to_string_lossy().into_owned()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SEED};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert!(config.seed_catalog);
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn reads_and_normalizes_values() {
        let dir = std::env::temp_dir().join("bookshelf-config-test");
        let dir_str = dir.to_str().expect("temp dir should be valid UTF-8");
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, " WARNING "),
            (ENV_LOG_DIR, dir_str),
            (ENV_SEED, "off"),
        ]))
        .expect("valid config");

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, dir);
        assert!(!config.seed_catalog);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "   "), (ENV_SEED, "")]))
            .expect("blank values ignored");
        assert_eq!(config.log_level, AppConfig::default().log_level);
        assert!(config.seed_catalog);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_SEED, "maybe")]))
            .expect_err("bad flag must fail");
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == ENV_SEED));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_DIR, "logs/dev")]))
            .expect_err("relative dir must fail");
        assert!(err.to_string().contains("absolute"));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "verbose")]))
            .expect_err("unknown level must fail");
        assert!(err.to_string().contains(ENV_LOG_LEVEL));
    }
}
