//! Configuration management for the locator registry.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::{Level, debug};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Resource manager configuration.
    pub manager: ManagerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Configuration for a resource manager instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Label attached to the manager's tracing spans, to tell several
    /// managers apart in the same process.
    pub label: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include the event target in log output.
    pub with_target: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            label: "default".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// The configured level, falling back to INFO for unknown values.
    pub fn level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first if present. Recognized variables:
    /// `LOCATOR_MANAGER_LABEL`, `LOCATOR_LOG_LEVEL`, `LOCATOR_LOG_TARGET`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(label) = std::env::var("LOCATOR_MANAGER_LABEL") {
            config.manager.label = label;
        }

        if let Ok(level) = std::env::var("LOCATOR_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(with_target) = std::env::var("LOCATOR_LOG_TARGET") {
            config.logging.with_target = with_target.parse().unwrap_or(true);
        }

        debug!(?config, "Loaded configuration from environment");

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("LOCATOR_MANAGER_LABEL");
            std::env::remove_var("LOCATOR_LOG_LEVEL");
            std::env::remove_var("LOCATOR_LOG_TARGET");
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.manager.label, "default");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.with_target);
    }

    #[test]
    fn test_from_env_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("LOCATOR_MANAGER_LABEL", "specs");
            std::env::set_var("LOCATOR_LOG_LEVEL", "debug");
            std::env::set_var("LOCATOR_LOG_TARGET", "false");
        }

        let config = Config::from_env();
        assert_eq!(config.manager.label, "specs");
        assert_eq!(config.logging.level(), Level::DEBUG);
        assert!(!config.logging.with_target);

        clear_env();
    }

    #[test]
    fn test_from_env_ignores_unparsable_flag() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("LOCATOR_LOG_TARGET", "maybe");
        }

        let config = Config::from_env();
        assert!(config.logging.with_target);
        assert_eq!(config.manager, ManagerConfig::default());

        clear_env();
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "LOUD".to_string(),
            with_target: false,
        };
        assert_eq!(logging.level(), Level::INFO);

        let logging = LoggingConfig {
            level: "WARN".to_string(),
            with_target: false,
        };
        assert_eq!(logging.level(), Level::WARN);
    }
}
