// Rust guideline compliant 2026-02-06

//! Tool settings for Hooksieve.

use crate::{Error, Result, DEFAULT_CONFIG_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "hooksieve.toml";

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns a `Settings` error for names other than error, warn, info, debug, trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(Error::Settings(format!(
            "log_level must be one of error, warn, info, debug, trace, got '{}'",
            level
        ))),
    }
}

/// Settings for Hooksieve behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the pre-commit configuration file to filter.
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,

    /// Maximum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file that receives log output instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Loads settings from file and environment variables.
    ///
    /// Settings are loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Settings file at `<dir>/hooksieve.toml`
    /// 3. Environment variables with `HOOKSIEVE_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding the optional settings file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file exists but cannot be read
    /// - The settings file contains invalid TOML
    /// - Settings values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, |key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load), reading overrides through `env`.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_env<F>(dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        let settings_path = dir.join(SETTINGS_FILE);
        if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            settings = toml::from_str(&content).map_err(|e| {
                Error::Settings(format!("Invalid {}: {}", settings_path.display(), e))
            })?;
        }

        settings.apply_env_overrides(env);
        settings.validate()?;

        Ok(settings)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `HOOKSIEVE_CONFIG_PATH` - Pre-commit configuration file
    /// - `HOOKSIEVE_LOG_LEVEL` - Maximum log level
    /// - `HOOKSIEVE_LOG_FILE` - Log file path
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("HOOKSIEVE_CONFIG_PATH") {
            self.config_path = PathBuf::from(val);
        }

        if let Some(val) = env("HOOKSIEVE_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Some(val) = env("HOOKSIEVE_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }
    }

    /// Validates the settings values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - config_path is empty
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.config_path.as_os_str().is_empty() {
            return Err(Error::Settings("config_path cannot be empty".to_string()));
        }

        parse_log_level(&self.log_level)?;

        Ok(())
    }
}
