//! Configuration management for seekctl
//!
//! Settings live in a TOML file under the user's config directory. Missing
//! files and missing fields fall back to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors from validating a loaded configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("seek.step_secs must be a positive number, got {0}")]
    InvalidStep(f64),

    #[error("seek.repeat_interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seek: SeekConfig,
}

/// Seek gesture behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekConfig {
    /// Seconds moved per tap or per repeat tick
    pub step_secs: f64,
    /// Wall-clock milliseconds between repeat ticks while held
    pub repeat_interval_ms: u64,
    /// Apply one step as soon as a hold begins
    pub immediate_step: bool,
}

impl Default for SeekConfig {
    fn default() -> Self {
        // 10s every 1s of holding: a 10x scan while held
        Self {
            step_secs: 10.0,
            repeat_interval_ms: 1000,
            immediate_step: true,
        }
    }
}

impl SeekConfig {
    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }

    /// Check the values are usable by the controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_secs.is_finite() || self.step_secs <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step_secs));
        }
        if self.repeat_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

impl Config {
    /// Default config file location: `<config_dir>/seekctl/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("seekctl").join("config.toml"))
    }

    /// Load from the default location, or defaults if the file is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.seek.validate()?;
        Ok(config)
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
