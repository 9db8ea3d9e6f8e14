//! Configuration management module
//!
//! Handles loading, saving, and validation of benchmark configuration.

use crate::{CorbError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Benchmark configuration structure containing all run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Number of concurrent sieve workers
    pub worker_count: usize,
    /// Wall-clock duration of the timed window
    pub duration: Duration,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            worker_count: 1,
            duration: Duration::from_secs(30),
        }
    }
}

impl BenchmarkConfig {
    /// Create a new benchmark configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(CorbError::ConfigError(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        const MAX_WORKERS: usize = 64;
        if self.worker_count > MAX_WORKERS {
            return Err(CorbError::ConfigError(format!(
                "Too many workers: {} (max: {})",
                self.worker_count, MAX_WORKERS
            )));
        }

        if self.duration.is_zero() {
            return Err(CorbError::ConfigError(
                "Duration must be greater than 0".to_string(),
            ));
        }

        const MAX_DURATION: Duration = Duration::from_secs(3600); // 1 hour
        if self.duration > MAX_DURATION {
            return Err(CorbError::ConfigError(format!(
                "Duration too long: {}s (max: {}s)",
                self.duration.as_secs(),
                MAX_DURATION.as_secs()
            )));
        }

        Ok(())
    }

    /// Set the number of workers
    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    /// Set the run duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CorbError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CorbError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CorbError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CorbError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            CorbError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/corb/corb.toml or falls back to $HOME/.config/corb/corb.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            CorbError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.worker_count, 1);
        assert_eq!(config.duration, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = BenchmarkConfig::default().with_worker_count(0);
        assert!(matches!(config.validate(), Err(CorbError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_excessive_workers() {
        let config = BenchmarkConfig::default().with_worker_count(65);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let config = BenchmarkConfig::default().with_duration(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_duration() {
        let config = BenchmarkConfig::default().with_duration(Duration::from_secs(3601));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let config = BenchmarkConfig::default()
            .with_worker_count(8)
            .with_duration(Duration::from_secs(10));
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: BenchmarkConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(config.worker_count, deserialized.worker_count);
        assert_eq!(config.duration, deserialized.duration);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corb.toml");

        let config = BenchmarkConfig::default()
            .with_worker_count(4)
            .with_duration(Duration::from_secs(5));
        config.save_to(&path).expect("save should succeed");

        let loaded = BenchmarkConfig::load_from(&path).expect("load should succeed");
        assert_eq!(loaded.worker_count, 4);
        assert_eq!(loaded.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("does-not-exist.toml");

        let loaded = BenchmarkConfig::load_from(&path).expect("load should succeed");
        assert_eq!(loaded.worker_count, BenchmarkConfig::default().worker_count);
    }

    #[test]
    fn test_config_file_path() {
        let path = BenchmarkConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("corb"));
        assert!(path.to_string_lossy().contains("corb.toml"));
    }
}
