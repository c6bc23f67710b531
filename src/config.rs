//! Heart burst configuration
//!
//! Stored as `hearts.json` in the platform config directory; every field is
//! optional and falls back to the defaults below.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hearts::{BatchSize, HeartTiming, RateLimitPolicy, RemovalPolicy};

/// Configuration of a [`crate::ui::widgets::HeartBurst`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    /// Fewest hearts per batch (inclusive)
    #[serde(alias = "miniItems")]
    pub min_items: usize,
    /// Most hearts per batch (inclusive)
    #[serde(alias = "maxItems")]
    pub max_items: usize,
    /// Upper bound on concurrently live hearts, oldest evicted first.
    /// `None` disables the cap.
    pub pool_cap: Option<usize>,
    /// How rapid activations are collapsed
    pub rate_limit: RateLimitPolicy,
    /// Length of the rate limiting window
    pub rate_limit_window_ms: u64,
    /// When completed hearts leave the pool
    pub removal: RemovalPolicy,
    pub timing: HeartTiming,
    /// Fixed RNG seed for reproducible bursts
    pub seed: Option<u64>,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            min_items: 4,
            max_items: 10,
            pool_cap: Some(30),
            rate_limit: RateLimitPolicy::Debounce,
            rate_limit_window_ms: 300,
            removal: RemovalPolicy::Immediate,
            timing: HeartTiming::default(),
            seed: None,
        }
    }
}

impl HeartConfig {
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_millis(self.rate_limit_window_ms)
    }

    /// Batch size bounds, checked
    pub fn batch_size(&self) -> Result<BatchSize, ConfigError> {
        if self.min_items == 0 {
            return Err(ConfigError::Invalid("min_items must be at least 1".into()));
        }
        BatchSize::new(self.min_items, self.max_items).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "min_items ({}) is greater than max_items ({})",
                self.min_items, self.max_items
            ))
        })
    }

    /// Check the configuration for values the burst cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.batch_size()?;
        if self.pool_cap == Some(0) {
            return Err(ConfigError::Invalid("pool_cap must be at least 1".into()));
        }
        let rise = self.timing.rise_distance;
        if !rise.is_finite() || rise < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rise_distance must be a finite non-negative number, got {}",
                rise
            )));
        }
        Ok(())
    }

    /// Get the config file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "animated-hearts", "AnimatedHearts")
            .map(|dirs| dirs.config_dir().join("hearts.json"))
    }

    /// Load and validate a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default file
    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::file_path() {
            Some(path) => self.save_to_file(&path),
            None => Err(ConfigError::Io(
                "Could not determine config directory".to_string(),
            )),
        }
    }

    /// Save to a specific file, creating its directory
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

/// Errors that can occur with the configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
