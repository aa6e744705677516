//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::storage::DEFAULT_STORAGE_KEY;
use crate::tracker::{TrackerOptions, DEFAULT_DATE_FORMAT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where entries are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_key")]
    pub key: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("weight-tracker").to_string_lossy().to_string())
        .unwrap_or_else(|| "./weight_tracker_data".to_string())
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Data directory with a leading `~` expanded
    pub fn data_path(&self) -> PathBuf {
        match self.data_dir.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(&self.data_dir)),
            None => PathBuf::from(&self.data_dir),
        }
    }
}

/// How entries are shown
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_unit() -> String {
    "kg".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_chart_height() -> usize {
    10
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            date_format: default_date_format(),
            chart_height: default_chart_height(),
        }
    }
}

/// Status line behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    #[serde(default = "default_clear_after")]
    pub clear_after_ms: u64,
}

fn default_clear_after() -> u64 {
    3000 // 3 seconds
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            clear_after_ms: default_clear_after(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here; the caller logs the outcome once a
    /// subscriber is installed.
    pub fn load_default() -> ConfigLoad {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("weight-tracker").join("config.toml")),
            Some(PathBuf::from("./weight-tracker.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing, parseable file among `paths`
    pub fn load_first(paths: &[PathBuf]) -> ConfigLoad {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        ConfigLoad {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = var("WEIGHT_TRACKER_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(key) = var("WEIGHT_TRACKER_STORAGE_KEY") {
            self.storage.key = key;
        }
        if let Some(unit) = var("WEIGHT_TRACKER_UNIT") {
            self.display.unit = unit;
        }
        if let Some(level) = var("WEIGHT_TRACKER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WEIGHT_TRACKER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Tracker settings derived from this config
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            status_clear_after: Duration::from_millis(self.status.clear_after_ms),
            date_format: self.display.date_format.clone(),
        }
    }
}

/// Outcome of loading configuration from the default locations
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Config read from an explicitly given file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Config::load_with_env(path)?,
            source: Some(path.to_path_buf()),
            skipped: Vec::new(),
        })
    }

    /// Emit what happened during loading
    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("Skipped config: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Weight Tracker Configuration
#
# Environment variables override these settings:
# - WEIGHT_TRACKER_DATA_DIR
# - WEIGHT_TRACKER_STORAGE_KEY
# - WEIGHT_TRACKER_UNIT
# - WEIGHT_TRACKER_LOG_LEVEL
# - WEIGHT_TRACKER_LOG_FORMAT

[storage]
# Directory holding the entry file
data_dir = "~/.local/share/weight-tracker"

# Key (file stem) the entry list is stored under
key = "weightData"

[display]
# Unit printed next to weights
unit = "kg"

# chrono format for chart date labels
date_format = "%-m/%-d/%Y"

# Chart height in rows
chart_height = 10

[status]
# How long "Entry added!" stays visible (ms)
clear_after_ms = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
