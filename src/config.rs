//! Application configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TWINSCOPE_CONFIG";
/// Looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "twinscope.json";

const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Bad value in config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulation tick interval in milliseconds.
    pub tick_interval_ms: u64,
    /// Rows shown in the CSV preview table.
    pub preview_rows: usize,
    /// How long a notice stays on screen.
    pub notice_seconds: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// PNG export size in pixels.
    pub export_width: u32,
    pub export_height: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Fixed seed for the mock series; random when absent.
    pub mock_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            preview_rows: 5,
            notice_seconds: 4.0,
            window_width: 1400.0,
            window_height: 860.0,
            export_width: 1200,
            export_height: 700,
            log_filter: "info".to_string(),
            mock_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Reject values the app cannot turn into durations.
    pub fn validate(&self) -> Result<(), String> {
        if !self.notice_seconds.is_finite() || self.notice_seconds < 0.0 {
            return Err(format!(
                "notice_seconds must be a non-negative number, got {}",
                self.notice_seconds
            ));
        }
        if Duration::try_from_secs_f32(self.notice_seconds).is_err() {
            return Err(format!("notice_seconds {} is too large", self.notice_seconds));
        }
        Ok(())
    }

    /// Load from `TWINSCOPE_CONFIG`, else `./twinscope.json`, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// An explicit path must exist; the fallback path is optional.
    pub fn load_from(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if fallback.is_file() {
            return Self::from_path(fallback);
        }
        info!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.notice_seconds.max(0.0))
            .unwrap_or(DEFAULT_NOTICE_DURATION)
    }
}
