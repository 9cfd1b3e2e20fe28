//! Site configuration: which sources exist and how far to look ahead.
//!
//! The `[google]` and `[sheet]` tables are both optional; an absent table
//! means the corresponding source is simply not assembled into the feed.
//! That keeps "optional dependency present?" an explicit configuration
//! fact rather than ambient state.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use whatson_core::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
use whatson_sources::{GoogleConfig, SheetConfig};

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

fn default_horizon_days() -> i64 {
    DEFAULT_HORIZON_DAYS
}

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Days into the future to expand recurring events.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,

    /// Google Calendar source, if configured.
    pub google: Option<GoogleConfig>,

    /// Sheet-file source, if configured.
    pub sheet: Option<SheetConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            google: None,
            sheet: None,
        }
    }
}

impl SiteConfig {
    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !(0..=MAX_HORIZON_DAYS).contains(&config.horizon_days) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: format!("horizon_days must be between 0 and {}", MAX_HORIZON_DAYS),
            });
        }
        Ok(config)
    }

    /// Loads configuration from the default location
    /// (`$XDG_CONFIG_HOME/whatson/config.toml`), if it exists.
    pub fn load() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.is_file() {
            return None;
        }
        Self::load_from(&path).ok()
    }

    /// The default configuration file path for this platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("whatson").join("config.toml"))
    }
}
