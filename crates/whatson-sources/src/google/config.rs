//! Google Calendar source configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{SourceError, SourceResult};

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Configuration for the Google Calendar source.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// The calendar to list events from.
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    /// Path to the token file holding a ready-to-use access token.
    pub token_file: PathBuf,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Shape of the token file on disk.
///
/// Matches what a separate authorization step writes out; refresh tokens and
/// expiry are that step's concern, not ours.
#[derive(Debug, Deserialize)]
struct TokenFile {
    access_token: String,
}

impl GoogleConfig {
    /// Creates a config for the primary calendar with default timeout.
    pub fn new(token_file: impl Into<PathBuf>) -> Self {
        Self {
            calendar_id: default_calendar_id(),
            token_file: token_file.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the access token from the token file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Configuration` when the file is missing or not
    /// in the expected shape.
    pub fn load_access_token(&self) -> SourceResult<String> {
        let content = std::fs::read_to_string(&self.token_file).map_err(|e| {
            SourceError::Configuration(format!(
                "could not read token file {}: {}",
                self.token_file.display(),
                e
            ))
        })?;
        let token: TokenFile = serde_json::from_str(&content).map_err(|e| {
            SourceError::Configuration(format!(
                "malformed token file {}: {}",
                self.token_file.display(),
                e
            ))
        })?;
        if token.access_token.trim().is_empty() {
            return Err(SourceError::Configuration("empty access token".to_string()));
        }
        Ok(token.access_token)
    }
}
