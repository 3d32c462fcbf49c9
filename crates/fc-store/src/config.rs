//! Runtime configuration from `config.toml` in the data directory.
//!
//! Every key is optional. A missing file means all defaults; a file that
//! does not parse is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use fc_core::{CHAT_REPLY_DELAY_MS, TRANSCRIPTION_DELAY_MS};
use serde::Deserialize;

use crate::error::{Result, StoreError};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub latency: LatencyConfig,
    pub appearance: AppearanceConfig,
}

/// Simulated reply latencies, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub chat_reply_ms: u64,
    pub transcription_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            chat_reply_ms: CHAT_REPLY_DELAY_MS,
            transcription_ms: TRANSCRIPTION_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Stand-in for the OS dark-mode preference, used when no theme is saved.
    pub prefers_dark: bool,
}

impl AppConfig {
    /// Load `config.toml` from `base_dir`.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(text) => {
                let config = Self::parse(&text).map_err(|e| {
                    StoreError::InvalidData(format!("{}: {e}", path.display()))
                })?;
                tracing::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(StoreError::InvalidData(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Drop all simulated latency.
    pub fn instant(mut self) -> Self {
        self.latency.chat_reply_ms = 0;
        self.latency.transcription_ms = 0;
        self
    }

    pub fn chat_latency(&self) -> Duration {
        Duration::from_millis(self.latency.chat_reply_ms)
    }

    pub fn transcription_latency(&self) -> Duration {
        Duration::from_millis(self.latency.transcription_ms)
    }
}
