//! User settings.
//!
//! Loaded from `<config dir>/emojiart/settings.json`. Every field has a
//! default, so a partial or missing file is fine; only malformed JSON is an
//! error.

use crate::constants::{DEFAULT_EMOJI_SIZE, DEFAULT_PALETTE, LONG_PRESS_DURATION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Font size for newly dropped emojis
    pub default_emoji_size: f32,
    /// Hold time before a long press removes an emoji
    pub long_press_ms: u64,
    /// Emojis offered as drag sources
    pub palette: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_emoji_size: DEFAULT_EMOJI_SIZE,
            long_press_ms: LONG_PRESS_DURATION.as_millis() as u64,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("emojiart").join("settings.json"))
}

impl Settings {
    pub fn long_press_duration(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Load from the default location, or defaults if there is none.
    pub fn load() -> SettingsResult<Self> {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
