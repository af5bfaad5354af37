//! Frame driver settings
//!
//! Loaded from a JSON file. Game rules are fixed constants and are not part
//! of this; settings only shape how the driver runs the loop.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_FRAME_DELAY_MS;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "AGARI_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Driver preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start in fullscreen (F toggles it at runtime)
    pub fullscreen: bool,
    /// Delay between frames (~60 Hz at 16)
    pub frame_delay_ms: u64,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Stop after this many frames; run until quit when absent
    pub max_frames: Option<u64>,
    /// Follow the wall clock and sleep between frames. When false the clock
    /// advances by `frame_delay_ms` per frame and the loop runs flat out.
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            seed: None,
            max_frames: Some(3600),
            realtime: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults (with a warning) on failure
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_delay_ms == 0 || self.frame_delay_ms > 1000 {
            return Err(SettingsError::Invalid(format!(
                "frame_delay_ms must be between 1 and 1000, got {}",
                self.frame_delay_ms
            )));
        }
        if self.max_frames == Some(0) {
            return Err(SettingsError::Invalid("max_frames must be positive".into()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_delay_ms, 16);
        assert!(settings.fullscreen);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "realtime": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.realtime);
        assert_eq!(settings.frame_delay_ms, DEFAULT_FRAME_DELAY_MS);
        assert_eq!(settings.max_frames, Some(3600));
    }

    #[test]
    fn test_invalid_frame_delay() {
        let err = Settings::from_json(r#"{ "frame_delay_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_bad_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/agari.json");
        assert!(matches!(
            Settings::load_from(path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load(Some(path)), Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            max_frames: None,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
