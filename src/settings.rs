//! Scene settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How invaders are placed when the scene is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpawnLayout {
    /// Scattered uniformly over the viewport
    #[default]
    Random,
    /// Rows of coloured invaders, one colour per row
    Grid,
}

impl SpawnLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnLayout::Random => "random",
            SpawnLayout::Grid => "grid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "random" | "scatter" => Some(SpawnLayout::Random),
            "grid" => Some(SpawnLayout::Grid),
            _ => None,
        }
    }
}

/// Failure to read a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width (logical units)
    pub viewport_width: f32,
    /// Viewport height (logical units)
    pub viewport_height: f32,
    /// Seed for invader placement
    pub seed: u64,
    pub spawn_layout: SpawnLayout,
    /// Step the invader formation every frame (off in the shipped game)
    pub formation_movement: bool,
    /// Physics step used by the headless driver (seconds)
    pub fixed_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 320.0,
            viewport_height: 568.0,
            seed: 0x5EED,
            spawn_layout: SpawnLayout::Random,
            formation_movement: false,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings ({}x{}, layout={})",
            settings.viewport_width,
            settings.viewport_height,
            settings.spawn_layout.as_str()
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "spawn_layout": "grid", "seed": 7 }"#).unwrap();
        assert_eq!(settings.spawn_layout, SpawnLayout::Grid);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.viewport_width, Settings::default().viewport_width);
        assert!(!settings.formation_movement);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/nonexistent/sk-invaders/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!(SpawnLayout::from_str("GRID"), Some(SpawnLayout::Grid));
        assert_eq!(SpawnLayout::from_str("random"), Some(SpawnLayout::Random));
        assert_eq!(SpawnLayout::from_str("spiral"), None);
    }
}
