//! Game settings and preferences
//!
//! Stored as JSON next to the binary (or wherever `--settings` points).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_MS;
use crate::error::{Error, Result};
use crate::platform::Key;

/// Rule set to play with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ModeKind {
    #[default]
    Standard,
    CatchTheBeat,
}

impl ModeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Standard => "standard",
            ModeKind::CatchTheBeat => "catch-the-beat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "osu" | "std" => Some(ModeKind::Standard),
            "catch-the-beat" | "catch" | "ctb" => Some(ModeKind::CatchTheBeat),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: ModeKind,
    /// Let the game play itself
    pub autoplay: bool,

    // === Bindings ===
    /// Keys that act like a mouse click in standard mode
    pub hit_keys: Vec<Key>,
    /// Catch-the-beat dash
    pub dash_key: Key,

    // === Headless runner ===
    /// Clock step per frame (ms)
    pub frame_ms: f64,
    /// Seed for generated demo beatmaps
    pub seed: u64,
    /// Objects in a generated demo beatmap
    pub demo_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ModeKind::Standard,
            autoplay: false,

            hit_keys: vec![Key::Char('w'), Key::Char('x'), Key::Char('z')],
            dash_key: Key::LeftShift,

            frame_ms: DEFAULT_FRAME_MS,
            seed: 12345,
            demo_length: 64,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if !(self.frame_ms > 0.0 && self.frame_ms.is_finite()) {
            return Err(Error::InvalidSettings(format!(
                "frame_ms must be positive, got {}",
                self.frame_ms
            )));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(ModeKind::from_str("CTB"), Some(ModeKind::CatchTheBeat));
        assert_eq!(ModeKind::from_str("osu"), Some(ModeKind::Standard));
        assert_eq!(ModeKind::from_str("taiko"), None);
        assert_eq!(
            ModeKind::from_str(ModeKind::CatchTheBeat.as_str()),
            Some(ModeKind::CatchTheBeat)
        );
    }

    #[test]
    fn test_partial_json() {
        let settings: Settings =
            serde_json::from_str(r#"{ "mode": "CatchTheBeat", "autoplay": true }"#).unwrap();
        assert_eq!(settings.mode, ModeKind::CatchTheBeat);
        assert!(settings.autoplay);
        assert_eq!(settings.dash_key, Key::LeftShift);
        assert_eq!(settings.hit_keys.len(), 3);
    }

    #[test]
    fn test_rejects_bad_frame_step() {
        let settings = Settings {
            frame_ms: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("hitline_settings_{}.json", std::process::id()));
        let settings = Settings {
            autoplay: true,
            seed: 7,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(loaded.autoplay);
        assert_eq!(loaded.seed, 7);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/hitline/settings.json");
        assert_eq!(settings.mode, ModeKind::Standard);
    }
}
