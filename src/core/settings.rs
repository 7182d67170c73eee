//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration
//! directory, e.g. `~/.config/peerchess/settings.json` on Linux. When no
//! configuration directory can be determined the file is read from the
//! working directory.
//!
//! # Error Handling
//!
//! A missing or unreadable file falls back to defaults with a warning; every
//! field is optional in the file, so older files keep loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chess_engine::{Color, Difficulty};
use directories::ProjectDirs;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::CoreResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Relay address used when neither the file nor the command line names one
pub const DEFAULT_RELAY: &str = "127.0.0.1:7878";

/// Color the host plays in an online game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HostColor {
    #[default]
    White,
    Black,
    Random,
}

impl HostColor {
    pub fn resolve(self) -> Color {
        match self {
            HostColor::White => Color::White,
            HostColor::Black => Color::Black,
            HostColor::Random => {
                if rand::rng().random_bool(0.5) {
                    Color::White
                } else {
                    Color::Black
                }
            }
        }
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `host:port` of the matchmaking relay
    pub relay_addr: String,
    pub difficulty: Difficulty,
    /// Side the AI plays in `ai` games
    pub ai_color: Color,
    pub host_color: HostColor,
    /// Pause before the AI starts searching
    pub think_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay_addr: DEFAULT_RELAY.to_string(),
            difficulty: Difficulty::Medium,
            ai_color: Color::Black,
            host_color: HostColor::White,
            think_delay_ms: 400,
        }
    }
}

impl Settings {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Path to `settings.json` in the user's configuration directory
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "peerchess", "PeerChess") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Load settings, falling back to defaults on any failure
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

fn read_settings(path: &Path) -> CoreResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn save_settings(settings: &Settings) -> CoreResult<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("peerchess-test-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = load_settings_from(&scratch_path("missing"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let settings = Settings {
            relay_addr: "10.0.0.2:9000".to_string(),
            difficulty: Difficulty::Hard,
            ai_color: Color::White,
            host_color: HostColor::Random,
            think_delay_ms: 0,
        };

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":"expert"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Expert);
        assert_eq!(settings.relay_addr, DEFAULT_RELAY);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert_eq!(load_settings_from(&path), Settings::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_host_color_resolves() {
        assert_eq!(HostColor::Black.resolve(), Color::Black);
        let random = HostColor::Random.resolve();
        assert!(random == Color::White || random == Color::Black);
    }
}
