//! Game settings and preferences
//!
//! Stored as JSON next to the executable. A missing or unreadable file
//! never stops the game; defaults apply and a warning is logged.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sync presentation to the display refresh rate
    pub vsync: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vsync: true,
            show_fps: false,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "settings.json";

    fn path() -> PathBuf {
        // Next to the executable so the game can run from any directory
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(Self::FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME))
    }

    pub fn load() -> Self {
        let path = Self::path();
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }
}
