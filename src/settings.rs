//! Game settings
//!
//! Stored as JSON. Every field has a default, so a settings file only needs
//! the values it wants to change.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use crate::sim::FormationStyle;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::SimContext;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "INVADERS_SETTINGS";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Target frames per second
    pub frame_rate: u32,

    // === Session ===
    /// RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
    /// Plain blocks or sprite formation
    pub formation_style: FormationStyle,
    /// Directory holding the sprite images
    pub asset_dir: PathBuf,

    // === Demo ===
    /// Frames the headless demo runs before quitting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frame_rate: FRAME_RATE,

            seed: None,
            formation_style: FormationStyle::Blocks,
            asset_dir: PathBuf::from("assets"),

            demo_frames: u64::from(FRAME_RATE) * 120,
        }
    }
}

impl Settings {
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Seed to use for this run
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let seed = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0);
            log::info!("No seed configured, using {}", seed);
            seed
        })
    }

    /// Simulation context for these settings
    pub fn sim_context(&self) -> SimContext {
        SimContext::new(self.screen(), self.frame_rate.max(1), self.resolved_seed())
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
