//! Game settings and preferences
//!
//! Stored as JSON next to the executable (or wherever the frontend points).
//! Physics constants are deliberately absent; see [`crate::consts`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::renderer::SpriteKind;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frame rate of the frame loop (one tick per frame)
    pub fps: u32,
    /// Fixed seed for the pillar generator; random when absent
    pub seed: Option<u64>,
    /// Let the bird fly itself (demo mode)
    pub autopilot: bool,
    /// Pace ticks in real time instead of running them back to back
    pub realtime: bool,
    /// Stop after this many frames (headless runs)
    pub max_ticks: Option<u64>,
    /// Directory holding sprite textures and the HUD font
    pub resource_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            seed: None,
            autopilot: false,
            realtime: true,
            max_ticks: None,
            resource_dir: "resource".to_string(),
        }
    }
}

impl Settings {
    /// Default file name
    pub const FILE_NAME: &'static str = "flappy_bird_settings.json";

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Frame duration for the configured rate (a zero rate counts as one)
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Where the frontend loads the texture for `kind` from
    pub fn asset_path(&self, kind: SpriteKind) -> PathBuf {
        Path::new(&self.resource_dir).join(kind.asset_path())
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}
