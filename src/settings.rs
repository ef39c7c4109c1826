//! Game settings and preferences
//!
//! Persisted as JSON next to the high score.

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_SIZE, HEIGHT, MAX_BOARD, MAX_CANVAS_SIZE, MIN_BOARD, WIDTH};
use crate::platform::KeyValueStore;
use crate::sim::Grid;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Board width in cells
    pub board_width: u32,
    /// Board height in cells
    pub board_height: u32,
    /// Canvas edge length in pixels
    pub canvas_size: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Show the level next to the score
    pub show_level: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: WIDTH,
            board_height: HEIGHT,
            canvas_size: CANVAS_SIZE,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            show_level: true,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "egg_snake_settings";

    pub fn grid(&self) -> Grid {
        Grid::new(self.board_width, self.board_height)
    }

    /// Clamp values loaded from storage into playable ranges
    pub fn sanitized(mut self) -> Self {
        self.board_width = self.board_width.clamp(MIN_BOARD, MAX_BOARD);
        self.board_height = self.board_height.clamp(MIN_BOARD, MAX_BOARD);
        self.canvas_size = self.canvas_size.clamp(self.board_width, MAX_CANVAS_SIZE);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    /// Effective sound volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }
}
