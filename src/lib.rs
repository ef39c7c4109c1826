//! Egg Snake - a grid Snake game with eggs and levels
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, eggs, world transition, levels)
//! - `input`: Key mapping and direction debouncing
//! - `session`: One play-through, merging manual and timed steps
//! - `scene`: Menu / play / game over lifecycle
//! - `renderer`: Renderer interface plus text and canvas implementations
//! - `platform`: Key/value storage (LocalStorage on web)
//! - `highscores`, `settings`: Persisted best score and preferences
//! - `audio`: Procedural Web Audio cues (web only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use scene::{App, AppEvent, Scene};
pub use session::{Session, SessionEvent};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board size in cells
    pub const WIDTH: u32 = 40;
    pub const HEIGHT: u32 = 40;

    /// Canvas edge length in pixels (square board)
    pub const CANVAS_SIZE: u32 = 400;

    /// Limits for stored board and canvas sizes
    pub const MIN_BOARD: u32 = 12;
    pub const MAX_BOARD: u32 = 200;
    pub const MAX_CANVAS_SIZE: u32 = 4096;

    /// Fixed frame length of the game clock (ms)
    pub const FRAME_MS: u32 = 20;
    /// Maximum frames per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Points awarded per egg
    pub const SCORE_PER_EGG: u64 = 100;
    /// Eggs on the board at all times
    pub const EGG_COUNT: usize = 3;
    /// Body offsets of a freshly spawned snake
    pub const INITIAL_BODY_LENGTH: usize = 5;

    /// Level pacing
    pub const START_LEVEL: u32 = 1;
    pub const PROGRESS_PER_SECOND: u32 = 1;
    pub const PROGRESS_PER_EGG: u32 = 20;
    pub const PROGRESS_PER_LEVEL: u32 = 60;

    /// Autostep interval (ms) per level, level 1 first
    pub const SPEED_LEVELS: [u32; 10] = [500, 400, 300, 250, 200, 150, 125, 100, 75, 50];

    /// Random samples tried before the egg spawner scans the board
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1024;

    /// Game over fade: number of alpha steps and their spacing
    pub const FADE_STEPS: u32 = 8;
    pub const FADE_STEP_MS: u32 = 100;
}
