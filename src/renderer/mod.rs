//! Rendering module
//!
//! Renderers draw a `Frame`, a read-only view of the current scene. They
//! never touch the world itself.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use text::TextRenderer;

use crate::sim::{Grid, World};

/// What to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame<'a> {
    /// Title screen waiting for Space
    Menu,
    /// Game in progress
    Play {
        world: &'a World,
        level: u32,
        grid: Grid,
    },
    /// Final world fading away; `alpha` is the world's remaining opacity
    Fading {
        world: &'a World,
        level: u32,
        grid: Grid,
        alpha: f32,
    },
    GameOver { score: u64, best: u64 },
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Scene colors
pub mod palette {
    pub const BG_GAMING: &str = "#1d1f21";
    pub const BG_MENU: &str = "#282a2e";
    pub const YELLOW: &str = "#f0c674";
    pub const GREEN: &str = "#b5bd68";
    pub const SNAKE: &str = "green";
}
