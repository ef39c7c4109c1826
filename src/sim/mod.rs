//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Worlds are values, replaced on every tick and never mutated in place
//! - Seeded RNG only, passed in explicitly
//! - Stable iteration order (egg slots, joints head to tail)
//! - No rendering or platform dependencies

pub mod eggs;
pub mod fade;
pub mod grid;
pub mod level;
pub mod snake;
pub mod tick;
pub mod world;

use thiserror::Error;

pub use eggs::{ReplaceError, replace_at, spawn_avoiding};
pub use fade::{FadeOut, FadeState};
pub use grid::{Direction, Grid, Position};
pub use level::{Autostep, LevelController, LevelEvent, SecondSampler, speed_for_level};
pub use snake::Snake;
pub use tick::{TickOutcome, egg_at, next_world, tick};
pub use world::{World, WorldError, init_world};

/// Any failure of the simulation core. These indicate logic defects, not
/// game over (which is a `TickOutcome`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Replace(#[from] ReplaceError),
    #[error("no free cell left to place an egg")]
    NoFreeCell,
}
