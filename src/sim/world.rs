//! The world value: snake, eggs and score
//!
//! Every `World` goes through `World::new`, including deserialized ones,
//! so a malformed world can never exist.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SimError;
use super::eggs::spawn_avoiding;
use super::grid::{Direction, Grid, Position, is_unit_step};
use super::snake::Snake;
use crate::consts::{EGG_COUNT, INITIAL_BODY_LENGTH};

/// Reasons a world fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("snake body is empty")]
    EmptyBody,
    #[error("snake body offset {index} is not a unit step: {offset}")]
    NonUnitOffset { index: usize, offset: IVec2 },
    #[error("malformed world: {0}")]
    Malformed(String),
}

/// Complete world snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorld")]
pub struct World {
    snake: Snake,
    eggs: Vec<Position>,
    score: u64,
}

/// Unvalidated shape used only for deserialization
#[derive(Deserialize)]
struct RawWorld {
    snake: Snake,
    eggs: Vec<Position>,
    score: u64,
}

impl TryFrom<RawWorld> for World {
    type Error = WorldError;

    fn try_from(raw: RawWorld) -> Result<Self, Self::Error> {
        World::new(raw.snake, raw.eggs, raw.score)
    }
}

impl World {
    /// Validating constructor
    pub fn new(snake: Snake, eggs: Vec<Position>, score: u64) -> Result<Self, WorldError> {
        if snake.body.is_empty() {
            return Err(WorldError::EmptyBody);
        }
        if let Some((index, offset)) = snake
            .body
            .iter()
            .enumerate()
            .find(|(_, offset)| !is_unit_step(**offset))
        {
            return Err(WorldError::NonUnitOffset {
                index,
                offset: *offset,
            });
        }

        Ok(Self { snake, eggs, score })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn eggs(&self) -> &[Position] {
        &self.eggs
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Wall hit or self bite
    pub fn is_terminal(&self, grid: &Grid) -> bool {
        self.snake.is_colliding_with_wall(grid) || self.snake.is_self_colliding()
    }

    /// Parse a JSON snapshot, validating it like any other world
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        serde_json::from_str(json).map_err(|e| WorldError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Fresh world for a new session: snake centered with its tail hanging
/// down, eggs placed clear of the snake and of each other.
pub fn init_world<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<World, SimError> {
    let snake = Snake::straight(grid.center(), Direction::Up, INITIAL_BODY_LENGTH);

    let mut occupied = snake.whole_snake();
    let mut eggs = Vec::with_capacity(EGG_COUNT);
    for _ in 0..EGG_COUNT {
        let egg = spawn_avoiding(&occupied, grid, rng).ok_or(SimError::NoFreeCell)?;
        occupied.push(egg);
        eggs.push(egg);
    }

    Ok(World::new(snake, eggs, 0)?)
}
