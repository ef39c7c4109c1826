//! Egg placement
//!
//! Eggs live in fixed slots. An eaten egg is replaced in its own slot by a
//! freshly sampled cell.

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use super::grid::{Grid, Position};
use crate::consts::MAX_SPAWN_ATTEMPTS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("egg slot {index} out of range for {len} eggs")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A candidate is accepted only when it shares neither a column nor a row
/// with any reject point.
fn is_accepted(candidate: Position, reject: &[Position]) -> bool {
    reject
        .iter()
        .all(|point| point.x != candidate.x && point.y != candidate.y)
}

/// Pick a random cell that is not blocked by `reject`.
///
/// Random sampling runs first. If that keeps failing the board is scanned
/// for accepted cells, and if the row/column rule blocks every cell, for
/// cells not occupied by a reject point. `None` means the board is full.
pub fn spawn_avoiding<R: Rng + ?Sized>(
    reject: &[Position],
    grid: &Grid,
    rng: &mut R,
) -> Option<Position> {
    if grid.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = grid.random_cell(rng);
        if is_accepted(candidate, reject) {
            return Some(candidate);
        }
    }

    let accepted: Vec<Position> = grid
        .cells()
        .filter(|cell| is_accepted(*cell, reject))
        .collect();
    if let Some(cell) = accepted.choose(rng) {
        return Some(*cell);
    }

    log::debug!("egg spawn rule blocks every cell, falling back to any free cell");
    let free: Vec<Position> = grid
        .cells()
        .filter(|cell| !reject.contains(cell))
        .collect();
    free.choose(rng).copied()
}

/// Copy of `eggs` with slot `index` replaced by `egg`
pub fn replace_at(
    eggs: &[Position],
    index: usize,
    egg: Position,
) -> Result<Vec<Position>, ReplaceError> {
    if index >= eggs.len() {
        return Err(ReplaceError::IndexOutOfRange {
            index,
            len: eggs.len(),
        });
    }

    let mut next = eggs.to_vec();
    next[index] = egg;
    Ok(next)
}
