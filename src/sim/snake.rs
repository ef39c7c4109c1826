//! The snake: a head cell plus a chain of relative offsets

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Position};

/// The snake in the game.
///
/// `body[0]` is the offset from the head to the second joint, and every
/// further offset is relative to the joint before it. Absolute joints are
/// always derived from this, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub head: Position,
    pub body: Vec<IVec2>,
}

impl Snake {
    pub fn new(head: Position, body: Vec<IVec2>) -> Self {
        Self { head, body }
    }

    /// A straight snake of `length` body offsets trailing away from `facing`
    pub fn straight(head: Position, facing: Direction, length: usize) -> Self {
        Self {
            head,
            body: vec![facing.reverse().delta(); length],
        }
    }

    /// Move one step. The tail follows unless `keep_tail`, in which case the
    /// snake grows by one joint.
    pub fn advance(&self, step: Direction, keep_tail: bool) -> Snake {
        let delta = step.delta();
        let kept = if keep_tail {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };

        let mut body = Vec::with_capacity(kept + 1);
        body.push(-delta);
        body.extend_from_slice(&self.body[..kept]);

        Snake {
            head: self.head + delta,
            body,
        }
    }

    /// Absolute joints from head to tail (`body.len() + 1` items)
    pub fn joints(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        std::iter::once(IVec2::ZERO)
            .chain(self.body.iter().copied())
            .scan(self.head, |at, offset| {
                *at += offset;
                Some(*at)
            })
    }

    pub fn whole_snake(&self) -> Vec<Position> {
        self.joints().collect()
    }

    pub fn is_colliding_with_wall(&self, grid: &Grid) -> bool {
        !grid.contains(self.head)
    }

    /// Head shares a cell with any other joint
    pub fn is_self_colliding(&self) -> bool {
        self.joints().skip(1).any(|joint| joint == self.head)
    }
}
