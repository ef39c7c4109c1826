//! Board geometry: cell positions, directions and bounds

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell on the board. `y` grows downward, matching canvas coordinates.
pub type Position = IVec2;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step vector for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

/// Returns true for the four axis-aligned unit vectors
pub fn is_unit_step(offset: IVec2) -> bool {
    offset.x.abs() + offset.y.abs() == 1
}

/// Rectangular board of `width` x `height` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::consts::WIDTH, crate::consts::HEIGHT)
    }
}

impl Grid {
    /// Largest edge a grid can address with `i32` cell coordinates
    pub const MAX_EDGE: u32 = i32::MAX as u32;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.min(Self::MAX_EDGE),
            height: height.min(Self::MAX_EDGE),
        }
    }

    /// Width and height as cell coordinates
    fn extent(&self) -> (i32, i32) {
        (
            self.width.min(Self::MAX_EDGE) as i32,
            self.height.min(Self::MAX_EDGE) as i32,
        )
    }

    /// Check if a position is within the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Cell at the board center (rounded down)
    pub fn center(&self) -> Position {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Uniformly random cell in `[0, width) x [0, height)`
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let (width, height) = self.extent();
        IVec2::new(rng.random_range(0..width), rng.random_range(0..height))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + Clone + use<> {
        let (width, height) = self.extent();
        (0..height).flat_map(move |y| (0..width).map(move |x| IVec2::new(x, y)))
    }

    /// Pixels per cell when the board is stretched over `canvas_px`
    pub fn unit_for(&self, canvas_px: u32) -> f64 {
        canvas_px as f64 / self.width.max(1) as f64
    }

    /// Top-left pixel corner of a cell
    pub fn to_pixels(pos: Position, unit: f64) -> (f64, f64) {
        (pos.x as f64 * unit, pos.y as f64 * unit)
    }
}
