//! Plain text renderer for terminals and logs

use std::fmt::Write;

use super::{Frame, Renderer};
use crate::sim::{Grid, World};

const EMPTY: char = '.';
const EGG: char = '*';
const HEAD: char = '@';
const BODY: char = 'o';

/// Renders frames into a string buffer
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last rendered frame
    pub fn output(&self) -> &str {
        &self.output
    }

    fn draw_board(&mut self, world: &World, level: u32, grid: &Grid) {
        let _ = writeln!(self.output, "$ {}  level {}", world.score(), level);

        let width = grid.width as usize;
        let mut cells = vec![EMPTY; grid.cell_count()];
        let mut put = |pos: glam::IVec2, c: char| {
            if grid.contains(pos) {
                cells[pos.y as usize * width + pos.x as usize] = c;
            }
        };
        for egg in world.eggs() {
            put(*egg, EGG);
        }
        for (i, joint) in world.snake().joints().enumerate() {
            put(joint, if i == 0 { HEAD } else { BODY });
        }

        for row in cells.chunks(width.max(1)) {
            self.output.extend(row.iter());
            self.output.push('\n');
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.output.clear();
        match frame {
            Frame::Menu => {
                self.output.push_str("Snake\npress \"space\" to start\n");
            }
            Frame::Play { world, level, grid } => self.draw_board(world, *level, grid),
            Frame::Fading {
                world,
                level,
                grid,
                alpha,
            } => {
                if *alpha > 0.0 {
                    self.draw_board(world, *level, grid);
                }
            }
            Frame::GameOver { score, best } => {
                let _ = write!(
                    self.output,
                    "Game Over\nyour score: {}\nhighest score: {}\n",
                    score, best
                );
            }
        }
    }
}
