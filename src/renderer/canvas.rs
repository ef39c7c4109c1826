//! 2D canvas renderer for the browser build

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Frame, Renderer, palette};
use crate::sim::{Grid, World};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    show_level: bool,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, show_level: bool) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            show_level,
        })
    }

    fn clear(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn centered_text(&self, text: &str, font: &str, color: &str, y: f64) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text_with_max_width(text, self.width / 2.0, y, self.width);
    }

    fn draw_world(&self, world: &World, level: u32, grid: &Grid) {
        let unit = grid.unit_for(self.width as u32);
        self.clear(palette::BG_GAMING);

        self.ctx.set_fill_style_str(palette::YELLOW);
        self.ctx.set_stroke_style_str(palette::YELLOW);
        for egg in world.eggs() {
            let (x, y) = Grid::to_pixels(*egg, unit);
            self.ctx.fill_rect(x, y, unit, unit);
            self.ctx.stroke_rect(x, y, unit, unit);
        }

        self.ctx.set_stroke_style_str(palette::SNAKE);
        for joint in world.snake().joints() {
            let (x, y) = Grid::to_pixels(joint, unit);
            self.ctx.stroke_rect(x, y, unit, unit);
        }

        self.ctx.set_font("14px sans-serif");
        self.ctx.set_fill_style_str(palette::YELLOW);
        self.ctx.set_text_align("right");
        let _ = self
            .ctx
            .fill_text(&format!("$ {}", world.score()), self.width - 10.0, 20.0);
        if self.show_level {
            self.ctx.set_text_align("left");
            let _ = self.ctx.fill_text(&format!("Lv {}", level), 10.0, 20.0);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        match frame {
            Frame::Menu => {
                self.clear(palette::BG_MENU);
                let title = format!("bold {}px monospace", self.width / 5.0);
                self.centered_text("Snake", &title, palette::YELLOW, self.height * 0.4);
                let subtitle = format!("{}px monospace", self.width / 20.0);
                self.centered_text(
                    "press \"space\" to start",
                    &subtitle,
                    palette::GREEN,
                    self.height * 0.6,
                );
            }
            Frame::Play { world, level, grid } => self.draw_world(world, *level, grid),
            Frame::Fading {
                world,
                level,
                grid,
                alpha,
            } => {
                self.draw_world(world, *level, grid);
                self.ctx.set_global_alpha((1.0 - *alpha) as f64);
                self.clear(palette::BG_MENU);
                self.ctx.set_global_alpha(1.0);
            }
            Frame::GameOver { score, best } => {
                self.clear(palette::BG_MENU);
                let title = format!("bold {}px monospace", self.width / 6.0);
                self.centered_text("Game Over", &title, palette::YELLOW, self.height * 0.4);
                let subtitle = format!("{}px monospace", self.width / 20.0);
                self.centered_text(
                    &format!("your score: {}", score),
                    &subtitle,
                    palette::GREEN,
                    self.height * 0.6,
                );
                self.centered_text(
                    &format!("highest score: {}", best),
                    &subtitle,
                    palette::GREEN,
                    self.height * 0.7,
                );
            }
        }
    }
}
