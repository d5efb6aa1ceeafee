//! Rendering seam
//!
//! Stages describe what to draw through [`Renderer`]; they never touch a
//! canvas directly. [`DrawRecorder`] is the headless implementation used by
//! the native binary and tests. On the web, `canvas::CanvasRenderer` draws to
//! a 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::font_size_px;
use crate::sim::Rect;

/// Drawing primitives a stage needs
pub trait Renderer {
    /// Erase the whole drawable area
    fn clear_draw_surface(&mut self);
    /// Paint one rectangle with its own color and fill mode
    fn draw_rect(&mut self, rect: &Rect);
    /// Width in pixels of `text` when drawn with `font`
    fn measure_text_width(&mut self, text: &str, font: &str) -> f32;
    /// Draw `text` with its baseline-left at `(x, y)` using the last measured font
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect(Rect),
    Text { text: String, x: f32, y: f32, font: String },
}

/// Headless renderer that keeps the most recent frame
#[derive(Debug, Clone, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
    font: String,
    /// Number of clears seen, i.e. frames drawn
    frames: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rectangles drawn since the last clear
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Text drawn since the last clear
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for DrawRecorder {
    fn clear_draw_surface(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn draw_rect(&mut self, rect: &Rect) {
        self.commands.push(DrawCommand::Rect(rect.clone()));
    }

    /// Approximates glyphs as 0.6em wide
    fn measure_text_width(&mut self, text: &str, font: &str) -> f32 {
        self.font = font.to_string();
        text.chars().count() as f32 * font_size_px(font) * 0.6
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font.clone(),
        });
    }
}
