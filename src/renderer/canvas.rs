//! 2D canvas renderer for the browser

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::sim::{FillMode, Rect};

/// Draws onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    text_color: String,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            text_color: "#ecf0f1".to_string(),
        })
    }
}

impl Renderer for CanvasRenderer {
    fn clear_draw_surface(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_rect(&mut self, rect: &Rect) {
        let css = rect.color.to_css();
        let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
        match rect.fill_mode {
            FillMode::Fill => {
                self.ctx.set_fill_style_str(&css);
                self.ctx.fill_rect(x, y, w, h);
            }
            FillMode::Stroke => {
                self.ctx.set_stroke_style_str(&css);
                self.ctx.stroke_rect(x, y, w, h);
            }
        }
    }

    fn measure_text_width(&mut self, text: &str, font: &str) -> f32 {
        self.ctx.set_font(font);
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(err) => {
                log::warn!("measureText failed: {:?}", err);
                0.0
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(&self.text_color);
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", err);
        }
    }
}
