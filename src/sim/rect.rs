//! Axis-aligned rectangle shared by every drawable entity
//!
//! Coordinates are canvas pixels with the origin at the top-left and y
//! growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color; channels are 0-255, alpha is 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha (clamped to 0-1)
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string for the 2D canvas API
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How a rectangle is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Fill,
    Stroke,
}

/// Position, size, and paint attributes of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub fill_mode: FillMode,
}

impl Rect {
    pub fn new(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            width,
            height,
            x,
            y,
            color: Color::default(),
            fill_mode: FillMode::default(),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Anything that can be drawn as a rectangle
pub trait Shape {
    fn rect(&self) -> &Rect;
}

impl Shape for Rect {
    fn rect(&self) -> &Rect {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::new(40.0, 20.0, 10.0, 5.0);
        assert_eq!(rect.right(), 50.0);
        assert_eq!(rect.bottom(), 25.0);
        assert_eq!(rect.center(), Vec2::new(30.0, 15.0));
    }

    #[test]
    fn test_color_css() {
        let color = Color::rgb(255, 128, 0).with_alpha(0.5);
        assert_eq!(color.to_css(), "rgba(255, 128, 0, 0.5)");
        assert_eq!(Color::WHITE.with_alpha(3.0).a, 1.0);
    }

    #[test]
    fn test_color_alpha_defaults_when_missing() {
        let color: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(color, Color::rgb(1, 2, 3));
    }
}
