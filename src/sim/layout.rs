//! Immutable construction specs for a stage's entities
//!
//! A spec mirrors the positional argument list `[width, height, x, y, style,
//! options]`, and deserializes from either that JSON array form or an object.
//! Stages keep the specs and rebuild fresh entities from them on every load,
//! so a restart always reproduces the original layout exactly.

use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use super::entity::{Ball, Bar, Brick};
use super::rect::{Color, FillMode, Rect};
use crate::consts::*;
use crate::error::{ConfigError, StageError};

/// Paint attributes for a spec
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub fill_mode: FillMode,
}

impl Style {
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            fill_mode: FillMode::Fill,
        }
    }
}

/// Geometry + style + per-type options for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec<T> {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub style: Style,
    pub options: T,
}

impl<T> EntitySpec<T> {
    pub fn new(width: f32, height: f32, x: f32, y: f32, style: Style, options: T) -> Self {
        Self {
            width,
            height,
            x,
            y,
            style,
            options,
        }
    }

    fn rect(&self) -> Rect {
        Rect {
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
            color: self.style.color,
            fill_mode: self.style.fill_mode,
        }
    }

    fn validate(&self, what: &str, index: usize) -> Result<(), StageError> {
        let finite = [self.width, self.height, self.x, self.y].iter().all(|v| v.is_finite());
        if !finite {
            return Err(StageError::InvalidLayout(format!(
                "{what} {index} has a non-finite coordinate"
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(StageError::InvalidLayout(format!(
                "{what} {index} has negative size {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarOptions {
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallOptions {
    pub speed: f32,
    /// Radians; 0 = right, π/2 = down
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickOptions {
    pub hit_points: u32,
}

pub type BarSpec = EntitySpec<BarOptions>;
pub type BallSpec = EntitySpec<BallOptions>;
pub type BrickSpec = EntitySpec<BrickOptions>;

impl From<&BarSpec> for Bar {
    fn from(spec: &BarSpec) -> Self {
        Bar::new(spec.rect(), spec.options.speed)
    }
}

impl From<&BallSpec> for Ball {
    fn from(spec: &BallSpec) -> Self {
        Ball::new(spec.rect(), spec.options.speed, spec.options.angle)
    }
}

impl From<&BrickSpec> for Brick {
    fn from(spec: &BrickSpec) -> Self {
        Brick::new(spec.rect(), spec.options.hit_points)
    }
}

/// Everything needed to (re)build a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub bar: BarSpec,
    pub balls: Vec<BallSpec>,
    pub bricks: Vec<BrickSpec>,
}

/// Row colors for the built-in brick grid (top to bottom)
const ROW_COLORS: [Color; 4] = [
    Color::rgb(231, 76, 60),
    Color::rgb(241, 196, 15),
    Color::rgb(46, 204, 113),
    Color::rgb(52, 152, 219),
];

impl LayoutSpec {
    /// The built-in stage: a 6x4 grid of one-hit bricks, one ball, one paddle
    pub fn classic() -> Self {
        let bounds = Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let bar = BarSpec::new(
            BAR_WIDTH,
            BAR_HEIGHT,
            (bounds.width - BAR_WIDTH) / 2.0,
            bounds.height - BAR_HEIGHT - 20.0,
            Style::fill(Color::rgb(236, 240, 241)),
            BarOptions { speed: BAR_SPEED },
        );
        let ball = BallSpec::new(
            BALL_SIZE,
            BALL_SIZE,
            (bounds.width - BALL_SIZE) / 2.0,
            250.0,
            Style::fill(Color::WHITE),
            BallOptions {
                speed: BALL_SPEED,
                angle: BALL_ANGLE,
            },
        );

        Self {
            bar,
            balls: vec![ball],
            bricks: Self::brick_grid(bounds, BRICK_COLUMNS, BRICK_ROWS, 1),
        }
    }

    /// A grid of bricks centered horizontally under `BRICK_TOP`
    pub fn brick_grid(bounds: Bounds, columns: usize, rows: usize, hit_points: u32) -> Vec<BrickSpec> {
        let grid_width = columns as f32 * BRICK_WIDTH + columns.saturating_sub(1) as f32 * BRICK_GAP;
        let left = (bounds.width - grid_width) / 2.0;

        (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |col| {
                    BrickSpec::new(
                        BRICK_WIDTH,
                        BRICK_HEIGHT,
                        left + col as f32 * (BRICK_WIDTH + BRICK_GAP),
                        BRICK_TOP + row as f32 * (BRICK_HEIGHT + BRICK_GAP),
                        Style::fill(ROW_COLORS[row % ROW_COLORS.len()]),
                        BrickOptions { hit_points },
                    )
                })
            })
            .collect()
    }

    /// Parse a layout from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject negative sizes and non-finite coordinates
    pub fn validate(&self) -> Result<(), StageError> {
        self.bar.validate("bar", 0)?;
        for (i, ball) in self.balls.iter().enumerate() {
            ball.validate("ball", i)?;
            if !ball.options.speed.is_finite() || !ball.options.angle.is_finite() {
                return Err(StageError::InvalidLayout(format!("ball {i} has non-finite motion")));
            }
        }
        for (i, brick) in self.bricks.iter().enumerate() {
            brick.validate("brick", i)?;
        }
        Ok(())
    }

    pub fn build_bar(&self) -> Bar {
        Bar::from(&self.bar)
    }

    pub fn build_balls(&self) -> Vec<Ball> {
        self.balls.iter().map(Ball::from).collect()
    }

    pub fn build_bricks(&self) -> Vec<Brick> {
        self.bricks.iter().map(Brick::from).collect()
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::classic()
    }
}
