//! Paddle, brick, ball, and particle entities
//!
//! Each entity is a [`Rect`] plus whatever motion or life state it needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Color, Rect, Shape};
use crate::consts::MAX_LIGHT_LEVEL;

/// Commanded paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveBase {
    Left,
    #[default]
    Still,
    Right,
}

impl MoveBase {
    /// -1, 0, or 1
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            MoveBase::Left => -1.0,
            MoveBase::Still => 0.0,
            MoveBase::Right => 1.0,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    /// Pixels per tick while moving
    pub speed: f32,
    pub move_base: MoveBase,
}

impl Bar {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self {
            rect,
            speed,
            move_base: MoveBase::Still,
        }
    }

    /// Move one tick in the commanded direction
    pub fn advance(&mut self) {
        self.rect.x += self.move_base.sign() * self.speed;
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub hit_points: u32,
}

impl Brick {
    pub fn new(rect: Rect, hit_points: u32) -> Self {
        Self { rect, hit_points }
    }

    /// Take one hit
    pub fn impact(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}

/// A ball entity
///
/// Velocity is fixed at construction from `speed` and `angle`; bounces only
/// flip the sign of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub speed: f32,
    /// Launch angle in radians (0 = right, π/2 = down)
    pub angle: f32,
    pub vel: Vec2,
    /// Top-left corner before this tick's move
    pub previous: Vec2,
}

impl Ball {
    pub fn new(rect: Rect, speed: f32, angle: f32) -> Self {
        let previous = rect.position();
        Self {
            rect,
            speed,
            angle,
            vel: Vec2::new(speed * angle.cos(), speed * angle.sin()),
            previous,
        }
    }

    /// Remember the current position, then integrate one tick
    pub fn advance(&mut self) {
        self.previous = self.rect.position();
        self.rect.set_position(self.previous + self.vel);
    }
}

/// A short-lived decorative particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub rect: Rect,
    pub speed: f32,
    pub angle: f32,
    pub vel: Vec2,
    /// Remaining life in ticks
    pub light_level: u32,
    /// Color before fading
    pub base_color: Color,
}

impl Particle {
    /// Create a particle centered on `center`
    pub fn new(center: Vec2, size: f32, angle: f32, speed: f32, color: Color) -> Self {
        let mut particle = Self {
            rect: Rect::new(size, size, 0.0, 0.0),
            speed: 0.0,
            angle: 0.0,
            vel: Vec2::ZERO,
            light_level: 0,
            base_color: color,
        };
        particle.reset(center, size, angle, speed, color);
        particle
    }

    /// Reinitialise in place for reuse from the pool
    pub fn reset(&mut self, center: Vec2, size: f32, angle: f32, speed: f32, color: Color) {
        self.rect.width = size;
        self.rect.height = size;
        self.rect.set_position(center - Vec2::splat(size / 2.0));
        self.speed = speed;
        self.angle = angle;
        self.vel = Vec2::new(speed * angle.cos(), speed * angle.sin());
        self.light_level = MAX_LIGHT_LEVEL;
        self.base_color = color;
        self.rect.color = color;
    }

    /// Move one tick and lose one level of light
    ///
    /// Returns false once the particle has burned out.
    pub fn advance(&mut self) -> bool {
        self.rect.set_position(self.rect.position() + self.vel);
        self.light_level = self.light_level.saturating_sub(1);
        self.rect.color = self
            .base_color
            .with_alpha(self.light_level as f32 / MAX_LIGHT_LEVEL as f32);
        self.light_level > 0
    }
}

impl Shape for Bar {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Shape for Brick {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Shape for Ball {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Shape for Particle {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_advance() {
        let mut bar = Bar::new(Rect::new(80.0, 10.0, 100.0, 300.0), 6.0);
        bar.advance();
        assert_eq!(bar.rect.x, 100.0);

        bar.move_base = MoveBase::Left;
        bar.advance();
        assert_eq!(bar.rect.x, 94.0);

        bar.move_base = MoveBase::Right;
        bar.advance();
        bar.advance();
        assert_eq!(bar.rect.x, 106.0);
    }

    #[test]
    fn test_brick_impact_saturates() {
        let mut brick = Brick::new(Rect::new(70.0, 20.0, 0.0, 0.0), 1);
        brick.impact();
        assert_eq!(brick.hit_points, 0);
        assert!(brick.is_destroyed());
        brick.impact();
        assert_eq!(brick.hit_points, 0);
    }

    #[test]
    fn test_ball_velocity_from_angle() {
        let ball = Ball::new(Rect::new(10.0, 10.0, 0.0, 0.0), 10.0, std::f32::consts::FRAC_PI_2);
        assert!(ball.vel.x.abs() < 1e-5);
        assert!((ball.vel.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_ball_advance_records_previous() {
        let mut ball = Ball::new(Rect::new(10.0, 10.0, 20.0, 30.0), 5.0, 0.0);
        ball.advance();
        assert_eq!(ball.previous, Vec2::new(20.0, 30.0));
        assert_eq!(ball.rect.position(), Vec2::new(25.0, 30.0));
    }

    #[test]
    fn test_particle_fades_over_its_life() {
        let mut particle = Particle::new(Vec2::new(50.0, 50.0), 4.0, 0.0, 1.0, Color::rgb(255, 0, 0));
        assert_eq!(particle.rect.position(), Vec2::new(48.0, 48.0));
        assert_eq!(particle.light_level, MAX_LIGHT_LEVEL);

        assert!(particle.advance());
        assert_eq!(particle.light_level, MAX_LIGHT_LEVEL - 1);
        assert_eq!(particle.rect.x, 49.0);
        let expected = (MAX_LIGHT_LEVEL - 1) as f32 / MAX_LIGHT_LEVEL as f32;
        assert!((particle.rect.color.a - expected).abs() < 1e-6);

        for _ in 1..MAX_LIGHT_LEVEL - 1 {
            assert!(particle.advance());
        }
        assert_eq!(particle.light_level, 1);
        assert!(!particle.advance());
        assert_eq!(particle.rect.color.a, 0.0);
    }
}
