//! Collision detection and response for axis-aligned rectangles
//!
//! Overlap is a plain separating-axis test. Response uses the ball's position
//! from before this tick's move to decide which velocity component to flip:
//! whichever axis was already overlapping last tick is not the one that hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Ball;
use super::rect::Rect;

/// Size of the playfield; walls sit at 0 and at `width`/`height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if the rect lies entirely inside the playfield
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0.0 && rect.y >= 0.0 && rect.right() <= self.width && rect.bottom() <= self.height
    }
}

/// Which velocity component a bounce flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Hit a top or bottom face, `dy` flipped
    Vertical,
    /// Hit a left or right face, `dx` flipped
    Horizontal,
}

/// True iff the two rectangles overlap on both axes
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Bounce a ball off an obstacle it currently overlaps
///
/// If the ball's horizontal extent already overlapped the obstacle before
/// this tick's move, the hit came through a top/bottom face. Otherwise it is
/// treated as a side hit, which includes the diagonal-approach corner case.
pub fn resolve_bounce(ball: &mut Ball, obstacle: &Rect) -> BounceAxis {
    let prev = ball.previous;
    let width = ball.rect.width;
    let height = ball.rect.height;

    let was_over = prev.x < obstacle.right() && prev.x + width > obstacle.x;

    if was_over {
        ball.vel.y = -ball.vel.y;
        ball.rect.y = if prev.y + height <= obstacle.y {
            obstacle.y - height
        } else {
            obstacle.bottom()
        };
        BounceAxis::Vertical
    } else {
        ball.vel.x = -ball.vel.x;
        ball.rect.x = if prev.x + width <= obstacle.x {
            obstacle.x - width
        } else {
            obstacle.right()
        };
        BounceAxis::Horizontal
    }
}

/// Clamp one axis into `[0, bound - extent]`
///
/// Returns the corrected position when the span crossed a wall.
#[inline]
pub fn clamp_axis(pos: f32, extent: f32, bound: f32) -> Option<f32> {
    if pos < 0.0 {
        Some(0.0)
    } else if pos + extent > bound {
        Some(bound - extent)
    } else {
        None
    }
}

/// Keep a moving rect inside the walls, reflecting off any wall it crossed
///
/// Each axis is handled independently. Returns true if either axis bounced.
pub fn clamp_to_walls(rect: &mut Rect, vel: &mut Vec2, bounds: Bounds) -> bool {
    let mut hit = false;

    if let Some(x) = clamp_axis(rect.x, rect.width, bounds.width) {
        rect.x = x;
        vel.x = -vel.x;
        hit = true;
    }
    if let Some(y) = clamp_axis(rect.y, rect.height, bounds.height) {
        rect.y = y;
        vel.y = -vel.y;
        hit = true;
    }

    hit
}
