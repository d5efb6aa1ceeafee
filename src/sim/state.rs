//! Scene state owned by a stage
//!
//! Everything a restart throws away lives here; the layout it is rebuilt
//! from lives on the stage.

use glam::Vec2;

use super::entity::{Ball, Bar, Brick, Particle};
use super::layout::LayoutSpec;
use super::pool::ParticlePool;
use super::rect::Rect;

/// Lifecycle phase of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    /// Entities not loaded yet
    Uninitialized,
    /// Active and simulating
    Running,
    /// Active, simulation frozen
    Paused,
    /// Detached; the frame chain has ended
    Stopped,
}

impl StagePhase {
    /// Running or Paused
    pub fn is_active(self) -> bool {
        matches!(self, StagePhase::Running | StagePhase::Paused)
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageEvent {
    /// A brick was swept from the active set
    BrickDestroyed { center: Vec2 },
    /// Particles were spawned
    Burst { center: Vec2, count: usize },
    /// The last brick was swept
    StageCleared,
}

/// Live entities for one stage
#[derive(Debug, Clone)]
pub struct Scene {
    pub bar: Bar,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub particles: Vec<Particle>,
    pub pool: ParticlePool,
    /// Events since the last drain
    pub events: Vec<StageEvent>,
    /// Ticks simulated since load
    pub time_ticks: u64,
}

impl Scene {
    /// Build fresh entities from a layout
    pub fn load(layout: &LayoutSpec) -> Self {
        Self {
            bar: layout.build_bar(),
            balls: layout.build_balls(),
            bricks: layout.build_bricks(),
            particles: Vec::new(),
            pool: ParticlePool::new(),
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Every entity in draw order: bricks, paddle, balls, particles
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.bricks
            .iter()
            .map(|b| &b.rect)
            .chain(std::iter::once(&self.bar.rect))
            .chain(self.balls.iter().map(|b| &b.rect))
            .chain(self.particles.iter().map(|p| &p.rect))
    }

    pub fn drain_events(&mut self) -> Vec<StageEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_draw_order() {
        let layout = LayoutSpec::classic();
        let scene = Scene::load(&layout);
        assert_eq!(scene.bricks.len(), 24);
        assert!(scene.particles.is_empty());
        assert!(scene.pool.is_empty());

        let rects: Vec<_> = scene.rects().collect();
        assert_eq!(rects.len(), 24 + 1 + 1);
        assert_eq!(rects[24], &scene.bar.rect);
        assert_eq!(rects[25], &scene.balls[0].rect);
    }

    #[test]
    fn test_phase_activity() {
        assert!(!StagePhase::Uninitialized.is_active());
        assert!(StagePhase::Running.is_active());
        assert!(StagePhase::Paused.is_active());
        assert!(!StagePhase::Stopped.is_active());
    }
}
