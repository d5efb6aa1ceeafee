//! Reuse buffer for burned-out particles

use glam::Vec2;

use super::entity::Particle;
use super::rect::Color;

/// Holds retired particles so bursts can recycle them
#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    free: Vec<Particle>,
    /// Particles built from scratch since the last clear
    created: usize,
    /// Particles handed out from the free list since the last clear
    reused: usize,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a particle, recycling a retired one when available
    pub fn acquire(&mut self, center: Vec2, size: f32, angle: f32, speed: f32, color: Color) -> Particle {
        match self.free.pop() {
            Some(mut particle) => {
                particle.reset(center, size, angle, speed, color);
                self.reused += 1;
                particle
            }
            None => {
                self.created += 1;
                Particle::new(center, size, angle, speed, color)
            }
        }
    }

    /// Return a burned-out particle
    pub fn release(&mut self, particle: Particle) {
        self.free.push(particle);
    }

    pub fn clear(&mut self) {
        self.free.clear();
        self.created = 0;
        self.reused = 0;
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn reused(&self) -> usize {
        self.reused
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.free.iter()
    }
}
