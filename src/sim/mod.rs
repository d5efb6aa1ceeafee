//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per displayed frame, no variable timestep
//! - Seeded RNG only (particle bursts)
//! - Stable iteration order (layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod layout;
pub mod pool;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BounceAxis, Bounds, clamp_axis, clamp_to_walls, overlaps, resolve_bounce};
pub use entity::{Ball, Bar, Brick, MoveBase, Particle};
pub use layout::{
    BallOptions, BallSpec, BarOptions, BarSpec, BrickOptions, BrickSpec, EntitySpec, LayoutSpec, Style,
};
pub use pool::ParticlePool;
pub use rect::{Color, FillMode, Rect, Shape};
pub use state::{Scene, StageEvent, StagePhase};
pub use tick::{blast, tick};
