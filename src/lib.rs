//! Brick Pop - a canvas brick-breaker
//!
//! Core modules:
//! - `sim`: Per-frame simulation (geometry, collisions, entities, particles)
//! - `game_stage`: The playable stage and its lifecycle
//! - `game`: Stage registry that dispatches to the current stage
//! - `renderer`: Drawing seam (headless recorder, canvas on the web)
//! - `input`: Key code to command mapping
//! - `settings`: Data-driven configuration

pub mod error;
pub mod game;
pub mod game_stage;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stage;
pub mod title;

pub use error::{ConfigError, GameError, StageError};
pub use game::Game;
pub use game_stage::GameStage;
pub use input::{Command, KeyBindings, StageCommand};
pub use renderer::{DrawRecorder, Renderer};
pub use settings::{QualityPreset, Settings};
pub use stage::{Frame, Stage};
pub use title::TitleStage;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 360.0;

    /// Particle life in ticks; alpha is `light_level / MAX_LIGHT_LEVEL`
    pub const MAX_LIGHT_LEVEL: u32 = 60;

    /// Paddle defaults
    pub const BAR_WIDTH: f32 = 80.0;
    pub const BAR_HEIGHT: f32 = 10.0;
    pub const BAR_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 500.0 / 60.0;
    pub const BALL_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: usize = 6;
    pub const BRICK_ROWS: usize = 4;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 8.0;
    pub const BRICK_TOP: f32 = 40.0;

    /// Stage names used by the registry
    pub const TITLE_STAGE: &str = "title";
    pub const GAME_STAGE: &str = "game";
}

/// Parse the pixel size out of a CSS font shorthand such as `"bold 24px sans-serif"`.
///
/// Falls back to 10px (the canvas default) when no size is present.
pub fn font_size_px(font: &str) -> f32 {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px")?.parse::<f32>().ok())
        .unwrap_or(10.0)
}
