//! Stage capability shared by every screen the registry can show

use crate::error::StageError;
use crate::input::StageCommand;
use crate::renderer::Renderer;
use crate::sim::StageEvent;

/// Whether the host should schedule another frame for this stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Continue,
    Halt,
}

/// A screen driven one frame at a time by the host loop
pub trait Stage {
    /// Registry name, used in logs and errors
    fn name(&self) -> &'static str;

    /// Load state, become active, and draw once
    fn init(&mut self, renderer: &mut dyn Renderer) -> Result<(), StageError>;

    /// Advance one frame
    fn update(&mut self, renderer: &mut dyn Renderer) -> Result<Frame, StageError>;

    /// Detach; later updates halt
    fn stop(&mut self);

    /// Apply a command between frames
    fn handle(&mut self, command: StageCommand, renderer: &mut dyn Renderer) -> Result<(), StageError>;

    fn is_active(&self) -> bool;

    /// Take the gameplay events raised since the last drain
    fn drain_events(&mut self) -> Vec<StageEvent>;
}
