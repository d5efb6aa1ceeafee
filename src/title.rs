//! Title screen

use crate::consts::TITLE_STAGE;
use crate::error::StageError;
use crate::input::StageCommand;
use crate::renderer::Renderer;
use crate::sim::{Bounds, StageEvent, StagePhase};
use crate::stage::{Frame, Stage};

const TITLE_FONT: &str = "bold 48px sans-serif";
const PROMPT_FONT: &str = "16px sans-serif";

/// Static screen with the game title and a start prompt
#[derive(Debug, Clone)]
pub struct TitleStage {
    bounds: Bounds,
    title: String,
    prompt: String,
    phase: StagePhase,
}

impl TitleStage {
    pub fn new(bounds: Bounds, title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            bounds,
            title: title.into(),
            prompt: prompt.into(),
            phase: StagePhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear_draw_surface();

        let middle = self.bounds.height / 2.0;
        let width = renderer.measure_text_width(&self.title, TITLE_FONT);
        renderer.draw_text(&self.title, (self.bounds.width - width) / 2.0, middle);

        let width = renderer.measure_text_width(&self.prompt, PROMPT_FONT);
        renderer.draw_text(&self.prompt, (self.bounds.width - width) / 2.0, middle + 40.0);
    }
}

impl Stage for TitleStage {
    fn name(&self) -> &'static str {
        TITLE_STAGE
    }

    fn init(&mut self, renderer: &mut dyn Renderer) -> Result<(), StageError> {
        self.phase = StagePhase::Running;
        log::info!("Stage `{}` started", TITLE_STAGE);
        self.render(renderer);
        Ok(())
    }

    /// Nothing moves; the screen drawn at init stays up
    fn update(&mut self, _renderer: &mut dyn Renderer) -> Result<Frame, StageError> {
        if self.phase.is_active() {
            Ok(Frame::Continue)
        } else {
            Ok(Frame::Halt)
        }
    }

    fn stop(&mut self) {
        self.phase = StagePhase::Stopped;
        log::info!("Stage `{}` stopped", TITLE_STAGE);
    }

    fn handle(&mut self, command: StageCommand, _renderer: &mut dyn Renderer) -> Result<(), StageError> {
        log::debug!("Title screen ignores {:?}", command);
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Nothing happens on the title screen
    fn drain_events(&mut self) -> Vec<StageEvent> {
        Vec::new()
    }
}
