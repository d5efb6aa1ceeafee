//! The playable brick-breaker stage
//!
//! Owns the layout it was given and the live scene built from it. The scene
//! is thrown away and rebuilt from the layout on every init and restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::GAME_STAGE;
use crate::error::StageError;
use crate::input::StageCommand;
use crate::renderer::Renderer;
use crate::settings::{BurstSettings, Settings};
use crate::sim::{Bounds, LayoutSpec, MoveBase, Scene, StageEvent, StagePhase, tick};
use crate::stage::{Frame, Stage};

/// Brick-breaker stage controller
#[derive(Debug, Clone)]
pub struct GameStage {
    bounds: Bounds,
    burst: BurstSettings,
    seed: u64,
    layout: Option<LayoutSpec>,
    scene: Option<Scene>,
    phase: StagePhase,
    rng: Pcg32,
}

impl GameStage {
    pub fn new(settings: &Settings) -> Self {
        Self {
            bounds: settings.bounds(),
            burst: settings.burst.clone(),
            seed: settings.seed,
            layout: None,
            scene: None,
            phase: StagePhase::Uninitialized,
            rng: Pcg32::seed_from_u64(settings.seed),
        }
    }

    /// Create a stage with its layout already set
    pub fn with_layout(settings: &Settings, layout: LayoutSpec) -> Result<Self, StageError> {
        let mut stage = Self::new(settings);
        stage.set_layout_data(layout)?;
        Ok(stage)
    }

    /// Cache the specs every init/restart rebuilds from
    ///
    /// Takes effect at the next init or restart.
    pub fn set_layout_data(&mut self, layout: LayoutSpec) -> Result<(), StageError> {
        layout.validate()?;
        log::info!(
            "Layout set: {} ball(s), {} brick(s)",
            layout.balls.len(),
            layout.bricks.len()
        );
        self.layout = Some(layout);
        Ok(())
    }

    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    /// Live entities, once loaded
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pause(&mut self) {
        if self.phase == StagePhase::Running {
            self.phase = StagePhase::Paused;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == StagePhase::Paused {
            self.phase = StagePhase::Running;
            log::info!("Game resumed");
        }
    }

    /// Rebuild from the cached layout, drop particles, and wait paused
    pub fn restart(&mut self, renderer: &mut dyn Renderer) -> Result<(), StageError> {
        self.load()?;
        self.phase = StagePhase::Paused;
        log::info!("Game restarted");
        self.render(renderer);
        Ok(())
    }

    /// Set the paddle direction directly
    pub fn set_move_base(&mut self, move_base: MoveBase) {
        if let Some(scene) = self.scene.as_mut() {
            scene.bar.move_base = move_base;
        }
    }

    /// Release of a movement key: only stops the paddle if it is still
    /// heading that way
    fn release(&mut self, direction: MoveBase) {
        if let Some(scene) = self.scene.as_mut() {
            if scene.bar.move_base == direction {
                scene.bar.move_base = MoveBase::Still;
            }
        }
    }

    fn load(&mut self) -> Result<(), StageError> {
        let layout = self.layout.as_ref().ok_or(StageError::MissingLayout(GAME_STAGE))?;
        self.scene = Some(Scene::load(layout));
        self.rng = Pcg32::seed_from_u64(self.seed);
        Ok(())
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear_draw_surface();
        if let Some(scene) = &self.scene {
            for rect in scene.rects() {
                renderer.draw_rect(rect);
            }
        }
    }
}

impl Stage for GameStage {
    fn name(&self) -> &'static str {
        GAME_STAGE
    }

    fn init(&mut self, renderer: &mut dyn Renderer) -> Result<(), StageError> {
        self.load()?;
        self.phase = StagePhase::Running;
        log::info!("Stage `{}` started", GAME_STAGE);
        self.render(renderer);
        Ok(())
    }

    fn update(&mut self, renderer: &mut dyn Renderer) -> Result<Frame, StageError> {
        match self.phase {
            StagePhase::Uninitialized => {
                log::warn!("Stage `{}` updated before init, skipping tick", GAME_STAGE);
                Err(StageError::NotLoaded(GAME_STAGE))
            }
            StagePhase::Stopped => Ok(Frame::Halt),
            StagePhase::Paused => Ok(Frame::Continue),
            StagePhase::Running => {
                let scene = self.scene.as_mut().ok_or(StageError::NotLoaded(GAME_STAGE))?;
                tick(scene, self.bounds, &self.burst, &mut self.rng);
                self.render(renderer);
                Ok(Frame::Continue)
            }
        }
    }

    fn stop(&mut self) {
        if self.phase != StagePhase::Stopped {
            self.phase = StagePhase::Stopped;
            log::info!("Stage `{}` stopped", GAME_STAGE);
        }
    }

    fn handle(&mut self, command: StageCommand, renderer: &mut dyn Renderer) -> Result<(), StageError> {
        if !self.phase.is_active() {
            log::warn!("Stage `{}` ignored {:?} while {:?}", GAME_STAGE, command, self.phase);
            return Ok(());
        }

        match command {
            StageCommand::MoveLeftStart => self.set_move_base(MoveBase::Left),
            StageCommand::MoveRightStart => self.set_move_base(MoveBase::Right),
            StageCommand::MoveLeftStop => self.release(MoveBase::Left),
            StageCommand::MoveRightStop => self.release(MoveBase::Right),
            StageCommand::Pause => self.pause(),
            StageCommand::Resume => self.resume(),
            StageCommand::Restart => self.restart(renderer)?,
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    fn drain_events(&mut self) -> Vec<StageEvent> {
        self.scene.as_mut().map(Scene::drain_events).unwrap_or_default()
    }
}
