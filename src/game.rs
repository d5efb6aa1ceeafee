//! Stage registry
//!
//! Holds every stage by name, forwards commands to whichever one is current,
//! and drives it one frame at a time. Switching stops the old stage and
//! inits the new one.

use std::collections::HashMap;

use crate::error::{GameError, StageError};
use crate::game_stage::GameStage;
use crate::input::{Command, KeyBindings};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{LayoutSpec, StageEvent};
use crate::stage::{Frame, Stage};
use crate::title::TitleStage;

pub struct Game {
    stages: HashMap<String, Box<dyn Stage>>,
    current: Option<String>,
    bindings: KeyBindings,
}

impl Game {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            stages: HashMap::new(),
            current: None,
            bindings,
        }
    }

    /// Title screen plus the playable stage built from `layout`
    pub fn standard(settings: &Settings, layout: LayoutSpec) -> Result<Self, StageError> {
        let mut game = Self::new(settings.key_bindings.clone());
        game.add_stage(Box::new(TitleStage::new(
            settings.bounds(),
            "BRICK POP",
            "Press Enter to play",
        )));
        game.add_stage(Box::new(GameStage::with_layout(settings, layout)?));
        Ok(game)
    }

    /// Register a stage under its own name, replacing any previous one
    pub fn add_stage(&mut self, stage: Box<dyn Stage>) {
        let name = stage.name().to_string();
        if self.stages.insert(name.clone(), stage).is_some() {
            log::warn!("Stage `{}` replaced", name);
        }
    }

    /// Choose the stage `start` will init
    pub fn select_stage(&mut self, name: &str) -> Result<(), GameError> {
        if !self.stages.contains_key(name) {
            return Err(GameError::UnknownStage(name.to_string()));
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Init the selected stage
    pub fn start(&mut self, renderer: &mut dyn Renderer) -> Result<(), GameError> {
        let stage = self.current_stage_mut().ok_or(GameError::NoCurrentStage)?;
        stage.init(renderer)?;
        Ok(())
    }

    /// Stop the current stage and init `name`
    pub fn switch_stage(&mut self, name: &str, renderer: &mut dyn Renderer) -> Result<(), GameError> {
        if !self.stages.contains_key(name) {
            return Err(GameError::UnknownStage(name.to_string()));
        }
        if let Some(stage) = self.current_stage_mut() {
            stage.stop();
        }
        log::info!("Switching to stage `{}`", name);
        self.current = Some(name.to_string());
        self.start(renderer)
    }

    pub fn dispatch(&mut self, command: Command, renderer: &mut dyn Renderer) -> Result<(), GameError> {
        match command {
            Command::SwitchStage(name) => self.switch_stage(&name, renderer),
            Command::Stage(command) => {
                let stage = self.current_stage_mut().ok_or(GameError::NoCurrentStage)?;
                stage.handle(command, renderer)?;
                Ok(())
            }
        }
    }

    /// Map a raw key event through the bindings and dispatch it
    ///
    /// Unbound keys are ignored.
    pub fn handle_key(&mut self, code: &str, pressed: bool, renderer: &mut dyn Renderer) -> Result<(), GameError> {
        match self.bindings.command(code, pressed) {
            Some(command) => self.dispatch(command, renderer),
            None => Ok(()),
        }
    }

    /// Run one frame of the current stage
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> Result<Frame, GameError> {
        let stage = self.current_stage_mut().ok_or(GameError::NoCurrentStage)?;
        Ok(stage.update(renderer)?)
    }

    /// Gameplay events the current stage raised since the last drain
    pub fn drain_events(&mut self) -> Vec<StageEvent> {
        self.current_stage_mut()
            .map(|stage| stage.drain_events())
            .unwrap_or_default()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_stage(&self) -> Option<&dyn Stage> {
        let name = self.current.as_ref()?;
        self.stages.get(name).map(|stage| &**stage)
    }

    fn current_stage_mut(&mut self) -> Option<&mut Box<dyn Stage>> {
        let name = self.current.as_ref()?;
        self.stages.get_mut(name)
    }

    pub fn stage(&self, name: &str) -> Option<&dyn Stage> {
        self.stages.get(name).map(|stage| &**stage)
    }
}
