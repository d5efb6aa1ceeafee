//! Keyboard input mapping
//!
//! Raw key codes (`KeyboardEvent.code`) never reach a stage. They are mapped
//! here to semantic commands through a configurable binding table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_STAGE, TITLE_STAGE};

/// Commands a stage understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageCommand {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Pause,
    Resume,
    Restart,
}

/// Commands delivered to the stage registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stage(StageCommand),
    SwitchStage(String),
}

impl From<StageCommand> for Command {
    fn from(command: StageCommand) -> Self {
        Command::Stage(command)
    }
}

/// What a bound key does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Held to move left
    MoveLeft,
    /// Held to move right
    MoveRight,
    Pause,
    Resume,
    Restart,
    SwitchStage(String),
}

/// Key code to action table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(BTreeMap<String, KeyAction>);

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            ("ArrowLeft", KeyAction::MoveLeft),
            ("KeyA", KeyAction::MoveLeft),
            ("ArrowRight", KeyAction::MoveRight),
            ("KeyD", KeyAction::MoveRight),
            ("KeyP", KeyAction::Pause),
            ("Space", KeyAction::Resume),
            ("KeyR", KeyAction::Restart),
            ("Enter", KeyAction::SwitchStage(GAME_STAGE.to_string())),
            ("Escape", KeyAction::SwitchStage(TITLE_STAGE.to_string())),
        ];
        Self(
            bindings
                .into_iter()
                .map(|(code, action)| (code.to_string(), action))
                .collect(),
        )
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Bind a key code, replacing any previous binding
    pub fn bind(&mut self, code: impl Into<String>, action: KeyAction) {
        self.0.insert(code.into(), action);
    }

    pub fn action(&self, code: &str) -> Option<&KeyAction> {
        self.0.get(code)
    }

    /// Translate a key press (`pressed = true`) or release into a command
    ///
    /// Movement keys act on both edges; everything else fires on press only.
    pub fn command(&self, code: &str, pressed: bool) -> Option<Command> {
        let command = match (self.action(code)?, pressed) {
            (KeyAction::MoveLeft, true) => StageCommand::MoveLeftStart.into(),
            (KeyAction::MoveLeft, false) => StageCommand::MoveLeftStop.into(),
            (KeyAction::MoveRight, true) => StageCommand::MoveRightStart.into(),
            (KeyAction::MoveRight, false) => StageCommand::MoveRightStop.into(),
            (_, false) => return None,
            (KeyAction::Pause, true) => StageCommand::Pause.into(),
            (KeyAction::Resume, true) => StageCommand::Resume.into(),
            (KeyAction::Restart, true) => StageCommand::Restart.into(),
            (KeyAction::SwitchStage(name), true) => Command::SwitchStage(name.clone()),
        };
        Some(command)
    }
}
