//! Error types for stages, the registry, and configuration loading
//!
//! All errors are synchronous and local to the call that raised them;
//! nothing here is retried.

use thiserror::Error;

/// Errors raised by a single stage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    /// `update` was called before `init` loaded the entities
    #[error("stage `{0}` updated before its entities finished loading")]
    NotLoaded(&'static str),

    /// `init`/`restart` was called before `set_layout_data`
    #[error("stage `{0}` has no layout data")]
    MissingLayout(&'static str),

    /// Layout data failed validation
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Errors raised by the stage registry
#[derive(Debug, Error)]
pub enum GameError {
    /// A stage was addressed by a name that was never registered
    #[error("unknown stage `{0}`")]
    UnknownStage(String),

    /// `start` was called with no current stage selected
    #[error("no current stage selected")]
    NoCurrentStage,

    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Errors raised while loading settings or layout data
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error(transparent)]
    Layout(#[from] StageError),
}
