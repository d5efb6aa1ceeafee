//! Game settings
//!
//! Loaded from JSON; any key left out falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::sim::{Bounds, Color};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particles spawned per destroyed brick
    pub fn burst_count(&self) -> usize {
        match self {
            QualityPreset::Low => 6,
            QualityPreset::Medium => 12,
            QualityPreset::High => 24,
        }
    }
}

/// Particle burst tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstSettings {
    /// Particles per burst
    pub count: usize,
    /// Minimum speed (pixels per tick)
    pub base_speed: f32,
    /// Extra speed drawn uniformly from `[0, speed_jitter)`
    pub speed_jitter: f32,
    /// Edge length of each particle
    pub size: f32,
    /// Colors a particle may start with
    pub palette: Vec<Color>,
}

impl Default for BurstSettings {
    fn default() -> Self {
        Self {
            count: QualityPreset::default().burst_count(),
            base_speed: 0.5,
            speed_jitter: 2.0,
            size: 3.0,
            palette: vec![
                Color::rgb(255, 236, 179),
                Color::rgb(255, 183, 77),
                Color::rgb(255, 112, 67),
                Color::rgb(255, 255, 255),
            ],
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Particles ===
    /// Seed for particle bursts
    pub seed: u64,
    pub burst: BurstSettings,

    // === Input ===
    pub key_bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            seed: 0x5eed,
            burst: BurstSettings::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        self.burst.count = preset.burst_count();
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas_width, self.canvas_height)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings ({} quality)", settings.quality.as_str());
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "canvas",
                reason: format!("{}x{} is not a drawable size", self.canvas_width, self.canvas_height),
            });
        }
        if !(self.burst.base_speed >= 0.0 && self.burst.speed_jitter >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "burst",
                reason: "speeds must be non-negative".to_string(),
            });
        }
        if !(self.burst.size >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "burst.size",
                reason: format!("{} is negative", self.burst.size),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_round_trip_names() {
        for preset in [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High] {
            assert_eq!(QualityPreset::parse(preset.as_str()), Some(preset));
        }
        assert_eq!(QualityPreset::parse("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
    }

    #[test]
    fn test_from_preset_sets_burst_count() {
        let settings = Settings::from_preset(QualityPreset::High);
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.burst.count, 24);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"seed": 42, "burst": {"count": 3}}"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.burst.count, 3);
        assert_eq!(settings.burst.size, BurstSettings::default().size);
        assert_eq!(settings.canvas_width, CANVAS_WIDTH);
        assert_eq!(settings.key_bindings, KeyBindings::default());
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        let err = Settings::from_json(r#"{"canvas_width": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "canvas", .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_to_json_parses_back() {
        let settings = Settings::from_preset(QualityPreset::Low);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
