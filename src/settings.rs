//! Game settings and tuning
//!
//! Every gameplay constant lives here so a run can be reshaped from a JSON
//! file without recompiling. Missing fields fall back to [`crate::consts`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for world generation, spawns and bot wandering
    pub seed: u64,

    // === Window / clock ===
    pub window_width: u32,
    pub window_height: u32,
    /// Frames and ticks per second
    pub fps: u32,

    // === Player ===
    pub player_start_radius: f32,
    pub cell_base_speed: f32,
    pub player_speed_pivot: f32,

    // === Food ===
    pub food_count: usize,
    pub food_radius: f32,
    pub food_spawn_extent: i32,

    // === Bots ===
    pub bot_count: usize,
    pub bot_spawn_extent: i32,
    pub bot_min_radius: i32,
    pub bot_max_radius: i32,
    pub bot_speed_pivot: f32,
    /// Run the player's blocking check on bot movement too
    pub gate_bot_movement: bool,

    // === Growth and eating ===
    pub win_mass: f32,
    pub player_food_growth: f32,
    pub bot_food_growth: f32,
    pub prey_growth_factor: f32,
    pub dominance_ratio: f32,
    pub overlap_margin: f32,
    pub size_ratio: f32,

    // === Bot AI ===
    pub decision_interval: i32,
    pub wander_range: i32,
    pub threat_ratio: f32,
    pub avoid_radius: f32,
    pub avoid_push: f32,
    pub steer_epsilon: f32,

    // === Camera ===
    pub zoom_mass_offset: f32,
    pub zoom_mass_scale: f32,
    pub zoom_falloff: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,

            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: SIM_FPS,

            player_start_radius: PLAYER_START_RADIUS,
            cell_base_speed: CELL_BASE_SPEED,
            player_speed_pivot: PLAYER_SPEED_PIVOT,

            food_count: FOOD_COUNT,
            food_radius: FOOD_RADIUS,
            food_spawn_extent: FOOD_SPAWN_EXTENT,

            bot_count: BOT_COUNT,
            bot_spawn_extent: BOT_SPAWN_EXTENT,
            bot_min_radius: BOT_MIN_RADIUS,
            bot_max_radius: BOT_MAX_RADIUS,
            bot_speed_pivot: BOT_SPEED_PIVOT,
            gate_bot_movement: false,

            win_mass: WIN_MASS,
            player_food_growth: PLAYER_FOOD_GROWTH,
            bot_food_growth: BOT_FOOD_GROWTH,
            prey_growth_factor: PREY_GROWTH_FACTOR,
            dominance_ratio: DOMINANCE_RATIO,
            overlap_margin: OVERLAP_MARGIN,
            size_ratio: SIZE_RATIO,

            decision_interval: DECISION_INTERVAL,
            wander_range: WANDER_RANGE,
            threat_ratio: THREAT_RATIO,
            avoid_radius: AVOID_RADIUS,
            avoid_push: AVOID_PUSH,
            steer_epsilon: STEER_EPSILON,

            zoom_mass_offset: ZOOM_MASS_OFFSET,
            zoom_mass_scale: ZOOM_MASS_SCALE,
            zoom_falloff: ZOOM_FALLOFF,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (used to print a starter config)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_start_radius", self.player_start_radius),
            ("cell_base_speed", self.cell_base_speed),
            ("player_speed_pivot", self.player_speed_pivot),
            ("bot_speed_pivot", self.bot_speed_pivot),
            ("food_radius", self.food_radius),
            ("win_mass", self.win_mass),
            ("dominance_ratio", self.dominance_ratio),
            ("size_ratio", self.size_ratio),
            ("steer_epsilon", self.steer_epsilon),
            ("zoom_mass_scale", self.zoom_mass_scale),
            ("min_zoom", self.min_zoom),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be greater than 0".into()));
        }
        if self.decision_interval <= 0 {
            return Err(ConfigError::Invalid(
                "decision_interval must be greater than 0".into(),
            ));
        }
        if self.food_spawn_extent <= 0 || self.bot_spawn_extent <= 0 {
            return Err(ConfigError::Invalid(
                "spawn extents must be greater than 0".into(),
            ));
        }
        if self.wander_range < 0 {
            return Err(ConfigError::Invalid(
                "wander_range must not be negative".into(),
            ));
        }
        if self.bot_min_radius <= 0 || self.bot_max_radius <= self.bot_min_radius {
            return Err(ConfigError::Invalid(format!(
                "bot radius range [{}, {}) is empty or non-positive",
                self.bot_min_radius, self.bot_max_radius
            )));
        }
        if self.max_zoom < self.min_zoom {
            return Err(ConfigError::Invalid(format!(
                "max_zoom {} is below min_zoom {}",
                self.max_zoom, self.min_zoom
            )));
        }

        if self.overlap_margin < 0.0 {
            log::warn!(
                "overlap_margin {} is negative; cells will interact before touching",
                self.overlap_margin
            );
        }

        Ok(())
    }
}
