//! Follow camera and mass-driven zoom
//!
//! Both are pure functions of the player: the camera has no smoothing and
//! zoom carries no state between frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::settings::Settings;

/// Camera for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World point drawn at the viewport center
    pub center: Vec2,
    pub zoom: f32,
}

impl Camera {
    /// Camera centered on the player, zoomed for its mass
    pub fn follow(state: &GameState) -> Self {
        let player = &state.player.disk;
        Self {
            center: player.pos,
            zoom: zoom_for_mass(player.mass(), &state.settings),
        }
    }
}

/// `1 - max(0, (mass - offset) / scale) * falloff`, clamped to the zoom bounds
pub fn zoom_for_mass(mass: f32, settings: &Settings) -> f32 {
    let mass_factor = ((mass - settings.zoom_mass_offset) / settings.zoom_mass_scale).max(0.0);
    let zoom = 1.0 - mass_factor * settings.zoom_falloff;
    zoom.clamp(settings.min_zoom, settings.max_zoom)
}
