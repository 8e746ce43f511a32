//! Input intents
//!
//! A real window samples held arrow keys into a [`TickInput`]. Headless
//! runs use the autopilot below, which plays like a cautious human.

use glam::Vec2;

use crate::sim::{GameState, TickInput, dominates};

/// Offsets smaller than this on an axis leave that key released
const AXIS_DEAD_ZONE: f32 = 1.0;

/// Flee the nearest dangerous bot in range, otherwise chase the nearest food
pub fn autopilot_input(state: &GameState) -> TickInput {
    let player = &state.player.disk;
    let settings = &state.settings;

    let threat = state
        .bots
        .iter()
        .map(|b| &b.disk)
        .filter(|d| dominates(d.radius(), player.radius(), settings.dominance_ratio))
        .map(|d| (player.distance_to(d.pos), d.pos))
        .filter(|(dist, _)| *dist < settings.avoid_radius)
        .min_by(|a, b| a.0.total_cmp(&b.0));

    let heading = if let Some((_, danger)) = threat {
        player.pos - danger
    } else {
        state
            .foods
            .iter()
            .map(|f| f.pos())
            .min_by(|a, b| player.distance_to(*a).total_cmp(&player.distance_to(*b)))
            .map(|food| food - player.pos)
            .unwrap_or(Vec2::ZERO)
    };

    keys_toward(heading)
}

/// Arrow keys that move along `heading` (screen coordinates, +y down)
pub fn keys_toward(heading: Vec2) -> TickInput {
    TickInput {
        up: heading.y < -AXIS_DEAD_ZONE,
        down: heading.y > AXIS_DEAD_ZONE,
        left: heading.x < -AXIS_DEAD_ZONE,
        right: heading.x > AXIS_DEAD_ZONE,
    }
}
