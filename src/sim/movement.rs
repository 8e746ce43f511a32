//! Movement resolution
//!
//! Turns a direction intent into a position delta. Player steps are gated
//! by an all-or-nothing feasibility check against larger cells: the step
//! is either taken in full or not at all, with no sliding.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::state::{Disk, GameState};
use super::tick::TickInput;

/// Per-axis direction intent in {-1, 0, 1}, diagonals pre-scaled
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionIntent(pub Vec2);

impl DirectionIntent {
    /// Build an intent from held keys (screen coordinates, +y is down).
    /// Opposing keys cancel out.
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        let mut dir = Vec2::new(axis(left, right), axis(up, down));
        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= FRAC_1_SQRT_2;
        }
        Self(dir)
    }

    pub fn is_idle(&self) -> bool {
        self.0 == Vec2::ZERO
    }
}

impl From<&TickInput> for DirectionIntent {
    fn from(input: &TickInput) -> Self {
        Self::from_keys(input.up, input.down, input.left, input.right)
    }
}

/// Size-scaled speed: `base` up to `pivot` radius, then inversely
/// proportional to radius
#[inline]
pub fn effective_speed(base_speed: f32, radius: f32, pivot: f32) -> f32 {
    base_speed * (pivot / radius.max(pivot))
}

/// Whether a disk of `radius` may occupy `candidate`.
///
/// Only cells with radius above `radius * size_ratio` block; each keeps
/// the mover at least `radius + other - margin` away.
pub fn is_move_feasible<'a>(
    radius: f32,
    candidate: Vec2,
    others: impl IntoIterator<Item = &'a Disk>,
    margin: f32,
    size_ratio: f32,
) -> bool {
    others.into_iter().all(|other| {
        other.radius() <= radius * size_ratio
            || candidate.distance(other.pos) >= radius + other.radius() - margin
    })
}

/// Apply the tick's input to the player. Returns true if the player moved.
pub fn resolve_player_move(state: &mut GameState, input: &TickInput) -> bool {
    let intent = DirectionIntent::from(input);
    if intent.is_idle() {
        return false;
    }

    let settings = &state.settings;
    let player = &state.player.disk;
    let speed = effective_speed(player.base_speed, player.radius(), settings.player_speed_pivot);
    let candidate = player.pos + intent.0 * speed;
    if !candidate.is_finite() {
        return false;
    }

    let feasible = is_move_feasible(
        player.radius(),
        candidate,
        state.bots.iter().map(|b| &b.disk),
        settings.overlap_margin,
        settings.size_ratio,
    );

    if feasible {
        state.player.disk.pos = candidate;
    }
    feasible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Bot;

    fn disk(x: f32, y: f32, r: f32) -> Disk {
        Disk::new(Vec2::new(x, y), r, [90, 90, 90], 3.0)
    }

    fn empty_world() -> GameState {
        GameState::new(Settings {
            food_count: 0,
            bot_count: 0,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_intent_axes_and_diagonal() {
        assert_eq!(DirectionIntent::from_keys(false, false, true, false).0, Vec2::new(-1.0, 0.0));
        assert_eq!(DirectionIntent::from_keys(false, true, false, false).0, Vec2::new(0.0, 1.0));
        assert!(DirectionIntent::from_keys(true, true, true, true).is_idle());

        let diag = DirectionIntent::from_keys(true, false, false, true).0;
        assert!((diag.length() - 1.0).abs() < 1e-6);
        assert!(diag.x > 0.0 && diag.y < 0.0);
    }

    #[test]
    fn test_speed_law() {
        assert_eq!(effective_speed(3.0, 20.0, 200.0), 3.0);
        assert_eq!(effective_speed(3.0, 200.0, 200.0), 3.0);
        assert_eq!(effective_speed(3.0, 400.0, 200.0), 1.5);
        assert!(effective_speed(3.0, 800.0, 200.0) < effective_speed(3.0, 400.0, 200.0));
        assert_eq!(effective_speed(3.0, 60.0, 30.0), 1.5);
    }

    #[test]
    fn test_feasibility_blocks_steps_into_larger_cell() {
        // Blocker at distance 34 with threshold 20 + 20 - 5 = 35: already violating
        let blocker = disk(34.0, 0.0, 20.0);

        // Stepping toward it or sideways keeps it under 35: rejected
        assert!(!is_move_feasible(20.0, Vec2::new(3.0, 0.0), [&blocker], 5.0, 0.8));
        assert!(!is_move_feasible(20.0, Vec2::new(0.0, -3.0), [&blocker], 5.0, 0.8));

        // Stepping away reaches 37: accepted
        assert!(is_move_feasible(20.0, Vec2::new(-3.0, 0.0), [&blocker], 5.0, 0.8));
    }

    #[test]
    fn test_feasibility_at_exact_threshold() {
        let blocker = disk(35.0, 0.0, 20.0);
        // Exactly at the threshold is allowed
        assert!(is_move_feasible(20.0, Vec2::ZERO, [&blocker], 5.0, 0.8));
        // Any step reducing the distance is rejected
        assert!(!is_move_feasible(20.0, Vec2::new(1.0, 0.0), [&blocker], 5.0, 0.8));
    }

    #[test]
    fn test_small_cells_never_block() {
        // 16 is exactly 20 * 0.8: not strictly larger, so no blocking
        let small = disk(1.0, 0.0, 16.0);
        assert!(is_move_feasible(20.0, Vec2::ZERO, [&small], 5.0, 0.8));
    }

    #[test]
    fn test_player_move_applies_speed() {
        let mut state = empty_world();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        assert!(resolve_player_move(&mut state, &input));
        assert_eq!(state.player.disk.pos, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_player_blocked_by_large_bot() {
        let mut state = empty_world();
        state.bots.push(Bot::new(disk(34.0, 0.0, 20.0)));
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        assert!(!resolve_player_move(&mut state, &input));
        assert_eq!(state.player.disk.pos, Vec2::ZERO);

        let back = TickInput {
            left: true,
            ..Default::default()
        };
        assert!(resolve_player_move(&mut state, &back));
        assert_eq!(state.player.disk.pos, Vec2::new(-3.0, 0.0));
    }
}
