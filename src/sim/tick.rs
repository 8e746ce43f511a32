//! Fixed timestep simulation tick
//!
//! Advances the world by one step: player movement, bot AI, collisions,
//! camera follow, then the win check. Terminal worlds do not advance.

use super::state::{GameEvent, GameState};
use super::{ai, collision, movement};

/// Input commands for a single tick: directions currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    check_win(state);
    if state.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    movement::resolve_player_move(state, input);
    ai::update_bots(state);
    collision::resolve_collisions(state);
    state.camera = state.player.disk.pos;

    check_win(state);
    state.debug_check_invariants();
}

/// Win is independent of loss: both flags can end up set in the same tick
fn check_win(state: &mut GameState) {
    if !state.is_won() && state.player.disk.mass() >= state.settings.win_mass {
        state.mark_won();
        state.events.push(GameEvent::Won);
    }
}
