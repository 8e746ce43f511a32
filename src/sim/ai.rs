//! Bot decision policy
//!
//! Each bot re-picks a target every `decision_interval` ticks: the nearest
//! food or edible cell, or a random wander point when nothing qualifies.
//! Every tick it steers toward that target and, when a much larger player
//! is close, is pushed away from it on top of the seeking step.

use glam::Vec2;
use rand::Rng;

use super::movement::{effective_speed, is_move_feasible};
use super::state::GameState;

/// Run decision and steering for every bot, in index order.
///
/// Bots update sequentially, so a bot sees positions already updated by
/// lower-indexed bots this tick.
pub fn update_bots(state: &mut GameState) {
    for index in 0..state.bots.len() {
        update_bot(state, index);
    }
}

/// Count down, re-decide when due, then steer
pub fn update_bot(state: &mut GameState, index: usize) {
    let interval = state.settings.decision_interval;
    let bot = &mut state.bots[index];
    bot.decision_timer -= 1;
    if bot.decision_timer <= 0 {
        bot.decision_timer = interval;
        let target = choose_target(state, index);
        state.bots[index].target = target;
    }
    steer_bot(state, index);
}

/// Nearest food or edible cell, else a random wander point
pub fn choose_target(state: &mut GameState, index: usize) -> Vec2 {
    if let Some(target) = nearest_prey(state, index) {
        return target;
    }
    let origin = state.bots[index].disk.pos;
    let range = state.settings.wander_range;
    let rng = state.rng_mut();
    let offset = Vec2::new(
        rng.random_range(-range..=range) as f32,
        rng.random_range(-range..=range) as f32,
    );
    log::trace!("bot {index} wandering toward {:?}", origin + offset);
    origin + offset
}

/// Position of the closest candidate among all food, the player, and the
/// other bots smaller than `own_radius * size_ratio`.
///
/// Ties keep the first one seen: food in order, then the player, then bots.
pub fn nearest_prey(state: &GameState, index: usize) -> Option<Vec2> {
    let me = &state.bots[index].disk;
    let edible_below = me.radius() * state.settings.size_ratio;

    let foods = state.foods.iter().map(|f| f.pos());
    let cells = std::iter::once(&state.player.disk)
        .chain(
            state
                .bots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != index)
                .map(|(_, b)| &b.disk),
        )
        .filter(|d| d.radius() < edible_below)
        .map(|d| d.pos);

    let mut best: Option<(f32, Vec2)> = None;
    for pos in foods.chain(cells) {
        let dist = me.distance_to(pos);
        if best.is_none_or(|(d, _)| dist < d) {
            best = Some((dist, pos));
        }
    }
    best.map(|(_, pos)| pos)
}

/// Move toward the target, then away from a threatening player
pub fn steer_bot(state: &mut GameState, index: usize) {
    let settings = &state.settings;
    let bot = &state.bots[index];
    let me = &bot.disk;
    let speed = effective_speed(me.base_speed, me.radius(), settings.bot_speed_pivot);

    let to_target = bot.target - me.pos;
    let dist = to_target.length().max(settings.steer_epsilon);
    let mut next = me.pos + to_target / dist * speed;
    if !next.is_finite() {
        log::warn!("bot {index} produced a non-finite seek step, skipping");
        next = me.pos;
    }

    let player = &state.player.disk;
    if player.radius() > me.radius() * settings.threat_ratio {
        let away = next - player.pos;
        if away.length() < settings.avoid_radius {
            // Coincident centers have no escape direction: skip the push
            if let Some(dir) = away.try_normalize() {
                next += dir * speed * settings.avoid_push;
            }
        }
    }

    if settings.gate_bot_movement {
        let others = std::iter::once(player).chain(
            state
                .bots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != index)
                .map(|(_, b)| &b.disk),
        );
        if !is_move_feasible(
            me.radius(),
            next,
            others,
            settings.overlap_margin,
            settings.size_ratio,
        ) {
            return;
        }
    }

    state.bots[index].disk.pos = next;
}
