//! Collision and consumption resolution
//!
//! Runs once per tick after all movement, in three ordered passes:
//! player vs food, player vs bots, then bots vs food and each other.
//!
//! Every pass scans a stable index range and collects victims first, then
//! respawns them in place. Replacement entities are never examined by the
//! pass that created them, and food/bot counts never change.

use super::state::{GameEvent, GameState};

/// Resolve every overlap produced by this tick's movement
pub fn resolve_collisions(state: &mut GameState) {
    let food_count = state.foods.len();
    let bot_count = state.bots.len();

    player_eats_food(state);
    if player_vs_bots(state) {
        bots_eat(state);
    }

    debug_assert_eq!(state.foods.len(), food_count);
    debug_assert_eq!(state.bots.len(), bot_count);
}

/// `predator` may eat `prey` only when strictly larger by the dominance ratio
#[inline]
pub fn dominates(predator_radius: f32, prey_radius: f32, ratio: f32) -> bool {
    predator_radius > prey_radius * ratio
}

/// Cells interact once centers are closer than the radii sum minus `margin`
#[inline]
pub fn cells_overlap(distance: f32, r1: f32, r2: f32, margin: f32) -> bool {
    distance < r1 + r2 - margin
}

/// Pass 1: the player eats every food its center-disk covers.
///
/// Growth applies immediately, so later food is tested against the new
/// radius.
fn player_eats_food(state: &mut GameState) {
    let growth = state.settings.player_food_growth;
    let mut eaten = Vec::new();

    for (index, food) in state.foods.iter().enumerate() {
        let player = &mut state.player.disk;
        if player.distance_to(food.pos()) < player.radius() {
            player.grow(growth);
            eaten.push(index);
        }
    }

    for index in eaten {
        log::debug!("player ate food {index}");
        state.events.push(GameEvent::PlayerAteFood { food: index });
        state.respawn_food(index);
    }
}

/// Pass 2: player against every bot. Returns false once the player is
/// eaten; nothing else is mutated after that.
fn player_vs_bots(state: &mut GameState) -> bool {
    let settings = &state.settings;
    let (ratio, margin, factor) = (
        settings.dominance_ratio,
        settings.overlap_margin,
        settings.prey_growth_factor,
    );
    let mut eaten = Vec::new();
    let mut eaten_by = None;

    for (index, bot) in state.bots.iter().enumerate() {
        let player = &mut state.player.disk;
        let bot = &bot.disk;
        let distance = player.distance_to(bot.pos);
        if !cells_overlap(distance, player.radius(), bot.radius(), margin) {
            continue;
        }
        if dominates(player.radius(), bot.radius(), ratio) {
            player.grow(bot.radius() * factor);
            eaten.push((index, bot.radius()));
        } else if dominates(bot.radius(), player.radius(), ratio) {
            eaten_by = Some(index);
            break;
        }
        // Near-equal sizes: no effect
    }

    for (index, prey_radius) in eaten {
        log::debug!("player ate bot {index} (radius {prey_radius:.1})");
        state.events.push(GameEvent::PlayerAteBot {
            bot: index,
            prey_radius,
        });
        state.respawn_bot(index);
    }

    if let Some(bot) = eaten_by {
        state.events.push(GameEvent::PlayerEaten { bot });
        state.mark_lost();
        return false;
    }
    true
}

/// Pass 3: each live bot eats overlapping food, then at most one smaller
/// live bot.
fn bots_eat(state: &mut GameState) {
    let settings = state.settings.clone();
    let bot_count = state.bots.len();
    let mut gone = vec![false; bot_count];

    for predator in 0..bot_count {
        if gone[predator] {
            continue;
        }

        // Food first; respawn after this predator's scan so the next
        // predator sees the replacements
        let mut eaten_food = Vec::new();
        for (index, food) in state.foods.iter().enumerate() {
            let me = &mut state.bots[predator].disk;
            if me.distance_to(food.pos()) < me.radius() {
                me.grow(settings.bot_food_growth);
                eaten_food.push(index);
            }
        }
        for index in eaten_food {
            state.events.push(GameEvent::BotAteFood {
                bot: predator,
                food: index,
            });
            state.respawn_food(index);
        }

        let me = &state.bots[predator].disk;
        let victim = (0..bot_count).find(|&prey| {
            if prey == predator || gone[prey] {
                return false;
            }
            let other = &state.bots[prey].disk;
            cells_overlap(
                me.distance_to(other.pos),
                me.radius(),
                other.radius(),
                settings.overlap_margin,
            ) && dominates(me.radius(), other.radius(), settings.dominance_ratio)
        });

        if let Some(prey) = victim {
            let prey_radius = state.bots[prey].disk.radius();
            state.bots[predator]
                .disk
                .grow(prey_radius * settings.prey_growth_factor);
            gone[prey] = true;
            log::debug!("bot {predator} ate bot {prey}");
            state.events.push(GameEvent::BotAteBot { predator, prey });
        }
    }

    for (index, _) in gone.iter().enumerate().filter(|(_, g)| **g) {
        state.respawn_bot(index);
    }
}
