use cell_arena::settings::Settings;
use cell_arena::sim::{Disk, Food, GameState, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn input_from_bits(bits: u8) -> TickInput {
    TickInput {
        up: bits & 1 != 0,
        down: bits & 2 != 0,
        left: bits & 4 != 0,
        right: bits & 8 != 0,
    }
}

fn crowded(seed: u64) -> Settings {
    // Small spawn squares so eating actually happens within a short run
    Settings {
        seed,
        food_count: 120,
        bot_count: 12,
        food_spawn_extent: 250,
        bot_spawn_extent: 200,
        ..Default::default()
    }
}

#[test]
fn single_food_end_to_end() {
    let mut state = GameState::new(Settings {
        seed: 2024,
        food_count: 1,
        bot_count: 0,
        ..Default::default()
    })
    .unwrap();
    state.foods[0] = Food::new(Vec2::new(10.0, 0.0), 5.0, [100, 100, 100]);

    tick(&mut state, &TickInput::default());

    assert_eq!(state.player.disk.radius(), 25.0);
    assert_eq!(state.player.disk.mass(), 625.0);
    assert_eq!(state.foods.len(), 1);
    assert_ne!(state.foods[0].pos(), Vec2::new(10.0, 0.0));
    assert!(!state.is_terminal());
}

#[test]
fn long_run_keeps_counts() {
    let mut state = GameState::new(crowded(31337)).unwrap();
    let mut ate_something = false;
    for i in 0..2000u32 {
        tick(&mut state, &input_from_bits((i / 45 % 16) as u8));
        ate_something |= !state.events.is_empty();
        assert_eq!(state.foods.len(), 120);
        assert_eq!(state.bots.len(), 12);
        assert!(state.cells().all(|d| d.pos.is_finite()));
    }
    assert!(ate_something);
}

#[test]
fn player_eats_bot_through_tick() {
    let mut state = GameState::new(Settings {
        seed: 8,
        food_count: 0,
        bot_count: 1,
        ..Default::default()
    })
    .unwrap();
    state.player.disk = Disk::new(Vec2::ZERO, 23.0, [1, 1, 1], 3.0);
    state.bots[0].disk = Disk::new(Vec2::new(20.0, 0.0), 20.0, [2, 2, 2], 3.0);
    state.bots[0].decision_timer = 50;
    state.bots[0].target = Vec2::new(20.0, 0.0);

    tick(&mut state, &TickInput::default());

    assert!((state.player.disk.radius() - 29.0).abs() < 1e-4);
    assert!((state.player.disk.mass() - 841.0).abs() < 1e-2);
    assert_eq!(state.bots.len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counts_and_mass_hold_for_any_input(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(0u8..16, 1..200),
    ) {
        let mut state = GameState::new(crowded(seed)).unwrap();
        let mut was_lost = false;
        for bits in inputs {
            tick(&mut state, &input_from_bits(bits));

            prop_assert_eq!(state.foods.len(), 120);
            prop_assert_eq!(state.bots.len(), 12);
            for disk in state.cells() {
                prop_assert!(disk.radius() > 0.0 && disk.radius().is_finite());
                prop_assert_eq!(disk.mass(), disk.radius() * disk.radius());
                prop_assert!(disk.pos.is_finite());
            }
            // Loss never reverts
            prop_assert!(!was_lost || state.is_lost());
            was_lost = state.is_lost();
        }
    }

    #[test]
    fn growth_keeps_mass_consistent(steps in proptest::collection::vec(0.0f32..50.0, 0..64)) {
        let mut disk = Disk::new(Vec2::ZERO, 20.0, [0, 0, 0], 3.0);
        let mut expected = 20.0f32;
        for step in steps {
            disk.grow(step);
            expected += step;
            prop_assert_eq!(disk.radius(), expected);
            prop_assert_eq!(disk.mass(), expected * expected);
        }
    }

    #[test]
    fn player_never_moves_into_larger_bot(seed in any::<u64>(), bits in 1u8..16) {
        let mut state = GameState::new(Settings {
            seed,
            food_count: 0,
            bot_count: 1,
            ..Default::default()
        })
        .unwrap();
        state.bots[0].disk = Disk::new(Vec2::new(34.0, 0.0), 20.0, [0, 0, 0], 3.0);
        state.bots[0].decision_timer = 1000;
        state.bots[0].target = Vec2::new(34.0, 0.0);

        let before = state.player.disk.pos.distance(state.bots[0].disk.pos);
        tick(&mut state, &input_from_bits(bits));
        let after = state.player.disk.pos.distance(state.bots[0].disk.pos);

        // Already inside the 35-unit threshold: only steps that reach it are taken
        prop_assert!(after >= 35.0 || after == before);
    }
}
