//! Game state and core simulation types
//!
//! The world exclusively owns every entity. Nothing holds a reference to
//! another entity; who-eats-whom is recomputed every tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::{ConfigError, Settings};

/// Cosmetic RGB color, assigned once at creation
pub type Color = [u8; 3];

/// Random cosmetic color with every channel in [50, 180)
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    [
        rng.random_range(50..180),
        rng.random_range(50..180),
        rng.random_range(50..180),
    ]
}

/// A moving disk: the capability shared by the player and the bots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub pos: Vec2,
    radius: f32,
    color: Color,
    /// Speed at or below the size pivot (units per tick)
    pub base_speed: f32,
}

impl Disk {
    pub fn new(pos: Vec2, radius: f32, color: Color, base_speed: f32) -> Self {
        debug_assert!(radius > 0.0, "disk radius must be positive, got {radius}");
        Self {
            pos,
            radius,
            color,
            base_speed,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Mass is always radius², never stored
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The only way a disk changes size
    pub fn grow(&mut self, amount: f32) {
        debug_assert!(amount.is_finite() && amount >= 0.0);
        self.radius += amount;
    }

    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }
}

/// The player's cell, driven by input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub disk: Disk,
}

impl Player {
    /// Player starts at the origin with the configured radius
    pub fn new<R: Rng>(rng: &mut R, settings: &Settings) -> Self {
        Self {
            disk: Disk::new(
                Vec2::ZERO,
                settings.player_start_radius,
                random_color(rng),
                settings.cell_base_speed,
            ),
        }
    }
}

/// An AI-controlled cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub disk: Disk,
    /// Point the bot is currently steering toward
    pub target: Vec2,
    /// Ticks until the next target re-evaluation (re-evaluates at <= 0)
    pub decision_timer: i32,
}

impl Bot {
    /// Bot at a given position; decides on its first update
    pub fn new(disk: Disk) -> Self {
        Self {
            target: disk.pos,
            disk,
            decision_timer: 0,
        }
    }

    /// Bot at a random spawn point with a random radius
    pub fn random<R: Rng>(rng: &mut R, settings: &Settings) -> Self {
        let extent = settings.bot_spawn_extent;
        let pos = Vec2::new(
            rng.random_range(-extent..extent) as f32,
            rng.random_range(-extent..extent) as f32,
        );
        let radius = rng.random_range(settings.bot_min_radius..settings.bot_max_radius) as f32;
        Self::new(Disk::new(
            pos,
            radius,
            random_color(rng),
            settings.cell_base_speed,
        ))
    }
}

/// A passive food pellet. Never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pos: Vec2,
    radius: f32,
    color: Color,
}

impl Food {
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self { pos, radius, color }
    }

    /// Food at a random point of the spawn square
    pub fn random<R: Rng>(rng: &mut R, settings: &Settings) -> Self {
        let extent = settings.food_spawn_extent;
        let pos = Vec2::new(
            rng.random_range(-extent..extent) as f32,
            rng.random_range(-extent..extent) as f32,
        );
        Self::new(pos, settings.food_radius, random_color(rng))
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerAteFood { food: usize },
    PlayerAteBot { bot: usize, prey_radius: f32 },
    BotAteFood { bot: usize, food: usize },
    BotAteBot { predator: usize, prey: usize },
    /// A bot dominated the player; the run is lost
    PlayerEaten { bot: usize },
    /// Player reached the win mass
    Won,
}

/// Complete world state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    rng: Pcg32,
    pub player: Player,
    /// Fixed cardinality: `settings.food_count`
    pub foods: Vec<Food>,
    /// Fixed cardinality: `settings.bot_count`
    pub bots: Vec<Bot>,
    /// Camera center, follows the player
    pub camera: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    lost: bool,
    won: bool,
}

impl GameState {
    /// Create a world seeded from `settings.seed`
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self::with_rng(settings, rng)
    }

    /// Create a world drawing every random choice from `rng`.
    ///
    /// Fails when `settings` would leave a spawn or wander range empty.
    pub fn with_rng(settings: Settings, mut rng: Pcg32) -> Result<Self, ConfigError> {
        settings.validate()?;

        let player = Player::new(&mut rng, &settings);
        let foods = (0..settings.food_count)
            .map(|_| Food::random(&mut rng, &settings))
            .collect();
        let bots = (0..settings.bot_count)
            .map(|_| Bot::random(&mut rng, &settings))
            .collect();

        log::info!(
            "World created: seed={}, {} food, {} bots",
            settings.seed,
            settings.food_count,
            settings.bot_count
        );

        Ok(Self {
            camera: player.disk.pos,
            settings,
            rng,
            player,
            foods,
            bots,
            time_ticks: 0,
            events: Vec::new(),
            lost: false,
            won: false,
        })
    }

    /// Random source for spawns and wandering
    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Player was eaten. Never reverts.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Player reached the win mass. Never reverts.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Either terminal state freezes the simulation
    pub fn is_terminal(&self) -> bool {
        self.lost || self.won
    }

    pub(crate) fn mark_lost(&mut self) {
        if !self.lost {
            log::info!(
                "Player eaten at tick {} (mass {:.0})",
                self.time_ticks,
                self.player.disk.mass()
            );
        }
        self.lost = true;
    }

    pub(crate) fn mark_won(&mut self) {
        if !self.won {
            log::info!(
                "Player won at tick {} (mass {:.0} >= {:.0})",
                self.time_ticks,
                self.player.disk.mass(),
                self.settings.win_mass
            );
        }
        self.won = true;
    }

    /// Player followed by every bot, in that order
    pub fn cells(&self) -> impl Iterator<Item = &Disk> {
        std::iter::once(&self.player.disk).chain(self.bots.iter().map(|b| &b.disk))
    }

    /// Replace the food at `index` with a freshly randomized one
    pub fn respawn_food(&mut self, index: usize) {
        self.foods[index] = Food::random(&mut self.rng, &self.settings);
    }

    /// Replace the bot at `index` with a freshly randomized one
    pub fn respawn_bot(&mut self, index: usize) {
        self.bots[index] = Bot::random(&mut self.rng, &self.settings);
    }

    /// Cardinality and numeric sanity checks (debug builds only)
    pub fn debug_check_invariants(&self) {
        debug_assert_eq!(self.foods.len(), self.settings.food_count, "food count drifted");
        debug_assert_eq!(self.bots.len(), self.settings.bot_count, "bot count drifted");
        debug_assert!(
            self.cells()
                .all(|d| d.pos.is_finite() && d.radius().is_finite() && d.radius() > 0.0),
            "non-finite or non-positive cell state"
        );
    }
}
