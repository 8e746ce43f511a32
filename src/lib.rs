//! Cell Arena - A single-player cell-eating arena simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, bot AI, consumption, camera)
//! - `renderer`: Render snapshot, visibility culling and GPU instance data
//! - `platform`: Frame pacing and demo input
//! - `settings`: Data-driven tuning loaded from JSON
//! - `app`: Frame loop tying the simulation to its collaborators

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use renderer::{RenderSnapshot, Viewport};
pub use settings::{ConfigError, Settings};

/// Default tuning values (overridable through [`Settings`])
pub mod consts {
    /// Frames (and simulation ticks) per second
    pub const SIM_FPS: u32 = 30;

    /// Initial window size in pixels
    pub const WINDOW_WIDTH: u32 = 1300;
    pub const WINDOW_HEIGHT: u32 = 900;

    /// Player defaults
    pub const PLAYER_START_RADIUS: f32 = 20.0;
    /// Base speed shared by every cell (units per tick)
    pub const CELL_BASE_SPEED: f32 = 3.0;
    /// Player speed only starts dropping once the radius exceeds this
    pub const PLAYER_SPEED_PIVOT: f32 = 200.0;
    /// Bot speed only starts dropping once the radius exceeds this
    pub const BOT_SPEED_PIVOT: f32 = 30.0;

    /// Food defaults
    pub const FOOD_COUNT: usize = 500;
    pub const FOOD_RADIUS: f32 = 5.0;
    /// Food spawns in [-extent, extent)²
    pub const FOOD_SPAWN_EXTENT: i32 = 2000;

    /// Bot defaults
    pub const BOT_COUNT: usize = 20;
    /// Bots spawn in [-extent, extent)²
    pub const BOT_SPAWN_EXTENT: i32 = 1500;
    /// Bot radius range (max exclusive)
    pub const BOT_MIN_RADIUS: i32 = 15;
    pub const BOT_MAX_RADIUS: i32 = 30;

    /// Player mass that ends the run with a win
    pub const WIN_MASS: f32 = 5000.0;

    /// Growth rules
    pub const PLAYER_FOOD_GROWTH: f32 = 5.0;
    pub const BOT_FOOD_GROWTH: f32 = 0.3;
    /// Fraction of the prey radius added to the predator
    pub const PREY_GROWTH_FACTOR: f32 = 0.3;
    /// Predator radius must strictly exceed prey radius times this
    pub const DOMINANCE_RATIO: f32 = 1.1;
    /// Overlap allowance used by eating and movement blocking
    pub const OVERLAP_MARGIN: f32 = 5.0;
    /// Cells larger than own radius times this block the player;
    /// cells smaller than it are bot prey
    pub const SIZE_RATIO: f32 = 0.8;

    /// Bot AI
    pub const DECISION_INTERVAL: i32 = 30;
    pub const WANDER_RANGE: i32 = 200;
    /// Player radius over own radius times this makes a bot flee
    pub const THREAT_RATIO: f32 = 1.2;
    pub const AVOID_RADIUS: f32 = 300.0;
    pub const AVOID_PUSH: f32 = 1.5;
    /// Distance floor when normalizing a steering vector
    pub const STEER_EPSILON: f32 = 0.1;

    /// Camera zoom curve
    pub const ZOOM_MASS_OFFSET: f32 = 400.0;
    pub const ZOOM_MASS_SCALE: f32 = 5000.0;
    pub const ZOOM_FALLOFF: f32 = 0.5;
    pub const MIN_ZOOM: f32 = 0.5;
    pub const MAX_ZOOM: f32 = 2.0;
}
