//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by index)
//! - No rendering or platform dependencies

pub mod ai;
pub mod camera;
pub mod collision;
pub mod movement;
pub mod state;
pub mod tick;

pub use camera::{Camera, zoom_for_mass};
pub use collision::{cells_overlap, dominates, resolve_collisions};
pub use movement::{DirectionIntent, effective_speed, is_move_feasible, resolve_player_move};
pub use state::{Bot, Color, Disk, Food, GameEvent, GameState, Player, random_color};
pub use tick::{TickInput, tick};
