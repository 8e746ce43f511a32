//! Render handoff
//!
//! The simulation never draws. After each tick it produces a
//! [`RenderSnapshot`]; an external renderer culls it against the current
//! [`Viewport`] and uploads the resulting circle instances.

pub mod hud;
pub mod snapshot;
pub mod vertex;

pub use snapshot::{CellSprite, FoodSprite, RenderSnapshot, Viewport};
pub use vertex::{CircleInstance, instance_bytes};
