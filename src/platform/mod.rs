//! Platform abstraction layer
//!
//! Handles the pieces that live outside the deterministic core:
//! - Frame pacing
//! - Input intents (demo autopilot for headless runs)

pub mod input;
pub mod time;

pub use input::autopilot_input;
pub use time::FrameClock;
