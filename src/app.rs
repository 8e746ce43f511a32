//! Frame loop
//!
//! One thread owns the world. Each frame: poll input, tick, capture a
//! snapshot, hand it to the presenter, then wait for the next frame.

use crate::platform::FrameClock;
use crate::renderer::{RenderSnapshot, Viewport};
use crate::settings::{ConfigError, Settings};
use crate::sim::{GameState, TickInput, tick};

/// What the input collaborator wants this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue(TickInput),
    /// Window closed; ends the loop
    Quit,
}

/// Game instance holding all state
pub struct App {
    pub state: GameState,
    viewport: Viewport,
    clock: FrameClock,
    frames: u64,
}

impl App {
    /// Paced app with a world and window built from `settings`
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let clock = FrameClock::new(settings.fps);
        Self::with_clock(settings, clock)
    }

    pub fn with_clock(settings: Settings, clock: FrameClock) -> Result<Self, ConfigError> {
        let viewport = Viewport::new(settings.window_width, settings.window_height);
        Ok(Self {
            state: GameState::new(settings)?,
            viewport,
            clock,
            frames: 0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Window was resized; only affects culling
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Viewport resized to {width}x{height}");
        self.viewport = Viewport::new(width, height);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one tick and capture what should be drawn
    pub fn frame(&mut self, input: &TickInput) -> RenderSnapshot {
        tick(&mut self.state, input);
        self.frames += 1;
        RenderSnapshot::capture(&self.state)
    }

    /// Run until `poll` returns [`Control::Quit`]. Returns frames rendered.
    pub fn run<P, R>(&mut self, mut poll: P, mut present: R) -> u64
    where
        P: FnMut(&GameState, u64) -> Control,
        R: FnMut(&RenderSnapshot, Viewport),
    {
        let start = self.frames;
        loop {
            let input = match poll(&self.state, self.frames) {
                Control::Continue(input) => input,
                Control::Quit => break,
            };
            let snapshot = self.frame(&input);
            present(&snapshot, self.viewport);
            self.clock.wait();
        }
        log::info!("Frame loop ended after {} frames", self.frames - start);
        self.frames - start
    }
}
