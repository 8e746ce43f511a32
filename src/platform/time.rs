//! Frame pacing

use std::time::{Duration, Instant};

/// Blocks so frames start no faster than the target rate
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    next: Option<Instant>,
    paced: bool,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next: None,
            paced: true,
        }
    }

    /// A clock that never sleeps (tests, benchmarks, fast-forward)
    pub fn unpaced(fps: u32) -> Self {
        Self {
            paced: false,
            ..Self::new(fps)
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep until the next frame boundary. A frame that overran resets
    /// the schedule instead of trying to catch up.
    pub fn wait(&mut self) {
        if !self.paced {
            return;
        }
        let now = Instant::now();
        match self.next {
            Some(deadline) if deadline > now => {
                spin_sleep::sleep(deadline - now);
                self.next = Some(deadline + self.frame);
            }
            _ => self.next = Some(now + self.frame),
        }
    }
}
