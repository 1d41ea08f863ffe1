use std::time::{Duration, Instant};

/// Paces the loop at a target rate and measures the real frame delta
#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            budget: Duration::from_secs(1) / fps.max(1),
            last: now,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }

    /// Time left in the current frame after `frame_start`
    pub fn remaining(&self, frame_start: Instant, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(frame_start))
    }
}
