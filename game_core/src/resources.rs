use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// A point scored, as delivered to a [`ScoreListener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    PlayerScored,
    OpponentScored,
}

impl ScoreEvent {
    pub fn side(self) -> Side {
        match self {
            ScoreEvent::PlayerScored => Side::Player,
            ScoreEvent::OpponentScored => Side::Opponent,
        }
    }
}

/// Receives a typed event each time the ball leaves the table
pub trait ScoreListener {
    fn on_score(&mut self, event: ScoreEvent);
}

/// Game score tracking
///
/// Serializes as `{"player": n, "opponent": n}` for callers that persist it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Serve direction: x is +1 or -1, y is a magnitude in [y_min, y_max]
    /// with a random sign
    pub fn serve_direction(&mut self, y_min: f32, y_max: f32) -> Vec2 {
        let x = if self.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign = if self.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y = self.0.gen_range(y_min..=y_max) * sign;
        Vec2::new(x, y)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub scored: Option<ScoreEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = None;
    }
}

/// Key state for the human paddle, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// -1, 0 or +1 (both keys cancel out)
    pub fn direction(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}
