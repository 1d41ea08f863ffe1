use glam::Vec2;

use crate::map::Rect;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Right
    Opponent, // Left
}

/// Who drives a paddle's intent each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub prev_rect: Rect, // Rect at the start of this frame
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, center: Vec2, size: Vec2, speed: f32) -> Self {
        let rect = Rect::from_center_size(center, size);
        Self {
            side,
            rect,
            prev_rect: rect,
            speed,
        }
    }

    /// Put the paddle back at a start position with no motion history
    pub fn place(&mut self, center: Vec2) {
        self.rect.center = center;
        self.prev_rect = self.rect;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub prev_rect: Rect,
    pub direction: Vec2,
    pub speed_modifier: f32, // 0 while resting after a serve, 1 in play
    pub serve_elapsed: f32,
}

impl Ball {
    pub fn new(center: Vec2, size: Vec2, direction: Vec2) -> Self {
        let rect = Rect::from_center_size(center, size);
        Self {
            rect,
            prev_rect: rect,
            direction,
            speed_modifier: 0.0,
            serve_elapsed: 0.0,
        }
    }

    /// Re-center and serve again with a fresh direction
    pub fn reset(&mut self, center: Vec2, direction: Vec2) {
        self.rect.center = center;
        self.prev_rect = self.rect;
        self.direction = direction;
        self.speed_modifier = 0.0;
        self.serve_elapsed = 0.0;
    }

    /// Advance the serve timer; the ball only moves once the delay has passed
    pub fn tick_serve(&mut self, dt: f32, serve_delay: f32) {
        self.serve_elapsed += dt;
        self.speed_modifier = if self.serve_elapsed >= serve_delay {
            1.0
        } else {
            0.0
        };
    }

    pub fn is_serving(&self) -> bool {
        self.speed_modifier == 0.0
    }
}
