use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x * 0.5
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    pub fn set_left(&mut self, x: f32) {
        self.center.x = x + self.size.x * 0.5;
    }

    pub fn set_right(&mut self, x: f32) {
        self.center.x = x - self.size.x * 0.5;
    }

    pub fn set_top(&mut self, y: f32) {
        self.center.y = y + self.size.y * 0.5;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.center.y = y - self.size.y * 0.5;
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The playfield: window bounds and spawn points
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    ball_spawn: Vec2,
    player_spawn: Vec2,
    opponent_spawn: Vec2,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.window_width,
            height: config.window_height,
            ball_spawn: config.ball_spawn(),
            player_spawn: config.paddle_spawn(Side::Player),
            opponent_spawn: config.paddle_spawn(Side::Opponent),
        }
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.ball_spawn
    }

    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        match side {
            Side::Player => self.player_spawn,
            Side::Opponent => self.opponent_spawn,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Keep a rectangle fully inside [0, height] vertically
    pub fn clamp_vertical(&self, rect: &mut Rect) {
        if rect.top() < 0.0 {
            rect.set_top(0.0);
        }
        if rect.bottom() > self.height {
            rect.set_bottom(self.height);
        }
    }
}
