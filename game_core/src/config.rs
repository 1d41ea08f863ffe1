use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::challenge::Targets;
use crate::components::Side;
use crate::params::Params;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in window height {window}")]
    PaddleTooTall { paddle: f32, window: f32 },

    #[error("ball size {ball} does not fit in a {width}x{height} window")]
    BallTooLarge { ball: f32, width: f32, height: f32 },

    #[error("paddle inset {inset} places paddles outside a window of width {width}")]
    PaddleOutsideWindow { inset: f32, width: f32 },

    #[error("serve y range [{min}, {max}] must satisfy 0 <= min <= max")]
    InvalidServeRange { min: f32, max: f32 },
}

/// Game configuration
///
/// Immutable once a session is built. Missing keys in a config file fall
/// back to the [`Params`] defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub serve_delay: f32,
    pub serve_y_min: f32,
    pub serve_y_max: f32,
    pub target_player: u32,
    pub target_opponent: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_speed: Params::PLAYER_SPEED,
            opponent_speed: Params::OPPONENT_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            serve_delay: Params::SERVE_DELAY,
            serve_y_min: Params::SERVE_Y_MIN,
            serve_y_max: Params::SERVE_Y_MAX,
            target_player: Params::TARGET_PLAYER,
            target_opponent: Params::TARGET_OPPONENT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle center. The player defends the right edge.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.window_width - self.paddle_inset,
            Side::Opponent => self.paddle_inset,
        }
    }

    /// Starting center of a paddle
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.window_height / 2.0)
    }

    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_speed,
            Side::Opponent => self.opponent_speed,
        }
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    pub fn targets(&self) -> Targets {
        Targets::new(self.target_player, self.target_opponent)
    }

    /// Check that the geometry and serve parameters describe a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finites = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_inset", self.paddle_inset),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("serve_delay", self.serve_delay),
            ("serve_y_min", self.serve_y_min),
            ("serve_y_max", self.serve_y_max),
        ];
        for (field, value) in finites {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positives = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("opponent_speed", self.opponent_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.serve_delay < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "serve_delay",
                value: self.serve_delay,
            });
        }

        if self.paddle_height > self.window_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                window: self.window_height,
            });
        }
        if self.ball_size >= self.window_height || self.ball_size >= self.window_width / 2.0 {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.window_width,
                height: self.window_height,
            });
        }
        let half_paddle = self.paddle_width / 2.0;
        if self.paddle_inset < half_paddle || self.paddle_inset + half_paddle > self.window_width / 2.0
        {
            return Err(ConfigError::PaddleOutsideWindow {
                inset: self.paddle_inset,
                width: self.window_width,
            });
        }
        if self.serve_y_min < 0.0 || self.serve_y_min > self.serve_y_max {
            return Err(ConfigError::InvalidServeRange {
                min: self.serve_y_min,
                max: self.serve_y_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Opponent), 50.0, "Opponent defends the left");
        assert_eq!(config.paddle_x(Side::Player), 1230.0, "Player defends the right");
    }

    #[test]
    fn test_config_spawns_are_vertically_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn(Side::Player).y, 360.0);
        assert_eq!(config.paddle_spawn(Side::Opponent).y, 360.0);
        assert_eq!(config.ball_spawn(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_config_rejects_non_positive_sizes() {
        let config = Config {
            ball_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_config_rejects_paddle_taller_than_window() {
        let config = Config {
            paddle_height: 800.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_config_rejects_inverted_serve_range() {
        let config = Config {
            serve_y_min: 0.9,
            serve_y_max: 0.2,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidServeRange { .. })
        ));
    }

    #[test]
    fn test_config_rejects_paddle_outside_window() {
        let config = Config {
            paddle_inset: 5.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleOutsideWindow { .. })
        ));
    }

    #[test]
    fn test_config_rejects_infinite_values() {
        let config = Config {
            serve_y_max: f32::INFINITY,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "serve_y_max",
                value: f32::INFINITY
            })
        );

        let config = Config {
            ball_speed: f32::INFINITY,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "ball_speed", .. })
        ));
    }

    #[test]
    fn test_config_rejects_nan() {
        let config = Config {
            window_width: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "window_width", .. })
        ));
    }
}
