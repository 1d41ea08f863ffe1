//! One player against the AI, with the challenge scoreboard attached

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, ChallengeState, Config, ConfigError, Controller,
    Events, GameMap, GameRng, Paddle, PaddleInput, Rect, Score, Scoreboard, Side, Targets, Time,
    TransitionResult,
};

/// Paddle state exposed for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Rect,
}

/// Ball state exposed for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub rect: Rect,
    pub direction: Vec2,
    pub serving: bool,
}

/// Everything a frontend needs to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub score: Score,
    pub challenge: ChallengeState,
    pub targets: Targets,
    pub ball: Option<BallView>,
    pub paddles: Vec<PaddleView>,
    pub width: f32,
    pub height: f32,
}

impl Snapshot {
    pub fn paddle(&self, side: Side) -> Option<&PaddleView> {
        self.paddles.iter().find(|p| p.side == side)
    }
}

pub struct Session {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    scoreboard: Scoreboard,
    events: Events,
    rng: GameRng,
    ball: Entity,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles: the human defends the right, the AI the left
        create_paddle(&mut world, Side::Player, Controller::Human, &config);
        create_paddle(&mut world, Side::Opponent, Controller::Ai, &config);

        // Create ball
        let ball = create_ball(&mut world, &config, &mut rng);

        tracing::debug!(seed, ?config, "session created");

        Ok(Self {
            world,
            time: Time::default(),
            map,
            scoreboard: Scoreboard::new(config.targets()),
            config,
            events: Events::new(),
            rng,
            ball,
        })
    }

    /// Advance one frame. Skipped entirely while the challenge is paused
    /// (overshoot pending or won); returns whether the world moved.
    pub fn step(&mut self, input: PaddleInput, dt: f32) -> bool {
        if self.is_frozen() {
            self.events.clear();
            return false;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &input,
            &mut self.scoreboard,
            &mut self.events,
            &mut self.rng,
        );
        true
    }

    pub fn is_frozen(&self) -> bool {
        self.scoreboard.challenge().is_paused()
    }

    /// Start the challenge from 0:0 with a fresh serve
    pub fn start_challenge(&mut self) -> TransitionResult {
        let result = self.scoreboard.start_challenge();
        if result.success() {
            self.reset_round();
        }
        result
    }

    /// Answer "yes" to the overshoot prompt
    pub fn retry(&mut self) -> TransitionResult {
        let result = self.scoreboard.retry();
        if result.success() {
            self.reset_round();
        }
        result
    }

    /// Answer "no" to the overshoot prompt
    pub fn decline(&mut self) -> TransitionResult {
        self.scoreboard.decline()
    }

    /// Re-center the ball with a new direction and put paddles back at
    /// their start positions
    pub fn reset_round(&mut self) {
        let direction = self
            .rng
            .serve_direction(self.config.serve_y_min, self.config.serve_y_max);
        let spawn = self.map.ball_spawn();
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(spawn, direction);
        }

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.place(self.map.paddle_spawn(paddle.side));
        }
        self.events.clear();
    }

    pub fn score(&self) -> Score {
        self.scoreboard.score()
    }

    pub fn challenge_state(&self) -> ChallengeState {
        self.scoreboard.challenge().state()
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn elapsed(&self) -> f32 {
        self.time.now
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| BallView {
                rect: ball.rect,
                direction: ball.direction,
                serving: ball.is_serving(),
            });

        let mut paddles: Vec<PaddleView> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| PaddleView {
                side: p.side,
                rect: p.rect,
            })
            .collect();
        paddles.sort_by_key(|p| p.side == Side::Player);

        Snapshot {
            score: self.score(),
            challenge: self.challenge_state(),
            targets: self.scoreboard.challenge().targets(),
            ball,
            paddles,
            width: self.map.width,
            height: self.map.height,
        }
    }

    /// Direct access for tests and tools that stage a position
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let session = Session::new(Config::new(), 1).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.paddles.len(), 2);
        assert_eq!(snap.paddle(Side::Player).unwrap().rect.center, Vec2::new(1230.0, 360.0));
        assert_eq!(snap.paddle(Side::Opponent).unwrap().rect.center, Vec2::new(50.0, 360.0));
        assert_eq!(snap.ball.unwrap().rect.center, Vec2::new(640.0, 360.0));
        assert!(snap.ball.unwrap().serving);
        assert_eq!(snap.challenge, ChallengeState::Idle);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            window_height: -1.0,
            ..Config::new()
        };
        assert!(Session::new(config, 1).is_err());
    }

    #[test]
    fn test_human_paddle_follows_input() {
        let mut session = Session::new(Config::new(), 1).unwrap();
        session.step(PaddleInput::new(true, false), 0.1);
        let snap = session.snapshot();
        let y = snap.paddle(Side::Player).unwrap().rect.center.y;
        assert!((y - 310.0).abs() < 1e-3, "Moved up by 500 * 0.1, got {y}");
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut session = Session::new(Config::new(), 1).unwrap();
        session.step(PaddleInput::new(false, true), 5.0);
        assert!((session.elapsed() - 0.1).abs() < 1e-6);
    }
}
