use crate::{Ball, Config, Events, GameMap, GameRng, ScoreEvent, ScoreListener};
use hecs::World;

/// Bounce off the top and bottom walls; score and re-serve when the ball
/// reaches the left or right edge
pub fn check_walls(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    listener: &mut dyn ScoreListener,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.top() <= 0.0 {
            ball.rect.set_top(0.0);
            ball.direction.y = ball.direction.y.abs();
        }
        if ball.rect.bottom() >= map.height {
            ball.rect.set_bottom(map.height);
            ball.direction.y = -ball.direction.y.abs();
        }

        if ball.rect.right() >= map.width || ball.rect.left() <= 0.0 {
            // Credited by where the ball ends up, not by who touched it last
            let event = if ball.rect.left() < map.center_x() {
                ScoreEvent::PlayerScored
            } else {
                ScoreEvent::OpponentScored
            };
            listener.on_score(event);
            events.scored = Some(event);

            let direction = rng.serve_direction(config.serve_y_min, config.serve_y_max);
            ball.reset(map.ball_spawn(), direction);
            tracing::debug!(?direction, "ball served");
        }
    }
}
