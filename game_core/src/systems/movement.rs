use crate::{Ball, Config, GameMap, Paddle, PaddleIntent, Rect, Time};
use hecs::World;

use super::collision::{resolve_paddle_collisions, Axis};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.prev_rect = paddle.rect;

        let delta = intent.dir as f32 * paddle.speed * time.dt;
        paddle.rect.center.y += delta;

        // Clamp to window bounds
        map.clamp_vertical(&mut paddle.rect);
    }
}

/// Move the ball one axis at a time, resolving paddle hits after each axis
pub fn move_ball(world: &mut World, time: &Time, config: &Config) {
    // Collect paddle rects without holding borrows
    let paddles: Vec<(Rect, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.rect, p.prev_rect))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.prev_rect = ball.rect;
        ball.tick_serve(time.dt, config.serve_delay);

        let distance = config.ball_speed * time.dt * ball.speed_modifier;

        ball.rect.center.x += ball.direction.x * distance;
        resolve_paddle_collisions(ball, &paddles, Axis::Horizontal);

        ball.rect.center.y += ball.direction.y * distance;
        resolve_paddle_collisions(ball, &paddles, Axis::Vertical);
    }
}
