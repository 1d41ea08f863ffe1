use hecs::World;

use crate::components::*;

/// Steer AI paddles toward the ball every frame
pub fn track_ball(world: &mut World) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.rect.center.y);

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &Controller)>()
    {
        if *controller == Controller::Ai {
            intent.dir = chase_direction(paddle.rect.center.y, ball_y);
        }
    }
}

/// Down when the ball is below the paddle center, otherwise up. There is
/// no dead zone, so an aligned paddle keeps moving.
pub fn chase_direction(paddle_y: f32, ball_y: f32) -> i8 {
    if ball_y > paddle_y {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};
    use glam::Vec2;

    #[test]
    fn test_chase_direction() {
        assert_eq!(chase_direction(360.0, 500.0), 1, "Ball below");
        assert_eq!(chase_direction(360.0, 100.0), -1, "Ball above");
        assert_eq!(chase_direction(360.0, 360.0), -1, "Aligned still moves");
    }

    #[test]
    fn test_ai_paddle_follows_ball() {
        let mut world = World::new();
        let config = Config::new();
        let ai = create_paddle(&mut world, Side::Opponent, Controller::Ai, &config);
        let human = create_paddle(&mut world, Side::Player, Controller::Human, &config);
        world.spawn((Ball::new(
            Vec2::new(640.0, 600.0),
            Vec2::splat(config.ball_size),
            Vec2::new(-1.0, 0.7),
        ),));

        track_ball(&mut world);

        assert_eq!(world.get::<&PaddleIntent>(ai).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(human).unwrap().dir, 0);
    }

    #[test]
    fn test_no_ball_leaves_intent_alone() {
        let mut world = World::new();
        let config = Config::new();
        let ai = create_paddle(&mut world, Side::Opponent, Controller::Ai, &config);
        track_ball(&mut world);
        assert_eq!(world.get::<&PaddleIntent>(ai).unwrap().dir, 0);
    }
}
