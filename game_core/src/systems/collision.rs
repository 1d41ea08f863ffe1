use crate::{Ball, Rect};

/// Axis being resolved after a single-axis move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Resolve ball hits against every paddle on one axis.
///
/// A hit only counts when the previous frame had the ball fully on the near
/// side of the paddle's previous edge. The ball is pushed flush to that edge
/// and the matching direction component changes sign, once per crossing.
/// Returns true if the ball bounced.
pub fn resolve_paddle_collisions(ball: &mut Ball, paddles: &[(Rect, Rect)], axis: Axis) -> bool {
    let mut bounced = false;

    for (paddle, prev_paddle) in paddles {
        if !paddle.overlaps(&ball.rect) {
            continue;
        }

        match axis {
            Axis::Horizontal => {
                if ball.rect.right() >= paddle.left()
                    && ball.prev_rect.right() <= prev_paddle.left()
                {
                    // Entered through the paddle's left face
                    ball.rect.set_right(paddle.left());
                    ball.direction.x = -ball.direction.x;
                    bounced = true;
                } else if ball.rect.left() <= paddle.right()
                    && ball.prev_rect.left() >= prev_paddle.right()
                {
                    ball.rect.set_left(paddle.right());
                    ball.direction.x = -ball.direction.x;
                    bounced = true;
                }
            }
            Axis::Vertical => {
                if ball.rect.bottom() >= paddle.top()
                    && ball.prev_rect.bottom() <= prev_paddle.top()
                {
                    ball.rect.set_bottom(paddle.top());
                    ball.direction.y = -ball.direction.y;
                    bounced = true;
                } else if ball.rect.top() <= paddle.bottom()
                    && ball.prev_rect.top() >= prev_paddle.bottom()
                {
                    ball.rect.set_top(paddle.bottom());
                    ball.direction.y = -ball.direction.y;
                    bounced = true;
                }
            }
        }
    }

    if bounced {
        tracing::debug!(?axis, direction = ?ball.direction, "ball hit paddle");
    }
    bounced
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const BALL: Vec2 = Vec2::new(30.0, 30.0);
    const PADDLE: Vec2 = Vec2::new(40.0, 100.0);

    fn ball_moving(from: Vec2, to: Vec2, direction: Vec2) -> Ball {
        let mut ball = Ball::new(to, BALL, direction);
        ball.prev_rect = Rect::from_center_size(from, BALL);
        ball
    }

    fn still_paddle(center: Vec2) -> (Rect, Rect) {
        let rect = Rect::from_center_size(center, PADDLE);
        (rect, rect)
    }

    #[test]
    fn test_ball_bounces_off_paddle_left_face() {
        // Paddle spans x 1210..1250; ball was left of it, now overlaps
        let paddles = [still_paddle(Vec2::new(1230.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(1190.0, 360.0),
            Vec2::new(1200.0, 360.0),
            Vec2::new(1.0, 0.75),
        );

        assert!(resolve_paddle_collisions(&mut ball, &paddles, Axis::Horizontal));
        assert_eq!(ball.rect.right(), 1210.0, "Pushed flush to the paddle");
        assert_eq!(ball.direction, Vec2::new(-1.0, 0.75), "Only x flips");
    }

    #[test]
    fn test_ball_bounces_off_paddle_right_face() {
        // Opponent paddle spans x 30..70
        let paddles = [still_paddle(Vec2::new(50.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(90.0, 360.0),
            Vec2::new(80.0, 360.0),
            Vec2::new(-1.0, -0.7),
        );

        assert!(resolve_paddle_collisions(&mut ball, &paddles, Axis::Horizontal));
        assert_eq!(ball.rect.left(), 70.0);
        assert_eq!(ball.direction, Vec2::new(1.0, -0.7));
    }

    #[test]
    fn test_bounce_preserves_direction_magnitude() {
        let paddles = [still_paddle(Vec2::new(1230.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(1190.0, 360.0),
            Vec2::new(1200.0, 360.0),
            Vec2::new(1.0, 0.73),
        );
        let before = ball.direction.length();
        resolve_paddle_collisions(&mut ball, &paddles, Axis::Horizontal);
        assert!((ball.direction.length() - before).abs() < 1e-6);
    }

    #[test]
    fn test_ball_already_inside_does_not_double_bounce() {
        // Previous frame already overlapped the paddle: no face was crossed
        let paddles = [still_paddle(Vec2::new(1230.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(1215.0, 360.0),
            Vec2::new(1220.0, 360.0),
            Vec2::new(1.0, 0.75),
        );

        assert!(!resolve_paddle_collisions(&mut ball, &paddles, Axis::Horizontal));
        assert_eq!(ball.direction, Vec2::new(1.0, 0.75));
    }

    #[test]
    fn test_ball_bounces_off_paddle_top() {
        // Paddle spans y 310..410; ball drops onto it from above
        let paddles = [still_paddle(Vec2::new(1230.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(1230.0, 290.0),
            Vec2::new(1230.0, 300.0),
            Vec2::new(1.0, 0.8),
        );

        assert!(resolve_paddle_collisions(&mut ball, &paddles, Axis::Vertical));
        assert_eq!(ball.rect.bottom(), 310.0);
        assert_eq!(ball.direction, Vec2::new(1.0, -0.8), "Only y flips");
    }

    #[test]
    fn test_ball_bounces_off_paddle_bottom() {
        let paddles = [still_paddle(Vec2::new(1230.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(1230.0, 430.0),
            Vec2::new(1230.0, 420.0),
            Vec2::new(-1.0, -0.8),
        );

        assert!(resolve_paddle_collisions(&mut ball, &paddles, Axis::Vertical));
        assert_eq!(ball.rect.top(), 410.0);
        assert_eq!(ball.direction, Vec2::new(-1.0, 0.8));
    }

    #[test]
    fn test_moving_paddle_uses_previous_edge() {
        // Paddle moved left into the ball this frame; its previous left edge
        // (1215) was right of the ball's previous right edge (1205)
        let prev = Rect::from_center_size(Vec2::new(1235.0, 360.0), PADDLE);
        let now = Rect::from_center_size(Vec2::new(1225.0, 360.0), PADDLE);
        let mut ball = ball_moving(
            Vec2::new(1190.0, 360.0),
            Vec2::new(1192.0, 360.0),
            Vec2::new(1.0, 0.7),
        );

        assert!(resolve_paddle_collisions(&mut ball, &[(now, prev)], Axis::Horizontal));
        assert_eq!(ball.rect.right(), now.left());
        assert_eq!(ball.direction.x, -1.0);
    }

    #[test]
    fn test_no_overlap_no_bounce() {
        let paddles = [still_paddle(Vec2::new(1230.0, 360.0))];
        let mut ball = ball_moving(
            Vec2::new(600.0, 360.0),
            Vec2::new(610.0, 360.0),
            Vec2::new(1.0, 0.75),
        );
        assert!(!resolve_paddle_collisions(&mut ball, &paddles, Axis::Horizontal));
        assert!(!resolve_paddle_collisions(&mut ball, &paddles, Axis::Vertical));
    }
}
