use crate::{Ball, Config, Events, Paddle};

/// Bounce the ball off the top and bottom walls
pub fn check_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.rect.top() <= 0 || ball.rect.bottom() >= config.field_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Bounce the ball off either paddle.
///
/// Overlapping both paddles at once still flips the horizontal velocity only
/// once. Speed is preserved and the paddle face and edges are treated alike.
pub fn check_paddles(ball: &mut Ball, paddles: &[Paddle; 2], events: &mut Events) {
    if paddles
        .iter()
        .any(|paddle| ball.rect.has_intersection(&paddle.rect))
    {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_paddle = true;
    }
}
