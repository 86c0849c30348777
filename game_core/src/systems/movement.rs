use crate::Ball;

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    let next = ball.pos() + ball.vel;
    ball.set_pos(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_move_ball_adds_velocity() {
        let mut ball = Ball::new(IVec2::new(10, 20), IVec2::new(1, -1), 45);
        move_ball(&mut ball);
        assert_eq!(ball.pos(), IVec2::new(11, 19));
        move_ball(&mut ball);
        assert_eq!(ball.pos(), IVec2::new(12, 18));
        assert_eq!(ball.vel, IVec2::new(1, -1), "Velocity is unchanged");
    }
}
