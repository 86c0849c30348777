use crate::{Ball, Config, Events, Score};

/// Check if ball reached a side wall (scoring).
///
/// Both walls are checked in turn; a recentred ball cannot trigger the second check.
pub fn check_scoring(ball: &mut Ball, score: &mut Score, config: &Config, events: &mut Events) {
    if ball.rect.left() <= 0 {
        // Right player scores
        score.increment_right();
        events.right_scored = true;
        ball.recenter(config);
    }

    if ball.rect.right() >= config.field_width {
        // Left player scores
        score.increment_left();
        events.left_scored = true;
        ball.recenter(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn setup() -> (Config, Score, Events) {
        (Config::new(), Score::new(), Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_reaches_left_wall() {
        let (config, mut score, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(0, 300), IVec2::new(-1, 1), config.ball_size);

        check_scoring(&mut ball, &mut score, &config, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored);
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_reaches_right_wall() {
        let (config, mut score, mut events) = setup();
        let x = config.field_width - config.ball_size;
        let mut ball = Ball::new(IVec2::new(x, 300), IVec2::new(1, 1), config.ball_size);

        check_scoring(&mut ball, &mut score, &config, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored);
    }

    #[test]
    fn test_ball_recentred_with_same_velocity() {
        let (config, mut score, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(-4, 812), IVec2::new(-1, -1), config.ball_size);

        check_scoring(&mut ball, &mut score, &config, &mut events);

        assert_eq!(ball.pos(), config.ball_center());
        assert_eq!(
            ball.vel,
            IVec2::new(-1, -1),
            "Velocity is not reset after scoring"
        );
    }

    #[test]
    fn test_single_score_per_crossing() {
        let (config, mut score, mut events) = setup();
        let mut ball = Ball::new(IVec2::new(0, 300), IVec2::new(-1, 1), config.ball_size);

        check_scoring(&mut ball, &mut score, &config, &mut events);

        assert_eq!(score.left + score.right, 1);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (config, mut score, mut events) = setup();
        let mut ball = Ball::serve(&config);

        check_scoring(&mut ball, &mut score, &config, &mut events);

        assert_eq!(score, Score::new());
        assert!(!events.scored(), "No scoring events");
        assert_eq!(ball.pos(), config.ball_center());
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (config, mut score, mut events) = setup();
        let x = config.field_width - config.ball_size + 3;

        for _ in 0..2 {
            let mut ball = Ball::new(IVec2::new(x, 300), IVec2::new(1, 0), config.ball_size);
            check_scoring(&mut ball, &mut score, &config, &mut events);
            events.clear();
        }

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
