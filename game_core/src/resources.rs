use crate::{Ball, Config, Paddle, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }

    /// One audible cue per event kind raised this frame
    pub fn cue_count(&self) -> usize {
        [
            self.ball_hit_wall,
            self.ball_hit_paddle,
            self.left_scored,
            self.right_scored,
        ]
        .iter()
        .filter(|raised| **raised)
        .count()
    }
}

/// Held controls for one paddle this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
    pub axis: i16, // left stick vertical, negative = up
}

/// Input for both paddles, polled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub paddles: [PaddleInput; 2],
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle(&self, side: Side) -> &PaddleInput {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut PaddleInput {
        &mut self.paddles[side.index()]
    }
}

/// All mutable state of one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            paddles: [
                Paddle::new(Side::Left, config),
                Paddle::new(Side::Right, config),
            ],
            ball: Ball::serve(config),
            score: Score::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
        assert_eq!(score.get(Side::Left), 2);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.increment_right();
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.get(Side::Left), 0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.cue_count(), 0);
    }

    #[test]
    fn test_events_cue_count() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = true;
        assert_eq!(events.cue_count(), 2);
        assert!(!events.scored());

        events.right_scored = true;
        assert_eq!(events.cue_count(), 3);
        assert!(events.scored());
    }

    #[test]
    fn test_new_session() {
        let config = Config::new();
        let session = Session::new(&config);
        assert_eq!(session.score, Score::new());
        assert_eq!(session.paddle(Side::Left).side, Side::Left);
        assert_eq!(session.paddle(Side::Right).side, Side::Right);
        assert_eq!(session.ball.pos(), config.ball_center());
    }

    #[test]
    fn test_frame_input_paddle_access() {
        let mut input = FrameInput::new();
        input.paddle_mut(Side::Right).down = true;
        input.paddle_mut(Side::Left).axis = -6000;
        assert!(input.paddle(Side::Right).down);
        assert!(!input.paddle(Side::Left).down);
        assert_eq!(input.paddle(Side::Left).axis, -6000);
    }
}
