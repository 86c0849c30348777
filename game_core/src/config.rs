use std::time::Duration;

use glam::IVec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_margin: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_speed: i32,
    pub axis_dead_zone: i16,
    pub score_y: i32,
    pub score_pause: Duration,
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            axis_dead_zone: Params::AXIS_DEAD_ZONE,
            score_y: Params::SCORE_Y,
            score_pause: Duration::from_millis(Params::SCORE_PAUSE_MS),
            frame_delay: Duration::from_millis(Params::FRAME_DELAY_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Paddles start vertically centred
    pub fn paddle_start_y(&self) -> i32 {
        (self.field_height - self.paddle_height) / 2
    }

    /// Lowest y a paddle may take while staying on the field
    pub fn max_paddle_y(&self) -> i32 {
        (self.field_height - self.paddle_height).max(0)
    }

    /// Clamp paddle Y to field bounds
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        y.clamp(0, self.max_paddle_y())
    }

    /// Top-left corner that centres the ball on the field
    pub fn ball_center(&self) -> IVec2 {
        IVec2::new(
            (self.field_width - self.ball_size) / 2,
            (self.field_height - self.ball_size) / 2,
        )
    }

    /// Horizontal anchor of a player's score: quarter or three-quarter point
    pub fn score_anchor_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.field_width / 4,
            Side::Right => 3 * self.field_width / 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right),
            1920 - 45 - 20,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10), 0);
        assert_eq!(config.clamp_paddle_y(5000), config.max_paddle_y());
        assert_eq!(config.max_paddle_y(), 1080 - 300);
        assert_eq!(config.clamp_paddle_y(390), 390);
    }

    #[test]
    fn test_config_ball_center() {
        let config = Config::new();
        assert_eq!(config.ball_center(), IVec2::new(937, 517));
    }

    #[test]
    fn test_config_score_anchors() {
        let config = Config::new();
        assert_eq!(config.score_anchor_x(Side::Left), 480);
        assert_eq!(config.score_anchor_x(Side::Right), 1440);
    }

    #[test]
    fn test_config_timing_defaults() {
        let config = Config::new();
        assert_eq!(config.score_pause, Duration::from_secs(1));
        assert_eq!(config.frame_delay, Duration::from_millis(1));
    }
}
