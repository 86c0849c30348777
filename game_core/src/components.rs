use glam::IVec2;

use crate::{Config, Rect};

/// Which player a paddle (or score) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // player 1
    Right, // player 2
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Paddle - a player's rectangle, moves only vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            rect: Rect::new(
                config.paddle_x(side),
                config.paddle_start_y(),
                config.paddle_width,
                config.paddle_height,
            ),
        }
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.rect.y = y;
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, size: i32) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, size, size),
            vel,
        }
    }

    /// Ball at the field centre moving down-right
    pub fn serve(config: &Config) -> Self {
        Self::new(
            config.ball_center(),
            IVec2::splat(config.ball_speed),
            config.ball_size,
        )
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.rect.x, self.rect.y)
    }

    pub fn set_pos(&mut self, pos: IVec2) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    /// Move back to the field centre. Velocity is left untouched, so the
    /// next rally starts in whatever direction the ball was travelling.
    pub fn recenter(&mut self, config: &Config) {
        self.set_pos(config.ball_center());
    }
}
