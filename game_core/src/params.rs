/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (pixels)
    pub const FIELD_WIDTH: i32 = 1920;
    pub const FIELD_HEIGHT: i32 = 1080;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 45;
    pub const PADDLE_HEIGHT: i32 = 300;
    pub const PADDLE_MARGIN: i32 = 20; // gap between paddle and side wall
    pub const PADDLE_SPEED: i32 = 1; // pixels per frame

    // Ball
    pub const BALL_SIZE: i32 = 45;
    pub const BALL_SPEED: i32 = 1; // pixels per frame, per axis

    // Controller left stick, range -32768..=32767
    pub const AXIS_DEAD_ZONE: i16 = 5000;

    // Score text
    pub const SCORE_Y: i32 = 50;

    // Timing
    pub const SCORE_PAUSE_MS: u64 = 1000;
    pub const FRAME_DELAY_MS: u64 = 1;
}
