use crate::{Config, FrameInput, Paddle, Session, Side};

/// Move a paddle one step for each held key, bounds-checked independently.
/// Holding both keys applies both steps in turn.
pub fn apply_keyboard(paddle: &mut Paddle, up: bool, down: bool, config: &Config) {
    if up && paddle.rect.top() > 0 {
        paddle.set_y(config.clamp_paddle_y(paddle.y() - config.paddle_speed));
    }

    if down && paddle.rect.bottom() < config.field_height {
        paddle.set_y(config.clamp_paddle_y(paddle.y() + config.paddle_speed));
    }
}

/// Move a paddle one step from the controller's left stick, ignoring the dead zone
pub fn apply_axis(paddle: &mut Paddle, axis: i16, config: &Config) {
    let threshold = config.axis_dead_zone;

    if axis < -threshold && paddle.rect.top() > 0 {
        paddle.set_y(config.clamp_paddle_y(paddle.y() - config.paddle_speed));
    } else if axis > threshold && paddle.rect.bottom() < config.field_height {
        paddle.set_y(config.clamp_paddle_y(paddle.y() + config.paddle_speed));
    }
}

/// Apply this frame's keyboard input to both paddles, then controller input
pub fn resolve_input(session: &mut Session, input: &FrameInput, config: &Config) {
    for side in Side::BOTH {
        let held = input.paddle(side);
        apply_keyboard(session.paddle_mut(side), held.up, held.down, config);
    }

    for side in Side::BOTH {
        let axis = input.paddle(side).axis;
        apply_axis(session.paddle_mut(side), axis, config);
    }
}
