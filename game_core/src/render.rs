//! Immediate-mode render pass
//!
//! The pass only talks to a [`Canvas`], so the same frame logic drives the
//! GPU renderer and the recording canvas used in tests.

use crate::{Config, Rect, Session, Side};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

pub const BACKGROUND: Color = Color::BLACK;
pub const FOREGROUND: Color = Color::WHITE;

/// A rendered piece of text with a known size
pub trait TextImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Drawing surface for one frame
pub trait Canvas {
    type Text: TextImage;

    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Rasterize `text` in the loaded font
    fn render_text(&mut self, text: &str, color: Color) -> Self::Text;
    fn copy_text(&mut self, text: &Self::Text, dst: Rect);
    fn present(&mut self);
}

/// Draw one complete frame of the session and present it
pub fn render_frame<C: Canvas>(canvas: &mut C, session: &Session, config: &Config) {
    canvas.clear(BACKGROUND);

    for paddle in &session.paddles {
        canvas.fill_rect(paddle.rect, FOREGROUND);
    }
    canvas.fill_rect(session.ball.rect, FOREGROUND);

    for side in Side::BOTH {
        render_score(canvas, session.score.get(side), side, config);
    }

    canvas.present();
}

/// Score text centred on its anchor near the top of the field
fn render_score<C: Canvas>(canvas: &mut C, score: u32, side: Side, config: &Config) {
    let text = canvas.render_text(&score.to_string(), FOREGROUND);
    let dst = Rect::centered_x(
        config.score_anchor_x(side),
        config.score_y,
        text.width() as i32,
        text.height() as i32,
    );
    canvas.copy_text(&text, dst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeText {
        text: String,
        w: u32,
        h: u32,
    }

    impl TextImage for FakeText {
        fn width(&self) -> u32 {
            self.w
        }
        fn height(&self) -> u32 {
            self.h
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Clear(Color),
        FillRect(Rect, Color),
        CopyText(String, Rect),
        Present,
    }

    /// Canvas that records every call; glyphs are 40x80
    #[derive(Default)]
    struct RecordingCanvas {
        commands: Vec<Command>,
    }

    impl Canvas for RecordingCanvas {
        type Text = FakeText;

        fn clear(&mut self, color: Color) {
            self.commands.push(Command::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.commands.push(Command::FillRect(rect, color));
        }

        fn render_text(&mut self, text: &str, _color: Color) -> FakeText {
            FakeText {
                text: text.to_string(),
                w: 40 * text.len() as u32,
                h: 80,
            }
        }

        fn copy_text(&mut self, text: &FakeText, dst: Rect) {
            self.commands.push(Command::CopyText(text.text.clone(), dst));
        }

        fn present(&mut self) {
            self.commands.push(Command::Present);
        }
    }

    #[test]
    fn test_frame_command_order() {
        let config = Config::new();
        let session = Session::new(&config);
        let mut canvas = RecordingCanvas::default();

        render_frame(&mut canvas, &session, &config);

        assert_eq!(
            canvas.commands,
            vec![
                Command::Clear(Color::BLACK),
                Command::FillRect(session.paddles[0].rect, Color::WHITE),
                Command::FillRect(session.paddles[1].rect, Color::WHITE),
                Command::FillRect(session.ball.rect, Color::WHITE),
                Command::CopyText("0".into(), Rect::new(460, 50, 40, 80)),
                Command::CopyText("0".into(), Rect::new(1420, 50, 40, 80)),
                Command::Present,
            ]
        );
    }

    #[test]
    fn test_scores_centred_on_measured_width() {
        let config = Config::new();
        let mut session = Session::new(&config);
        session.score.left = 12;
        session.score.right = 7;
        let mut canvas = RecordingCanvas::default();

        render_frame(&mut canvas, &session, &config);

        assert!(canvas
            .commands
            .contains(&Command::CopyText("12".into(), Rect::new(440, 50, 80, 80))));
        assert!(canvas
            .commands
            .contains(&Command::CopyText("7".into(), Rect::new(1420, 50, 40, 80))));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let config = Config::new();
        let mut session = Session::new(&config);
        session.ball.set_pos(IVec2::new(300, 200));
        session.score.right = 3;

        let mut first = RecordingCanvas::default();
        let mut second = RecordingCanvas::default();
        render_frame(&mut first, &session, &config);
        render_frame(&mut second, &session, &config);

        assert_eq!(first.commands, second.commands);
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_f32(), [0.0, 0.0, 0.0, 1.0]);
    }
}
