//! Text rasterization with ab_glyph

use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use game_core::{Color, TextImage};
use snafu::ResultExt;

use crate::error::{FontParseSnafu, FontReadSnafu, StartupError};

/// Coverage at or above this is drawn, below is left transparent
const SOLID_THRESHOLD: f32 = 0.5;

/// A loaded font at a fixed pixel size
pub struct TextFont {
    font: FontVec,
    scale: PxScale,
}

/// Rasterized text: tightly packed RGBA8 rows
#[derive(Debug, Clone, PartialEq)]
pub struct TextBitmap {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextImage for TextBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl TextFont {
    pub fn load(path: &Path, size: f32) -> Result<Self, StartupError> {
        let bytes = fs::read(path).context(FontReadSnafu { path })?;
        let font = FontVec::try_from_vec(bytes).context(FontParseSnafu { path })?;
        log::debug!("Loaded font {} at {}px", path.display(), size);
        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Lay out `text` on one line starting at the origin, returning glyphs and line width
    fn layout(&self, text: &str) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret = 0.0;
        let mut previous = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, scaled.ascent())));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        (glyphs, caret)
    }

    /// Measure and rasterize `text` in solid (non-antialiased) mode
    pub fn render(&self, text: &str, color: Color) -> TextBitmap {
        let scaled = self.font.as_scaled(self.scale);
        let (glyphs, line_width) = self.layout(text);
        let width = line_width.ceil().max(1.0) as u32;
        let height = scaled.height().ceil().max(1.0) as u32;
        let mut pixels = vec![0u8; (width * height * 4) as usize];

        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                if coverage < SOLID_THRESHOLD {
                    return;
                }
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                    return;
                }
                let offset = ((y as u32 * width + x as u32) * 4) as usize;
                pixels[offset..offset + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
            });
        }

        TextBitmap {
            text: text.to_string(),
            width,
            height,
            pixels,
        }
    }
}
