use macroquad::prelude::*;

use super::to_color;
use crate::domain::Rgba;
use crate::error::{LessonError, Result};

/// Fonts tried in order; the first that loads wins
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// Gap between a top-right label and the canvas edge
const EDGE_MARGIN: f32 = 10.0;

async fn load_font(path: &str) -> Result<Font> {
    load_ttf_font(path).await.map_err(|e| LessonError::Font {
        path: path.to_owned(),
        message: format!("{:?}", e),
    })
}

/// Single-line text drawn with a TTF font, or the built-in font as fallback.
pub struct TextRenderer {
    font: Option<Font>,
    size: u16,
}

impl TextRenderer {
    /// Load the first available candidate font
    pub async fn load(size: u16) -> Self {
        for path in FONT_CANDIDATES {
            match load_font(path).await {
                Ok(font) => {
                    log::info!("using font {}", path);
                    return Self { font: Some(font), size };
                }
                Err(e) => log::debug!("{}", e),
            }
        }
        log::warn!("no TTF font found, falling back to the built-in font");
        Self::builtin(size)
    }

    pub const fn builtin(size: u16) -> Self {
        Self { font: None, size }
    }

    pub fn measure(&self, text: &str) -> TextDimensions {
        measure_text(text, self.font.as_ref(), self.size, 1.0)
    }

    /// Draw with the top-left corner at (x, y)
    pub fn draw(&self, text: &str, x: f32, y: f32, color: Rgba) {
        let dims = self.measure(text);
        draw_text_ex(
            text,
            x,
            y + dims.offset_y,
            TextParams {
                font: self.font.as_ref(),
                font_size: self.size,
                color: to_color(color),
                ..Default::default()
            },
        );
    }

    /// Draw right-aligned 10px from the top-right corner of the canvas
    pub fn draw_top_right(&self, text: &str, canvas_width: i32, color: Rgba) {
        let dims = self.measure(text);
        let x = canvas_width as f32 - dims.width - EDGE_MARGIN;
        self.draw(text, x, EDGE_MARGIN, color);
    }
}
