//! Render backend trait and color type.
//!
//! Every rendering environment implements [`RenderBackend`]. The widget
//! toolkit and the page assembly draw exclusively through this trait, so
//! the same page renders identically on a real surface, a recording
//! backend, or the test mock.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Width of one glyph in the 8x8 bitmap font all backends share.
pub const GLYPH_WIDTH: u32 = 8;
/// Height of one glyph in the 8x8 bitmap font.
pub const GLYPH_HEIGHT: u32 = 8;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Measure text width in pixels for the shared bitmap font.
///
/// Glyph advance scales with font size in whole-glyph steps: sizes up to
/// 8px advance one glyph width, up to 16px two, and so on.
pub fn measure_text(text: &str, font_size: u16) -> u32 {
    let scale = (u32::from(font_size)).div_ceil(GLYPH_HEIGHT).max(1);
    text.chars().count() as u32 * GLYPH_WIDTH * scale
}

/// Line height in pixels for a given font size.
pub fn measure_text_height(font_size: u16) -> u32 {
    let scale = (u32::from(font_size)).div_ceil(GLYPH_HEIGHT).max(1);
    GLYPH_HEIGHT * scale
}

/// Minimum interface a rendering environment must provide.
pub trait RenderBackend {
    /// Clear the whole surface to a color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Fill a rounded rectangle with the given corner radius.
    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()>;

    /// Draw a line with the given stroke width.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: u32, color: Color)
    -> Result<()>;

    /// Draw a text run at the given position.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Restrict subsequent drawing to a rectangle.
    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Remove any clip rectangle.
    fn reset_clip_rect(&mut self) -> Result<()>;

    /// Present the finished frame.
    fn present(&mut self) -> Result<()>;

    /// Width in pixels of a text run at the given font size.
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        measure_text(text, font_size)
    }

    /// Line height in pixels at the given font size.
    fn measure_text_height(&self, font_size: u16) -> u32 {
        measure_text_height(font_size)
    }
}
