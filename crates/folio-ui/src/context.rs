//! Theme-aware drawing context.
//!
//! All folio-ui widgets render through `DrawContext`, which wraps a
//! `&mut dyn RenderBackend` and provides access to the active theme.

use folio_types::backend::{Color, RenderBackend};
use folio_types::error::Result;

use crate::layout::Padding;
use crate::theme::Theme;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn RenderBackend,
    pub theme: &'a Theme,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend, theme: &'a Theme) -> Self {
        Self { backend, theme }
    }

    // -- Convenience drawing methods --

    /// Draw a themed card background.
    pub fn panel(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let radius = self.theme.border_radius_lg;
        self.backend
            .fill_rounded_rect(x, y, w, h, radius, self.theme.surface)
    }

    /// Draw a themed label with default font size and primary text color.
    pub fn label(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        self.backend
            .draw_text(text, x, y, self.theme.font_size_md, self.theme.text_primary)
    }

    /// Draw a themed label with a specific style.
    pub fn label_styled(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.backend.draw_text(text, x, y, font_size, color)
    }

    /// Draw a themed heading.
    pub fn heading(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        self.backend
            .draw_text(text, x, y, self.theme.font_size_xl, self.theme.text_primary)
    }

    /// Draw a horizontal divider line.
    pub fn divider_h(&mut self, x: i32, y: i32, w: u32) -> Result<()> {
        self.backend
            .draw_line(x, y, x + w as i32, y, 1, self.theme.border_subtle)
    }

    /// Measure text width using theme default font size.
    pub fn measure_text(&self, text: &str) -> u32 {
        self.backend.measure_text(text, self.theme.font_size_md)
    }

    /// Measure text width with a specific font size.
    pub fn measure_text_sized(&self, text: &str, font_size: u16) -> u32 {
        self.backend.measure_text(text, font_size)
    }

    /// Line height with a specific font size.
    pub fn line_height(&self, font_size: u16) -> u32 {
        self.backend.measure_text_height(font_size)
    }

    /// Inner rect after applying padding.
    pub fn padded_rect(
        &self,
        padding: &Padding,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    ) -> (i32, i32, u32, u32) {
        padding.inner_rect(x, y, w, h)
    }
}
