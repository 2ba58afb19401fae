//! Section heading widget: centered title with an accent underline bar.

use folio_types::error::Result;

use crate::context::DrawContext;
use crate::layout;
use crate::widget::Widget;

/// Width of the decorative underline bar.
const BAR_W: u32 = 64;
/// Height of the decorative underline bar.
const BAR_H: u32 = 4;
/// Gap between the title baseline and the bar.
const BAR_GAP: u32 = 8;

/// A centered section title with a short accent bar beneath it.
pub struct SectionHeading {
    pub text: String,
}

impl SectionHeading {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for SectionHeading {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let text_h = ctx.backend.measure_text_height(ctx.theme.font_size_xl);
        (available_w, text_h + BAR_GAP + BAR_H)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, _h: u32) -> Result<()> {
        let fs = ctx.theme.font_size_xl;
        let text_w = ctx.backend.measure_text(&self.text, fs);
        let text_h = ctx.backend.measure_text_height(fs);
        let tx = x + layout::center(w, text_w);
        ctx.backend
            .draw_text(&self.text, tx, y, fs, ctx.theme.text_primary)?;
        let bx = x + layout::center(w, BAR_W);
        ctx.backend.fill_rounded_rect(
            bx,
            y + (text_h + BAR_GAP) as i32,
            BAR_W,
            BAR_H,
            ctx.theme.border_radius_sm,
            ctx.theme.accent,
        )?;
        Ok(())
    }
}
