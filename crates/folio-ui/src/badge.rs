//! Badge widget: pill-shaped label for skills and technology tags.

use folio_types::error::Result;

use crate::context::DrawContext;
use crate::widget::Widget;

/// Horizontal padding inside the pill.
const PAD_X: u32 = 10;
/// Vertical padding inside the pill.
const PAD_Y: u32 = 5;

/// A pill-shaped tag with a subtle accent background.
pub struct Badge {
    pub text: String,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for Badge {
    fn measure(&self, ctx: &DrawContext<'_>, _available_w: u32, _available_h: u32) -> (u32, u32) {
        let fs = ctx.theme.font_size_sm;
        let w = ctx.backend.measure_text(&self.text, fs) + 2 * PAD_X;
        let h = ctx.backend.measure_text_height(fs) + 2 * PAD_Y;
        (w, h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        // Pill shape: radius is half the height.
        ctx.backend
            .fill_rounded_rect(x, y, w, h, (h / 2) as u16, ctx.theme.accent_subtle)?;
        ctx.backend.draw_text(
            &self.text,
            x + PAD_X as i32,
            y + PAD_Y as i32,
            ctx.theme.font_size_sm,
            ctx.theme.accent,
        )?;
        Ok(())
    }
}

/// Lay a row of badges into `available_w`, flowing onto new rows when a
/// badge would overflow. Returns each badge's `(x, y, w, h)` relative
/// to the flow origin plus the total height consumed.
pub fn flow_badges(
    ctx: &DrawContext<'_>,
    badges: &[Badge],
    available_w: u32,
    gap: u32,
) -> (Vec<(i32, i32, u32, u32)>, u32) {
    let mut rects = Vec::with_capacity(badges.len());
    let mut cx = 0i32;
    let mut cy = 0i32;
    let mut row_h = 0u32;
    for badge in badges {
        let (w, h) = badge.measure(ctx, available_w, u32::MAX);
        if cx > 0 && cx + w as i32 > available_w as i32 {
            cx = 0;
            cy += (row_h + gap) as i32;
            row_h = 0;
        }
        rects.push((cx, cy, w, h));
        cx += (w + gap) as i32;
        row_h = row_h.max(h);
    }
    let total_h = if rects.is_empty() {
        0
    } else {
        cy as u32 + row_h
    };
    (rects, total_h)
}
