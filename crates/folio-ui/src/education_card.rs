//! Education card widget.

use folio_types::error::Result;

use crate::context::DrawContext;
use crate::layout::Padding;
use crate::widget::Widget;

/// A card for one degree or certification.
pub struct EducationCard {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub location: String,
}

impl EducationCard {
    fn padding() -> Padding {
        Padding::uniform(16)
    }

    fn meta_line(&self) -> String {
        match (self.year.is_empty(), self.location.is_empty()) {
            (false, false) => format!("{} | {}", self.year, self.location),
            (false, true) => self.year.clone(),
            (true, false) => self.location.clone(),
            (true, true) => String::new(),
        }
    }
}

impl Widget for EducationCard {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let pad = Self::padding();
        let gap = ctx.theme.spacing_md as u32;
        let mut h = ctx.backend.measure_text_height(ctx.theme.font_size_lg) + gap;
        h += ctx.backend.measure_text_height(ctx.theme.font_size_md);
        if !self.meta_line().is_empty() {
            h += gap + ctx.backend.measure_text_height(ctx.theme.font_size_md);
        }
        (available_w, h + pad.vertical())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        ctx.panel(x, y, w, h)?;
        let pad = Self::padding();
        let (ix, iy, _, _) = pad.inner_rect(x, y, w, h);
        let gap = ctx.theme.spacing_md as i32;
        let mut cy = iy;

        ctx.backend.draw_text(
            &self.degree,
            ix,
            cy,
            ctx.theme.font_size_lg,
            ctx.theme.text_primary,
        )?;
        cy += ctx.backend.measure_text_height(ctx.theme.font_size_lg) as i32 + gap;

        let fs = ctx.theme.font_size_md;
        ctx.backend
            .draw_text(&self.institution, ix, cy, fs, ctx.theme.accent)?;
        let meta = self.meta_line();
        if !meta.is_empty() {
            cy += ctx.backend.measure_text_height(fs) as i32 + gap;
            ctx.backend
                .draw_text(&meta, ix, cy, fs, ctx.theme.text_secondary)?;
        }
        Ok(())
    }
}
