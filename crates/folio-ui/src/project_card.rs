//! Project card widget.

use folio_types::error::Result;

use crate::badge::{Badge, flow_badges};
use crate::context::DrawContext;
use crate::layout::Padding;
use crate::text_block::TextBlock;
use crate::widget::Widget;

/// A card showcasing one project: icon glyph, title, wrapped
/// description, and the technology stack as badges.
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub icon: String,
}

impl ProjectCard {
    fn padding() -> Padding {
        Padding::uniform(16)
    }

    fn badges(&self) -> Vec<Badge> {
        self.tech.iter().map(Badge::new).collect()
    }

    fn description_block(&self) -> TextBlock {
        TextBlock::new(self.description.as_str())
    }
}

impl Widget for ProjectCard {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let pad = Self::padding();
        let inner_w = available_w.saturating_sub(pad.horizontal());
        let gap = ctx.theme.spacing_md as u32;

        // Icon and title share the first line.
        let mut h = ctx.backend.measure_text_height(ctx.theme.font_size_lg) + gap;
        if !self.description.is_empty() {
            let (_, desc_h) = self.description_block().measure(ctx, inner_w, u32::MAX);
            h += desc_h + gap;
        }
        if !self.tech.is_empty() {
            let (_, tech_h) = flow_badges(ctx, &self.badges(), inner_w, gap);
            h += tech_h;
        }
        (available_w, h + pad.vertical())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        ctx.panel(x, y, w, h)?;
        let pad = Self::padding();
        let (ix, iy, iw, _) = pad.inner_rect(x, y, w, h);
        let gap = ctx.theme.spacing_md as i32;
        let fs_lg = ctx.theme.font_size_lg;
        let mut cy = iy;

        let mut tx = ix;
        if !self.icon.is_empty() {
            ctx.backend
                .draw_text(&self.icon, ix, cy, fs_lg, ctx.theme.accent)?;
            tx += ctx.backend.measure_text(&self.icon, fs_lg) as i32 + gap;
        }
        ctx.backend
            .draw_text(&self.title, tx, cy, fs_lg, ctx.theme.text_primary)?;
        cy += ctx.backend.measure_text_height(fs_lg) as i32 + gap;

        if !self.description.is_empty() {
            let block = self.description_block();
            let (_, desc_h) = block.measure(ctx, iw, u32::MAX);
            block.draw(ctx, ix, cy, iw, desc_h)?;
            cy += desc_h as i32 + gap;
        }

        let badges = self.badges();
        let (rects, _) = flow_badges(ctx, &badges, iw, gap as u32);
        for (badge, (bx, by, bw, bh)) in badges.iter().zip(rects) {
            badge.draw(ctx, ix + bx, cy + by, bw, bh)?;
        }
        Ok(())
    }
}
