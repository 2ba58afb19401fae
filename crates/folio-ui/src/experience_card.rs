//! Experience card widget: one position in the work history.

use folio_types::error::Result;

use crate::badge::{Badge, flow_badges};
use crate::context::DrawContext;
use crate::layout::Padding;
use crate::text_block::TextBlock;
use crate::widget::Widget;

/// A card describing one role: title line, company and dates, wrapped
/// description, and a row of technology tags.
pub struct ExperienceCard {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ExperienceCard {
    fn padding() -> Padding {
        Padding::uniform(16)
    }

    fn badges(&self) -> Vec<Badge> {
        self.tags.iter().map(Badge::new).collect()
    }

    fn meta_line(&self) -> String {
        if self.location.is_empty() {
            self.duration.clone()
        } else {
            format!("{} | {}", self.duration, self.location)
        }
    }

    fn description_block(&self) -> TextBlock {
        let mut tb = TextBlock::new(self.description.as_str());
        tb.color = None;
        tb
    }
}

impl Widget for ExperienceCard {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let pad = Self::padding();
        let inner_w = available_w.saturating_sub(pad.horizontal());
        let gap = ctx.theme.spacing_md as u32;

        let mut h = ctx.backend.measure_text_height(ctx.theme.font_size_lg) + gap;
        h += ctx.backend.measure_text_height(ctx.theme.font_size_md) + gap;
        if !self.description.is_empty() {
            let (_, desc_h) = self.description_block().measure(ctx, inner_w, u32::MAX);
            h += desc_h + gap;
        }
        if !self.tags.is_empty() {
            let (_, tags_h) = flow_badges(ctx, &self.badges(), inner_w, gap);
            h += tags_h;
        }
        (available_w, h + pad.vertical())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        ctx.panel(x, y, w, h)?;
        let pad = Self::padding();
        let (ix, iy, iw, _) = pad.inner_rect(x, y, w, h);
        let gap = ctx.theme.spacing_md as i32;
        let mut cy = iy;

        ctx.backend.draw_text(
            &self.role,
            ix,
            cy,
            ctx.theme.font_size_lg,
            ctx.theme.text_primary,
        )?;
        cy += ctx.backend.measure_text_height(ctx.theme.font_size_lg) as i32 + gap;

        let fs = ctx.theme.font_size_md;
        ctx.backend
            .draw_text(&self.company, ix, cy, fs, ctx.theme.accent)?;
        let company_w = ctx.backend.measure_text(&self.company, fs);
        ctx.backend.draw_text(
            &self.meta_line(),
            ix + company_w as i32 + 2 * gap,
            cy,
            fs,
            ctx.theme.text_secondary,
        )?;
        cy += ctx.backend.measure_text_height(fs) as i32 + gap;

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;
    use crate::theme::Theme;

    fn card() -> ExperienceCard {
        ExperienceCard {
            role: "Senior Engineer".into(),
            company: "Initech".into(),
            duration: "2021 - Present".into(),
            location: "Remote".into(),
            description: "Owns the storage tier.".into(),
            tags: vec!["Rust".into(), "Postgres".into()],
        }
    }

    #[test]
    fn draw_all_fields() {
        let theme = Theme::light();
        let mut backend = MockBackend::new();
        {
            let c = card();
            let mut ctx = DrawContext::new(&mut backend, &theme);
            let (_, h) = c.measure(&ctx, 600, 1000);
            c.draw(&mut ctx, 0, 0, 600, h).unwrap();
        }
        assert!(backend.has_text("Senior Engineer"));
        assert!(backend.has_text("Initech"));
        assert!(backend.has_text("2021 - Present"));
        assert!(backend.has_text("Remote"));
        assert!(backend.has_text("storage tier"));
        assert!(backend.has_text("Rust"));
        assert!(backend.has_text("Postgres"));
    }

    #[test]
    fn company_uses_accent() {
        let theme = Theme::light();
        let mut backend = MockBackend::new();
        {
            let c = card();
            let mut ctx = DrawContext::new(&mut backend, &theme);
            c.draw(&mut ctx, 0, 0, 600, 200).unwrap();
        }
        assert_eq!(backend.text_color("Initech"), Some(theme.accent));
    }

    #[test]
    fn measure_grows_with_tags() {
        let theme = Theme::light();
        let mut backend = MockBackend::new();
        let ctx = DrawContext::new(&mut backend, &theme);
        let mut c = card();
        let (_, with_tags) = c.measure(&ctx, 600, 1000);
        c.tags.clear();
        let (_, without_tags) = c.measure(&ctx, 600, 1000);
        assert!(with_tags > without_tags);
    }

    #[test]
    fn empty_location_omits_separator() {
        let mut c = card();
        c.location.clear();
        assert_eq!(c.meta_line(), "2021 - Present");
    }
}
