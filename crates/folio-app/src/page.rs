//! Page assembly: turns a [`Profile`] into a vertical stack of section
//! blocks with concrete geometry.
//!
//! Every navigable section comes from the profile's `nav` list. The
//! education block is special: when the profile has education entries
//! but no `education` nav entry, the block is rendered between the
//! last two navigable sections without ever becoming a scroll-spy
//! target, matching its absence from the bar.

use folio_content::Profile;
use folio_core::registry::{Section, SectionRegistry};
use folio_types::backend::RenderBackend;
use folio_types::error::Result;
use folio_ui::badge::{Badge, flow_badges};
use folio_ui::education_card::EducationCard;
use folio_ui::experience_card::ExperienceCard;
use folio_ui::layout::{HAlign, center, distribute};
use folio_ui::nav_bar::NavBar;
use folio_ui::project_card::ProjectCard;
use folio_ui::section_heading::SectionHeading;
use folio_ui::text_block::TextBlock;
use folio_ui::{DrawContext, Theme, Widget};

use crate::backend::HeadlessBackend;

/// Vertical padding above and below each section's content.
const SECTION_PAD: u32 = 64;
/// Extra vertical padding inside the hero section.
const HERO_PAD: u32 = 200;
/// Gap between a section heading and its content.
const HEADING_GAP: u32 = 32;
/// Gap between stacked cards.
const CARD_GAP: u32 = 24;
/// Maximum content column width.
const CONTENT_MAX_W: u32 = 960;
/// Minimum horizontal page margin.
const PAGE_MARGIN: u32 = 32;
/// Content height for sections with nothing to show.
const EMPTY_SECTION_H: u32 = 160;

/// What a block renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
    /// Unknown nav id: heading over empty space.
    Plain,
}

fn kind_for(id: &str) -> BlockKind {
    match id {
        "home" => BlockKind::Hero,
        "about" => BlockKind::About,
        "skills" => BlockKind::Skills,
        "experience" => BlockKind::Experience,
        "projects" => BlockKind::Projects,
        "education" => BlockKind::Education,
        "contact" => BlockKind::Contact,
        _ => BlockKind::Plain,
    }
}

/// One laid-out vertical slice of the page.
#[derive(Debug, Clone)]
struct Block {
    kind: BlockKind,
    /// `None` for decorative blocks that are not scroll-spy targets.
    id: Option<String>,
    label: String,
    top: i32,
    height: u32,
}

/// The fully laid-out page.
pub struct PageLayout {
    profile: Profile,
    theme: Theme,
    width: u32,
    blocks: Vec<Block>,
    content_height: u32,
}

impl PageLayout {
    pub fn new(profile: Profile, theme: Theme, width: u32) -> Self {
        let mut page = Self {
            profile,
            theme,
            width,
            blocks: Vec::new(),
            content_height: 0,
        };
        page.reflow();
        page
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total document height in pixels.
    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Left edge and width of the centered content column.
    fn content_column(&self) -> (i32, u32) {
        let w = self.width.saturating_sub(2 * PAGE_MARGIN).min(CONTENT_MAX_W);
        (((self.width - w) / 2) as i32, w)
    }

    /// Re-lay the page after a width change.
    pub fn resize(&mut self, width: u32) {
        if width != self.width {
            self.width = width;
            self.reflow();
            log::debug!("page reflowed at width {width}, height {}", self.content_height);
        }
    }

    /// Scroll-spy geometry for the navigable blocks, in page order.
    pub fn registry(&self) -> SectionRegistry {
        let sections = self
            .blocks
            .iter()
            .filter_map(|b| {
                b.id.as_ref()
                    .map(|id| Section::with_bounds(id.clone(), b.label.clone(), b.top, b.height))
            })
            .collect();
        SectionRegistry::new(sections)
    }

    /// Push the current geometry into an existing registry.
    pub fn sync_registry(&self, registry: &mut SectionRegistry) -> Result<()> {
        for block in &self.blocks {
            if let Some(id) = &block.id {
                registry.set_bounds(id, block.top, block.height)?;
            }
        }
        Ok(())
    }

    fn reflow(&mut self) {
        let mut scratch = HeadlessBackend::new();
        let ctx = DrawContext::new(&mut scratch, &self.theme);
        let (_, content_w) = self.content_column();

        let mut blocks = Vec::new();
        let nav = self.profile.nav.clone();
        let has_education_nav = nav.iter().any(|e| e.id == "education");
        let education_slot = nav.len().saturating_sub(1);

        let mut top = 0i32;
        for (i, entry) in nav.iter().enumerate() {
            // Education without a nav entry renders before the final
            // section (normally contact) but stays out of the registry.
            if i == education_slot
                && i > 0
                && !has_education_nav
                && !self.profile.education.is_empty()
            {
                let height = self.block_height(&ctx, BlockKind::Education, content_w);
                blocks.push(Block {
                    kind: BlockKind::Education,
                    id: None,
                    label: "Education".into(),
                    top,
                    height,
                });
                top += height as i32;
            }

            let kind = kind_for(&entry.id);
            let height = self.block_height(&ctx, kind, content_w);
            blocks.push(Block {
                kind,
                id: Some(entry.id.clone()),
                label: entry.label.clone(),
                top,
                height,
            });
            top += height as i32;
        }

        self.blocks = blocks;
        self.content_height = top.max(0) as u32;
    }

    fn block_height(&self, ctx: &DrawContext<'_>, kind: BlockKind, content_w: u32) -> u32 {
        let heading_h = SectionHeading::new("").measure(ctx, content_w, 0).1;
        let body = match kind {
            BlockKind::Hero => {
                // Measured with the same widgets draw_hero uses, so a
                // wrapped name at a narrow width grows the block.
                let mut h = 0;
                if let Some(banner) = &self.profile.availability {
                    h += Badge::new(banner.as_str()).measure(ctx, content_w, 0).1 + HEADING_GAP;
                }
                for block in self.hero_text_blocks() {
                    h += block.measure(ctx, content_w, u32::MAX).1 + HEADING_GAP;
                }
                return HERO_PAD + h.saturating_sub(HEADING_GAP) + HERO_PAD;
            },
            BlockKind::About => {
                let mut h = 0;
                for tb in self.about_blocks() {
                    h += tb.measure(ctx, content_w, u32::MAX).1 + CARD_GAP;
                }
                if !self.profile.location.is_empty() {
                    h += ctx.backend.measure_text_height(self.theme.font_size_md) + CARD_GAP;
                }
                h.max(EMPTY_SECTION_H)
            },
            BlockKind::Skills => {
                let mut h = 0;
                for group in &self.profile.skills {
                    let badges: Vec<Badge> = group.items.iter().map(Badge::new).collect();
                    let (_, flow_h) = flow_badges(ctx, &badges, content_w, 12);
                    h += ctx.backend.measure_text_height(self.theme.font_size_lg)
                        + HEADING_GAP / 2
                        + flow_h
                        + CARD_GAP;
                }
                h.max(EMPTY_SECTION_H)
            },
            BlockKind::Experience => {
                let mut h = 0;
                for card in self.experience_cards() {
                    h += card.measure(ctx, content_w, u32::MAX).1 + CARD_GAP;
                }
                h.max(EMPTY_SECTION_H)
            },
            BlockKind::Projects => {
                let (col_w, _) = distribute(content_w, 2, CARD_GAP);
                let cards = self.project_cards();
                let mut h = 0;
                for pair in cards.chunks(2) {
                    let row = pair
                        .iter()
                        .map(|c| c.measure(ctx, col_w, u32::MAX).1)
                        .max()
                        .unwrap_or(0);
                    h += row + CARD_GAP;
                }
                h.max(EMPTY_SECTION_H)
            },
            BlockKind::Education => {
                let mut h = 0;
                for card in self.education_cards() {
                    h += card.measure(ctx, content_w, u32::MAX).1 + CARD_GAP;
                }
                h.max(EMPTY_SECTION_H)
            },
            BlockKind::Contact => {
                let mut h = 0;
                if let Some(pitch) = self.pitch_block() {
                    h += pitch.measure(ctx, content_w, u32::MAX).1 + CARD_GAP;
                }
                let line_h = ctx.backend.measure_text_height(self.theme.font_size_md);
                h += self.contact_lines().len() as u32 * (line_h + 12);
                h.max(EMPTY_SECTION_H)
            },
            BlockKind::Plain => EMPTY_SECTION_H,
        };
        SECTION_PAD + heading_h + HEADING_GAP + body + SECTION_PAD
    }

    /// The hero's stacked text, top to bottom: name, headline, tagline.
    fn hero_text_blocks(&self) -> Vec<TextBlock> {
        let mut blocks = Vec::new();
        let mut name = TextBlock::new(self.profile.name.as_str());
        name.font_size = self.theme.font_size_xxl;
        name.align = HAlign::Center;
        blocks.push(name);
        if !self.profile.headline.is_empty() {
            let mut headline = TextBlock::new(self.profile.headline.as_str());
            headline.font_size = self.theme.font_size_lg;
            headline.align = HAlign::Center;
            headline.color = Some(self.theme.text_secondary);
            blocks.push(headline);
        }
        if !self.profile.tagline.is_empty() {
            let mut tagline = TextBlock::new(self.profile.tagline.as_str());
            tagline.align = HAlign::Center;
            tagline.color = Some(self.theme.text_secondary);
            blocks.push(tagline);
        }
        blocks
    }

    fn about_blocks(&self) -> Vec<TextBlock> {
        self.profile
            .about
            .iter()
            .map(|p| TextBlock::new(p.as_str()))
            .collect()
    }

    fn pitch_block(&self) -> Option<TextBlock> {
        if self.profile.contact.pitch.is_empty() {
            return None;
        }
        let mut tb = TextBlock::new(self.profile.contact.pitch.as_str());
        tb.align = HAlign::Center;
        tb.color = Some(self.theme.text_secondary);
        Some(tb)
    }

    fn experience_cards(&self) -> Vec<ExperienceCard> {
        self.profile
            .experience
            .iter()
            .map(|e| ExperienceCard {
                role: e.role.clone(),
                company: e.company.clone(),
                duration: e.duration.clone(),
                location: e.location.clone(),
                description: e.description.clone(),
                tags: e.tags.clone(),
            })
            .collect()
    }

    fn project_cards(&self) -> Vec<ProjectCard> {
        self.profile
            .projects
            .iter()
            .map(|p| ProjectCard {
                title: p.title.clone(),
                description: p.description.clone(),
                tech: p.tech.clone(),
                icon: p.icon.clone(),
            })
            .collect()
    }

    fn education_cards(&self) -> Vec<EducationCard> {
        self.profile
            .education
            .iter()
            .map(|e| EducationCard {
                degree: e.degree.clone(),
                institution: e.institution.clone(),
                year: e.year.clone(),
                location: e.location.clone(),
            })
            .collect()
    }

    fn contact_lines(&self) -> Vec<String> {
        let c = &self.profile.contact;
        [&c.email, &c.linkedin, &c.github]
            .into_iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect()
    }

    /// Draw the whole page at the given scroll offset, with the fixed
    /// bar on top, then present the frame.
    pub fn paint(&self, backend: &mut dyn RenderBackend, bar: &NavBar, scroll: i32) -> Result<()> {
        backend.clear(self.theme.background)?;
        let (cx, content_w) = self.content_column();
        let mut ctx = DrawContext::new(&mut *backend, &self.theme);
        for block in &self.blocks {
            let screen_y = block.top - scroll;
            self.draw_block(&mut ctx, block, cx, screen_y, content_w)?;
        }
        bar.draw(&mut ctx, 0, 0, self.width, bar.occupied_height())?;
        backend.present()
    }

    fn draw_block(
        &self,
        ctx: &mut DrawContext<'_>,
        block: &Block,
        cx: i32,
        screen_y: i32,
        content_w: u32,
    ) -> Result<()> {
        if block.kind == BlockKind::Hero {
            return self.draw_hero(ctx, cx, screen_y, content_w);
        }

        let mut y = screen_y + SECTION_PAD as i32;
        let heading = SectionHeading::new(block.label.as_str());
        let (_, heading_h) = heading.measure(ctx, content_w, 0);
        heading.draw(ctx, cx, y, content_w, heading_h)?;
        y += (heading_h + HEADING_GAP) as i32;

        match block.kind {
            BlockKind::About => {
                for tb in self.about_blocks() {
                    let (_, h) = tb.measure(ctx, content_w, u32::MAX);
                    tb.draw(ctx, cx, y, content_w, h)?;
                    y += (h + CARD_GAP) as i32;
                }
                if !self.profile.location.is_empty() {
                    ctx.backend.draw_text(
                        &self.profile.location,
                        cx,
                        y,
                        self.theme.font_size_md,
                        self.theme.text_secondary,
                    )?;
                }
            },
            BlockKind::Skills => {
                for group in &self.profile.skills {
                    ctx.backend.draw_text(
                        &group.category,
                        cx,
                        y,
                        self.theme.font_size_lg,
                        self.theme.text_primary,
                    )?;
                    y += (ctx.backend.measure_text_height(self.theme.font_size_lg)
                        + HEADING_GAP / 2) as i32;
                    let badges: Vec<Badge> = group.items.iter().map(Badge::new).collect();
                    let (rects, flow_h) = flow_badges(ctx, &badges, content_w, 12);
                    for (badge, (bx, by, bw, bh)) in badges.iter().zip(rects) {
                        badge.draw(ctx, cx + bx, y + by, bw, bh)?;
                    }
                    y += (flow_h + CARD_GAP) as i32;
                }
            },
            BlockKind::Experience => {
                for card in self.experience_cards() {
                    let (_, h) = card.measure(ctx, content_w, u32::MAX);
                    card.draw(ctx, cx, y, content_w, h)?;
                    y += (h + CARD_GAP) as i32;
                }
            },
            BlockKind::Projects => {
                let (col_w, cols) = distribute(content_w, 2, CARD_GAP);
                for pair in self.project_cards().chunks(2) {
                    let row_h = pair
                        .iter()
                        .map(|c| c.measure(ctx, col_w, u32::MAX).1)
                        .max()
                        .unwrap_or(0);
                    for (card, col_x) in pair.iter().zip(&cols) {
                        card.draw(ctx, cx + col_x, y, col_w, row_h)?;
                    }
                    y += (row_h + CARD_GAP) as i32;
                }
            },
            BlockKind::Education => {
                for card in self.education_cards() {
                    let (_, h) = card.measure(ctx, content_w, u32::MAX);
                    card.draw(ctx, cx, y, content_w, h)?;
                    y += (h + CARD_GAP) as i32;
                }
            },
            BlockKind::Contact => {
                if let Some(pitch) = self.pitch_block() {
                    let (_, h) = pitch.measure(ctx, content_w, u32::MAX);
                    pitch.draw(ctx, cx, y, content_w, h)?;
                    y += (h + CARD_GAP) as i32;
                }
                let line_h = ctx.backend.measure_text_height(self.theme.font_size_md) + 12;
                for line in self.contact_lines() {
                    ctx.backend.draw_text(
                        &line,
                        cx,
                        y,
                        self.theme.font_size_md,
                        self.theme.accent,
                    )?;
                    y += line_h as i32;
                }
            },
            BlockKind::Hero | BlockKind::Plain => {},
        }
        Ok(())
    }

    fn draw_hero(
        &self,
        ctx: &mut DrawContext<'_>,
        cx: i32,
        screen_y: i32,
        content_w: u32,
    ) -> Result<()> {
        let mut y = screen_y + HERO_PAD as i32;
        if let Some(banner) = &self.profile.availability {
            let badge = Badge::new(banner.as_str());
            let (bw, bh) = badge.measure(ctx, content_w, 0);
            badge.draw(ctx, cx + center(content_w, bw), y, bw, bh)?;
            y += (bh + HEADING_GAP) as i32;
        }
        for block in self.hero_text_blocks() {
            let (_, h) = block.measure(ctx, content_w, u32::MAX);
            block.draw(ctx, cx, y, content_w, h)?;
            y += (h + HEADING_GAP) as i32;
        }
        Ok(())
    }
}
