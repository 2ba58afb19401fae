//! Fixed navigation bar widget.
//!
//! Renders the site title on the left and the section links on the
//! right, with the active link highlighted by color and underline. In
//! collapsed mode (narrow viewports) the links are replaced by a menu
//! button that opens a dropdown panel below the bar.
//!
//! Geometry is computed from the shared bitmap font metrics in
//! `folio_types::backend`, so [`NavBar::hit_test`] agrees with
//! [`Widget::draw`] without needing a backend.

use folio_types::backend::{measure_text, measure_text_height};
use folio_types::error::Result;

use crate::context::DrawContext;
use crate::layout;
use crate::widget::Widget;

/// Horizontal padding at both bar edges.
const EDGE_PAD: i32 = 16;
/// Horizontal slop added around each link label.
const LINK_PAD: u32 = 12;
/// Size of the collapsed-mode menu button.
const MENU_BUTTON: u32 = 40;
/// Row height inside the dropdown panel.
const ROW_H: u32 = 40;

/// What a click on the bar means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// A section link was clicked; carries the link index.
    Navigate(usize),
    /// The collapsed-mode menu button was clicked.
    ToggleMenu,
}

/// The fixed top navigation bar.
pub struct NavBar {
    /// Site title shown at the left edge.
    pub title: String,
    /// Section link labels in page order.
    pub links: Vec<String>,
    /// Index of the active link.
    pub active: usize,
    /// Narrow-viewport mode: links collapse behind a menu button.
    pub collapsed: bool,
    /// Whether the collapsed-mode dropdown is open.
    pub menu_open: bool,
    /// Bar height in pixels.
    pub height: u32,
    /// Link font size; must match the theme's default for the
    /// underline to line up with the drawn labels.
    pub font_size: u16,
}

impl NavBar {
    pub fn new(title: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            title: title.into(),
            links,
            active: 0,
            collapsed: false,
            menu_open: false,
            height: 80,
            font_size: 8,
        }
    }

    /// Right-aligned `(x, width)` slot for each link at the given bar
    /// width.
    fn link_slots(&self, bar_w: u32) -> Vec<(i32, u32)> {
        let widths: Vec<u32> = self
            .links
            .iter()
            .map(|l| measure_text(l, self.font_size) + 2 * LINK_PAD)
            .collect();
        let total: u32 = widths.iter().sum();
        let mut x = bar_w as i32 - EDGE_PAD - total as i32;
        let mut slots = Vec::with_capacity(widths.len());
        for w in widths {
            slots.push((x, w));
            x += w as i32;
        }
        slots
    }

    fn menu_button_rect(&self, bar_w: u32) -> (i32, i32, u32, u32) {
        let x = bar_w as i32 - EDGE_PAD - MENU_BUTTON as i32;
        let y = layout::center(self.height, MENU_BUTTON);
        (x, y, MENU_BUTTON, MENU_BUTTON)
    }

    /// Height of everything the bar currently occupies, including an
    /// open dropdown.
    pub fn occupied_height(&self) -> u32 {
        if self.collapsed && self.menu_open {
            self.height + self.links.len() as u32 * ROW_H
        } else {
            self.height
        }
    }

    /// Resolve a click at bar-relative coordinates.
    ///
    /// Returns `None` for clicks on inert areas (the title, the gaps,
    /// anywhere below the occupied region).
    pub fn hit_test(&self, x: i32, y: i32, bar_w: u32) -> Option<NavAction> {
        if x < 0 || x >= bar_w as i32 || y < 0 {
            return None;
        }
        if y < self.height as i32 {
            if self.collapsed {
                let (bx, by, bw, bh) = self.menu_button_rect(bar_w);
                if x >= bx && x < bx + bw as i32 && y >= by && y < by + bh as i32 {
                    return Some(NavAction::ToggleMenu);
                }
                return None;
            }
            for (i, (sx, sw)) in self.link_slots(bar_w).into_iter().enumerate() {
                if x >= sx && x < sx + sw as i32 {
                    return Some(NavAction::Navigate(i));
                }
            }
            return None;
        }
        if self.collapsed && self.menu_open {
            let row = (y - self.height as i32) / ROW_H as i32;
            if row >= 0 && (row as usize) < self.links.len() {
                return Some(NavAction::Navigate(row as usize));
            }
        }
        None
    }
}

impl Widget for NavBar {
    fn measure(&self, _ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        (available_w, self.occupied_height())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, _h: u32) -> Result<()> {
        let fs = self.font_size;
        let text_h = measure_text_height(fs);

        ctx.backend.fill_rect(x, y, w, self.height, ctx.theme.surface)?;
        ctx.backend.draw_line(
            x,
            y + self.height as i32 - 1,
            x + w as i32,
            y + self.height as i32 - 1,
            1,
            ctx.theme.border_subtle,
        )?;

        let title_y = y + layout::center(self.height, measure_text_height(ctx.theme.font_size_lg));
        ctx.backend.draw_text(
            &self.title,
            x + EDGE_PAD,
            title_y,
            ctx.theme.font_size_lg,
            ctx.theme.accent,
        )?;

        if self.collapsed {
            let (bx, by, bw, bh) = self.menu_button_rect(w);
            ctx.backend.fill_rounded_rect(
                x + bx,
                y + by,
                bw,
                bh,
                ctx.theme.border_radius_md,
                ctx.theme.surface_variant,
            )?;
            // Hamburger glyph: three bars.
            for i in 0..3 {
                ctx.backend.fill_rect(
                    x + bx + 10,
                    y + by + 12 + i * 7,
                    bw - 20,
                    2,
                    ctx.theme.text_primary,
                )?;
            }
            if self.menu_open {
                self.draw_dropdown(ctx, x, y + self.height as i32, w)?;
            }
            return Ok(());
        }

        let label_y = y + layout::center(self.height, text_h);
        for (i, ((sx, sw), link)) in self.link_slots(w).into_iter().zip(&self.links).enumerate() {
            let active = i == self.active;
            let color = if active {
                ctx.theme.accent
            } else {
                ctx.theme.text_secondary
            };
            ctx.backend
                .draw_text(link, x + sx + LINK_PAD as i32, label_y, fs, color)?;
            if active {
                ctx.backend.fill_rect(
                    x + sx + LINK_PAD as i32,
                    y + self.height as i32 - 8,
                    measure_text(link, fs),
                    3,
                    ctx.theme.accent,
                )?;
            }
        }
        Ok(())
    }
}

impl NavBar {
    fn draw_dropdown(&self, ctx: &mut DrawContext<'_>, x: i32, top: i32, w: u32) -> Result<()> {
        let panel_h = self.links.len() as u32 * ROW_H;
        ctx.backend.fill_rect(x, top, w, panel_h, ctx.theme.surface)?;
        let text_h = measure_text_height(self.font_size);
        for (i, link) in self.links.iter().enumerate() {
            let row_y = top + (i as u32 * ROW_H) as i32;
            let active = i == self.active;
            if active {
                ctx.backend
                    .fill_rect(x, row_y, w, ROW_H, ctx.theme.accent_subtle)?;
            }
            let color = if active {
                ctx.theme.accent
            } else {
                ctx.theme.text_primary
            };
            ctx.backend.draw_text(
                link,
                x + EDGE_PAD,
                row_y + layout::center(ROW_H, text_h),
                self.font_size,
                color,
            )?;
        }
        ctx.backend.draw_line(
            x,
            top + panel_h as i32 - 1,
            x + w as i32,
            top + panel_h as i32 - 1,
            1,
            ctx.theme.border,
        )?;
        Ok(())
    }
}
