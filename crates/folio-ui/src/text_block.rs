//! Text block widget: multiline text with wrapping and alignment.

use folio_types::backend::Color;
use folio_types::error::Result;

use crate::context::DrawContext;
use crate::layout::{HAlign, align_x};
use crate::widget::Widget;

/// A block of text with word wrapping.
pub struct TextBlock {
    /// Text content.
    pub text: String,
    /// Font size (0 = use theme default).
    pub font_size: u16,
    /// Optional text color override.
    pub color: Option<Color>,
    /// Maximum lines before truncation.
    pub max_lines: Option<u32>,
    /// Horizontal text alignment.
    pub align: HAlign,
}

impl TextBlock {
    /// Create a new text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 0, // 0 = use theme default.
            color: None,
            max_lines: None,
            align: HAlign::Left,
        }
    }

    fn effective_font_size(&self, ctx: &DrawContext<'_>) -> u16 {
        if self.font_size > 0 {
            self.font_size
        } else {
            ctx.theme.font_size_md
        }
    }

    /// Greedy word wrap against the available width. Overlong single
    /// words get a line of their own rather than being split.
    fn wrap(&self, ctx: &DrawContext<'_>, fs: u16, available_w: u32) -> Vec<String> {
        let mut lines = Vec::new();
        for raw in self.text.split('\n') {
            let words: Vec<&str> = raw.split_whitespace().collect();
            if words.is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut current = String::new();
            for word in words {
                let test = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if ctx.backend.measure_text(&test, fs) > available_w && !current.is_empty() {
                    lines.push(current);
                    current = word.to_string();
                } else {
                    current = test;
                }
            }
            if !current.is_empty() {
                lines.push(current);
            }
        }
        if let Some(ml) = self.max_lines {
            lines.truncate(ml as usize);
        }
        lines
    }
}

impl Widget for TextBlock {
    fn measure(&self, ctx: &DrawContext<'_>, available_w: u32, _available_h: u32) -> (u32, u32) {
        let fs = self.effective_font_size(ctx);
        let lh = ctx.backend.measure_text_height(fs);
        let lines = self.wrap(ctx, fs, available_w);
        let max_w = lines
            .iter()
            .map(|l| ctx.backend.measure_text(l, fs))
            .max()
            .unwrap_or(0);
        (max_w, lines.len() as u32 * lh)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, _h: u32) -> Result<()> {
        let fs = self.effective_font_size(ctx);
        let color = self.color.unwrap_or(ctx.theme.text_primary);
        let lh = ctx.backend.measure_text_height(fs);
        for (i, line) in self.wrap(ctx, fs, w).iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_w = ctx.backend.measure_text(line, fs);
            let lx = x + align_x(w, line_w, self.align);
            let ly = y + i as i32 * lh as i32;
            ctx.backend.draw_text(line, lx, ly, fs, color)?;
        }
        Ok(())
    }
}
