//! Headless recording backend.
//!
//! Renders nothing; instead it records every draw call so the demo
//! binary and the integration tests can inspect what a frame would
//! contain. Text measurement comes from the shared bitmap metrics, so
//! layout matches any real backend using the same font model.

use folio_types::backend::{Color, RenderBackend};
use folio_types::error::Result;

/// One recorded backend operation.
#[derive(Debug, Clone)]
pub enum RecordedOp {
    Clear {
        color: Color,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    FillRoundedRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    },
    DrawLine {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    Present,
}

/// A backend that records the frame instead of rasterizing it.
#[derive(Default)]
pub struct HeadlessBackend {
    ops: Vec<RecordedOp>,
    frames: u32,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations recorded since the last [`HeadlessBackend::reset`].
    pub fn ops(&self) -> &[RecordedOp] {
        &self.ops
    }

    /// Number of presented frames.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Drop recorded operations, keeping the frame counter.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Every text run in the recorded frame, top to bottom.
    pub fn texts(&self) -> Vec<(&str, i32, i32)> {
        let mut out: Vec<_> = self
            .ops
            .iter()
            .filter_map(|op| {
                if let RecordedOp::DrawText { text, x, y, .. } = op {
                    Some((text.as_str(), *x, *y))
                } else {
                    None
                }
            })
            .collect();
        out.sort_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)));
        out
    }

    /// Whether any recorded text run contains the substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.ops.iter().any(|op| {
            if let RecordedOp::DrawText { text, .. } = op {
                text.contains(needle)
            } else {
                false
            }
        })
    }

    /// Screen-space y of the first text run containing the substring.
    pub fn text_y(&self, needle: &str) -> Option<i32> {
        self.texts()
            .iter()
            .find(|(text, _, _)| text.contains(needle))
            .map(|(_, _, y)| *y)
    }
}

impl RenderBackend for HeadlessBackend {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.ops.push(RecordedOp::Clear { color });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.ops.push(RecordedOp::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        self.ops.push(RecordedOp::FillRoundedRect {
            x,
            y,
            w,
            h,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: u32,
        color: Color,
    ) -> Result<()> {
        self.ops.push(RecordedOp::DrawLine {
            x0,
            y0,
            x1,
            y1,
            width,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.ops.push(RecordedOp::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn set_clip_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<()> {
        Ok(())
    }

    fn reset_clip_rect(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.ops.push(RecordedOp::Present);
        self.frames += 1;
        Ok(())
    }
}
