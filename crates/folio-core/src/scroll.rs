//! Animated document scrolling.
//!
//! [`DocumentScroll`] implements the [`Viewport`] seam for interactive
//! shells: commands set a target and the shell drives [`DocumentScroll::tick`]
//! once per frame, easing the offset toward it. A new command simply
//! replaces the target, so the latest request always wins.

use folio_types::error::Result;

use crate::controller::Viewport;

/// Fraction of the remaining distance covered per tick (1/4).
const EASE_DIVISOR: i32 = 4;

/// Scroll state of the whole document within a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentScroll {
    offset: i32,
    target: i32,
    content_height: u32,
    viewport_height: u32,
}

impl DocumentScroll {
    pub fn new(content_height: u32, viewport_height: u32) -> Self {
        Self {
            offset: 0,
            target: 0,
            content_height,
            viewport_height,
        }
    }

    /// Current scroll offset in pixels.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Largest reachable offset: content below the viewport bottom.
    pub fn max_offset(&self) -> i32 {
        self.content_height.saturating_sub(self.viewport_height) as i32
    }

    /// Whether an animated scroll is still in flight.
    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Update document and viewport dimensions after a reflow or
    /// resize, re-clamping the offset into the new valid range.
    pub fn set_extent(&mut self, content_height: u32, viewport_height: u32) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.clamp(self.offset);
        self.target = self.clamp(self.target);
    }

    /// Jump to an offset immediately, cancelling any animation.
    pub fn jump_to(&mut self, offset: i32) {
        let offset = self.clamp(offset);
        self.offset = offset;
        self.target = offset;
    }

    /// Move by a wheel delta. Direct input cancels the animation and
    /// takes effect immediately.
    pub fn scroll_by(&mut self, delta: i32) {
        self.jump_to(self.offset.saturating_add(delta));
    }

    /// Advance the animation one frame, easing toward the target by a
    /// fixed fraction of the remaining distance (minimum one pixel so
    /// the tail converges). Returns true while the offset still moved.
    pub fn tick(&mut self) -> bool {
        let remaining = self.target - self.offset;
        if remaining == 0 {
            return false;
        }
        let step = remaining / EASE_DIVISOR;
        let step = if step == 0 { remaining.signum() } else { step };
        self.offset += step;
        true
    }

    fn clamp(&self, offset: i32) -> i32 {
        offset.clamp(0, self.max_offset())
    }
}

impl Viewport for DocumentScroll {
    fn scroll_to(&mut self, offset: i32) -> Result<()> {
        self.target = self.clamp(offset);
        Ok(())
    }

    fn scroll_offset(&self) -> i32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_top() {
        let scroll = DocumentScroll::new(3000, 600);
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn max_offset_accounts_for_viewport() {
        let scroll = DocumentScroll::new(3000, 600);
        assert_eq!(scroll.max_offset(), 2400);

        // Content shorter than the viewport never scrolls.
        let short = DocumentScroll::new(400, 600);
        assert_eq!(short.max_offset(), 0);
    }

    #[test]
    fn scroll_to_animates_toward_target() {
        let mut scroll = DocumentScroll::new(3000, 600);
        scroll.scroll_to(1000).unwrap();
        assert!(scroll.is_animating());

        assert!(scroll.tick());
        assert_eq!(scroll.offset(), 250);
        assert!(scroll.tick());
        assert_eq!(scroll.offset(), 437);
    }

    #[test]
    fn tick_converges_exactly() {
        let mut scroll = DocumentScroll::new(3000, 600);
        scroll.scroll_to(7).unwrap();
        let mut frames = 0;
        while scroll.tick() {
            frames += 1;
            assert!(frames < 100, "animation failed to converge");
        }
        assert_eq!(scroll.offset(), 7);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn last_request_wins() {
        let mut scroll = DocumentScroll::new(3000, 600);
        scroll.scroll_to(2000).unwrap();
        scroll.tick();
        // New command mid-flight retargets the same animation.
        scroll.scroll_to(100).unwrap();
        while scroll.tick() {}
        assert_eq!(scroll.offset(), 100);
    }

    #[test]
    fn targets_clamp_to_content() {
        let mut scroll = DocumentScroll::new(1000, 600);
        scroll.scroll_to(50_000).unwrap();
        while scroll.tick() {}
        assert_eq!(scroll.offset(), 400);

        scroll.scroll_to(-300).unwrap();
        while scroll.tick() {}
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn wheel_input_cancels_animation() {
        let mut scroll = DocumentScroll::new(3000, 600);
        scroll.scroll_to(2000).unwrap();
        scroll.tick();
        scroll.scroll_by(40);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 540);
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut scroll = DocumentScroll::new(3000, 600);
        scroll.jump_to(2400);
        scroll.set_extent(1000, 600);
        assert_eq!(scroll.offset(), 400);
    }
}
