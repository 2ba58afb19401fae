//! Layout helpers: centering, padding, distribution.

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Top padding in pixels.
    pub top: u16,
    /// Right padding in pixels.
    pub right: u16,
    /// Bottom padding in pixels.
    pub bottom: u16,
    /// Left padding in pixels.
    pub left: u16,
}

impl Padding {
    /// Zero padding on all sides.
    pub const ZERO: Self = Self::uniform(0);

    /// Create uniform padding on all sides.
    pub const fn uniform(p: u16) -> Self {
        Self {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }

    /// Create symmetric padding (horizontal and vertical).
    pub const fn symmetric(h: u16, v: u16) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Compute the inner rectangle after applying padding.
    pub fn inner_rect(&self, x: i32, y: i32, w: u32, h: u32) -> (i32, i32, u32, u32) {
        (
            x + self.left as i32,
            y + self.top as i32,
            w.saturating_sub(self.left as u32 + self.right as u32),
            h.saturating_sub(self.top as u32 + self.bottom as u32),
        )
    }

    /// Total horizontal padding (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

/// Compute centered position of a child within a parent.
pub fn center(parent_size: u32, child_size: u32) -> i32 {
    ((parent_size as i32 - child_size as i32) / 2).max(0)
}

/// Distribute `n` items evenly across `total` pixels with `gap` pixels between.
///
/// Returns `(item_size, positions)`.
pub fn distribute(total: u32, n: u32, gap: u32) -> (u32, Vec<i32>) {
    if n == 0 {
        return (0, Vec::new());
    }
    let total_gap = gap * n.saturating_sub(1);
    let item_size = total.saturating_sub(total_gap) / n;
    let positions = (0..n).map(|i| (i * (item_size + gap)) as i32).collect();
    (item_size, positions)
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    /// Align to the left edge.
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
}

/// Compute x position for horizontal alignment.
pub fn align_x(container_w: u32, child_w: u32, align: HAlign) -> i32 {
    match align {
        HAlign::Left => 0,
        HAlign::Center => center(container_w, child_w),
        HAlign::Right => (container_w as i32 - child_w as i32).max(0),
    }
}
