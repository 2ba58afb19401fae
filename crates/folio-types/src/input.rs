//! Platform-agnostic UI event types.
//!
//! The hosting environment maps its native events to these enums before
//! handing them to the page; the core never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic UI event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The document scroll offset changed (after user input or an
    /// animated scroll command). Carries the new absolute offset.
    Scroll { offset: i32 },
    /// Pointer click at absolute surface coordinates (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Mouse wheel moved by the given number of notches (positive = down).
    Wheel { delta: i32 },
    /// The surface was resized.
    Resize { width: u32, height: u32 },
    /// Animation frame tick.
    Tick,
    /// User requested quit (window close, etc.).
    Quit,
}
