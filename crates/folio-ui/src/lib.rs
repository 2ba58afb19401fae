//! folio-ui: themed widgets for the portfolio page.
//!
//! Widgets render through the `RenderBackend` trait only, so the same
//! page draws identically on a real surface or the recording backend
//! used in tests. Layout is immediate-mode: the page assembly measures
//! widgets top to bottom and hands each one its rectangle.

pub mod badge;
pub use folio_types::color;
pub mod context;
pub mod education_card;
pub mod experience_card;
pub mod layout;
pub mod nav_bar;
pub mod project_card;
pub mod section_heading;
pub mod text_block;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::DrawContext;
pub use layout::Padding;
pub use nav_bar::{NavAction, NavBar};
pub use theme::Theme;
pub use widget::Widget;
