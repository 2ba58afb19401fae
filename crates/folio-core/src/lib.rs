//! folio-core: section navigation for a single long document.
//!
//! A page is a fixed, ordered set of named vertical sections. This crate
//! derives which section is "active" from the scroll position (scroll-spy),
//! owns the open/closed state of the collapsible menu, and issues animated
//! scroll commands when a section is requested by name. Rendering is
//! someone else's job: the layout layer reports section geometry through
//! [`SectionRegistry`], and the hosting environment supplies the scroll
//! primitive through the [`Viewport`] trait.

pub mod controller;
pub mod registry;
pub mod scroll;

pub use controller::{NavConfig, NavEvent, NavigationController, Subscription, Viewport};
pub use registry::{Section, SectionRegistry};
pub use scroll::DocumentScroll;
