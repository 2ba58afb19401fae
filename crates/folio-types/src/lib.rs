//! Foundation types for folio.
//!
//! This crate contains the platform-agnostic types shared by all folio
//! crates: colors, the render backend trait, UI event types, and errors.

pub mod backend;
pub mod color;
pub mod error;
pub mod input;
