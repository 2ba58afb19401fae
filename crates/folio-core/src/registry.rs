//! Section registry: the fixed, ordered set of navigable sections and
//! their rendered vertical boundaries.
//!
//! Membership and order are fixed at construction. Only the geometry
//! (`top`, `height`) changes afterwards, and only through
//! [`SectionRegistry::set_bounds`] -- the layout layer's write path after
//! a reflow or resize. The navigation controller reads, never writes.

use folio_types::error::{FolioError, Result};

/// A named vertical region of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable unique key, e.g. `"about"`.
    pub id: String,
    /// Label shown in the navigation menu.
    pub label: String,
    /// Distance in pixels from document top to section start.
    pub top: i32,
    /// Vertical extent of the section in pixels.
    pub height: u32,
}

impl Section {
    /// Create a section with zeroed geometry (laid out later).
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            top: 0,
            height: 0,
        }
    }

    /// Create a section with known geometry.
    pub fn with_bounds(
        id: impl Into<String>,
        label: impl Into<String>,
        top: i32,
        height: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            top,
            height,
        }
    }

    /// Whether a probe offset falls inside `[top, top + height)`.
    pub fn contains(&self, probe: i32) -> bool {
        self.top <= probe && probe < self.top + self.height as i32
    }
}

/// The fixed, ordered collection of sections.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Create a registry from sections in navigation order.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The sections in navigation order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Position of a section id in navigation order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Current geometry of a section.
    ///
    /// Values reflect layout at call time; they may change between calls
    /// after a reflow.
    pub fn bounds_of(&self, id: &str) -> Result<(i32, u32)> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| (s.top, s.height))
            .ok_or_else(|| FolioError::UnknownSection(id.to_string()))
    }

    /// Update a section's geometry after layout.
    pub fn set_bounds(&mut self, id: &str, top: i32, height: u32) -> Result<()> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| FolioError::UnknownSection(id.to_string()))?;
        section.top = top;
        section.height = height;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::with_bounds("home", "Home", 0, 800),
            Section::with_bounds("about", "About", 800, 600),
            Section::with_bounds("contact", "Contact", 1400, 500),
        ])
    }

    #[test]
    fn sections_keep_order() {
        let reg = demo_registry();
        let ids: Vec<&str> = reg.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["home", "about", "contact"]);
    }

    #[test]
    fn index_of_known_and_unknown() {
        let reg = demo_registry();
        assert_eq!(reg.index_of("about"), Some(1));
        assert_eq!(reg.index_of("blog"), None);
    }

    #[test]
    fn bounds_of_known_section() {
        let reg = demo_registry();
        assert_eq!(reg.bounds_of("about").unwrap(), (800, 600));
    }

    #[test]
    fn bounds_of_unknown_section_errors() {
        let reg = demo_registry();
        let err = reg.bounds_of("blog").unwrap_err();
        assert!(matches!(err, FolioError::UnknownSection(id) if id == "blog"));
    }

    #[test]
    fn set_bounds_updates_geometry() {
        let mut reg = demo_registry();
        reg.set_bounds("about", 900, 700).unwrap();
        assert_eq!(reg.bounds_of("about").unwrap(), (900, 700));
        // Membership and order unchanged.
        assert_eq!(reg.index_of("about"), Some(1));
    }

    #[test]
    fn set_bounds_unknown_section_errors() {
        let mut reg = demo_registry();
        assert!(reg.set_bounds("blog", 0, 0).is_err());
    }

    #[test]
    fn contains_half_open_range() {
        let s = Section::with_bounds("home", "Home", 100, 50);
        assert!(!s.contains(99));
        assert!(s.contains(100));
        assert!(s.contains(149));
        assert!(!s.contains(150));
    }

    #[test]
    fn zero_height_section_contains_nothing() {
        let s = Section::new("home", "Home");
        assert!(!s.contains(0));
    }

    #[test]
    fn empty_registry() {
        let reg = SectionRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(reg.bounds_of("home").is_err());
    }
}
