//! Navigation controller: scroll-spy state machine and menu state.
//!
//! The controller owns two pieces of UI state -- the active section and
//! whether the collapsible menu is open -- and reacts to exactly two
//! stimuli: scroll ticks and navigation requests. It never writes the
//! active section on a navigation request; the viewport moves, and the
//! resulting scroll ticks feed back through [`NavigationController::on_scroll`],
//! keeping the actual scroll position the single source of truth.

use folio_types::error::{FolioError, Result};

use crate::registry::SectionRegistry;

/// Default forward offset added to the scroll position before matching
/// against section bounds, compensating for the fixed navigation bar
/// partially covering the viewport top.
pub const ACTIVATION_MARGIN: i32 = 100;

/// Default height of the fixed navigation bar. Scroll targets are
/// corrected by this amount so section headings clear the bar.
pub const NAV_BAR_HEIGHT: i32 = 80;

/// Controller tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    /// Scroll-offset lookahead for activating a section.
    pub activation_margin: i32,
    /// Scroll-target correction so headings clear the fixed bar.
    pub nav_bar_height: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            activation_margin: ACTIVATION_MARGIN,
            nav_bar_height: NAV_BAR_HEIGHT,
        }
    }
}

/// A state-change notification delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent<'a> {
    /// The active section changed. Carries the new section id.
    ActiveChanged(&'a str),
    /// The collapsible menu opened or closed. Carries the new state.
    MenuChanged(bool),
}

/// The hosting environment's scroll primitive.
///
/// Commands are fire-and-forget: the controller does not await
/// completion, and a new command supersedes an in-flight one (last
/// request wins). Implementations report the current offset so the
/// shell can feed it back through `on_scroll`.
pub trait Viewport {
    /// Request a (possibly animated) scroll to an absolute offset.
    fn scroll_to(&mut self, offset: i32) -> Result<()>;

    /// The current scroll offset in pixels.
    fn scroll_offset(&self) -> i32;
}

type Listener = Box<dyn FnMut(NavEvent<'_>)>;

/// Handle returned by [`NavigationController::subscribe`]; pass it back
/// to [`NavigationController::unsubscribe`] on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// Scroll-spy navigation controller for a sectioned document.
pub struct NavigationController {
    registry: SectionRegistry,
    config: NavConfig,
    /// Index of the active section. An index (not an id) so the "active
    /// section is always a registered section" invariant holds by
    /// construction.
    active: usize,
    menu_open: bool,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

impl NavigationController {
    /// Create a controller over a registry. The first section starts
    /// active; the menu starts closed.
    ///
    /// Fails with [`FolioError::Registry`] on an empty registry, since
    /// there would be no valid initial active section.
    pub fn new(registry: SectionRegistry, config: NavConfig) -> Result<Self> {
        if registry.is_empty() {
            return Err(FolioError::Registry("no sections configured".into()));
        }
        Ok(Self {
            registry,
            config,
            active: 0,
            menu_open: false,
            listeners: Vec::new(),
            next_listener: 1,
        })
    }

    /// Id of the currently active section.
    pub fn active_section_id(&self) -> &str {
        &self.registry.sections()[self.active].id
    }

    /// Index of the currently active section in registry order.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether the collapsible menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// The section registry.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Mutable registry access for the layout layer's geometry updates.
    pub fn registry_mut(&mut self) -> &mut SectionRegistry {
        &mut self.registry
    }

    /// The controller tunables.
    pub fn config(&self) -> NavConfig {
        self.config
    }

    /// Register a state-change listener. Returns a handle for
    /// [`NavigationController::unsubscribe`].
    pub fn subscribe(&mut self, listener: impl FnMut(NavEvent<'_>) + 'static) -> Subscription {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Remove a previously registered listener.
    pub fn unsubscribe(&mut self, sub: Subscription) {
        self.listeners.retain(|(id, _)| *id != sub.0);
    }

    /// Process a scroll tick at the given document offset.
    ///
    /// A section is a candidate when its `[top, top + height)` range
    /// contains `offset + activation_margin`; the last candidate in
    /// registry order wins, so overlapping or zero-gap boundaries
    /// resolve toward the section later in the page. With no candidate
    /// (above the first section or past the last) the active section is
    /// left unchanged. Subscribers are notified only on an actual
    /// change, so redundant ticks are free.
    ///
    /// Returns the (possibly unchanged) active section id.
    pub fn on_scroll(&mut self, offset: i32) -> &str {
        let probe = offset.max(0) + self.config.activation_margin;

        let mut hit = None;
        for (i, section) in self.registry.sections().iter().enumerate() {
            if section.contains(probe) {
                hit = Some(i);
            }
        }

        if let Some(i) = hit
            && i != self.active
        {
            self.active = i;
            let id = self.registry.sections()[i].id.as_str();
            log::debug!("active section -> {id}");
            for (_, listener) in self.listeners.iter_mut() {
                listener(NavEvent::ActiveChanged(id));
            }
        }

        &self.registry.sections()[self.active].id
    }

    /// Request navigation to a section by id.
    ///
    /// Closes the menu, then issues a single fire-and-forget scroll
    /// command targeting `top - nav_bar_height` (floored at 0) through
    /// the viewport. The active section is not written here; it updates
    /// through `on_scroll` as the animated scroll progresses.
    ///
    /// An id absent from the registry fails with
    /// [`FolioError::UnknownSection`] and changes nothing. A viewport
    /// that cannot execute the command (e.g. non-interactive rendering)
    /// is reported and otherwise ignored -- the menu still closes.
    pub fn request_navigate(&mut self, id: &str, viewport: &mut dyn Viewport) -> Result<()> {
        let idx = self
            .registry
            .index_of(id)
            .ok_or_else(|| FolioError::UnknownSection(id.to_string()))?;

        if self.menu_open {
            self.menu_open = false;
            for (_, listener) in self.listeners.iter_mut() {
                listener(NavEvent::MenuChanged(false));
            }
        }

        let top = self.registry.sections()[idx].top;
        let target = (top - self.config.nav_bar_height).max(0);
        if let Err(e) = viewport.scroll_to(target) {
            log::warn!("scroll command for '{id}' failed: {e}");
        }
        Ok(())
    }

    /// Flip the collapsible menu open/closed. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        let open = self.menu_open;
        for (_, listener) in self.listeners.iter_mut() {
            listener(NavEvent::MenuChanged(open));
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::registry::Section;

    /// Viewport that records every issued scroll command.
    struct TestViewport {
        commands: Vec<i32>,
    }

    impl TestViewport {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
            }
        }
    }

    impl Viewport for TestViewport {
        fn scroll_to(&mut self, offset: i32) -> Result<()> {
            self.commands.push(offset);
            Ok(())
        }

        fn scroll_offset(&self) -> i32 {
            self.commands.last().copied().unwrap_or(0)
        }
    }

    /// Viewport that rejects every command (non-interactive environment).
    struct BrokenViewport;

    impl Viewport for BrokenViewport {
        fn scroll_to(&mut self, _offset: i32) -> Result<()> {
            Err(FolioError::Backend("no viewport".into()))
        }

        fn scroll_offset(&self) -> i32 {
            0
        }
    }

    fn demo_controller() -> NavigationController {
        let registry = SectionRegistry::new(vec![
            Section::with_bounds("home", "Home", 0, 800),
            Section::with_bounds("about", "About", 800, 600),
            Section::with_bounds("contact", "Contact", 1400, 500),
        ]);
        NavigationController::new(registry, NavConfig::default()).unwrap()
    }

    #[test]
    fn initial_state() {
        let nav = demo_controller();
        assert_eq!(nav.active_section_id(), "home");
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn empty_registry_rejected() {
        let err = NavigationController::new(SectionRegistry::default(), NavConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, FolioError::Registry(_)));
    }

    #[test]
    fn scroll_activates_containing_section() {
        let mut nav = demo_controller();
        assert_eq!(nav.on_scroll(0), "home");
        // probe = 750 + 100 = 850, inside about's [800, 1400).
        assert_eq!(nav.on_scroll(750), "about");
    }

    #[test]
    fn scroll_past_all_sections_keeps_last_active() {
        let mut nav = demo_controller();
        nav.on_scroll(750);
        assert_eq!(nav.active_section_id(), "about");
        // Far past the document end: no candidate, state unchanged.
        assert_eq!(nav.on_scroll(100_000), "about");
    }

    #[test]
    fn scroll_above_first_section_keeps_state() {
        let registry = SectionRegistry::new(vec![
            Section::with_bounds("home", "Home", 500, 300),
            Section::with_bounds("about", "About", 800, 300),
        ]);
        let mut nav = NavigationController::new(registry, NavConfig::default()).unwrap();
        // probe = 100, above home's top of 500: no candidate.
        assert_eq!(nav.on_scroll(0), "home");
    }

    #[test]
    fn overlapping_sections_last_wins() {
        let registry = SectionRegistry::new(vec![
            Section::with_bounds("a", "A", 0, 1000),
            Section::with_bounds("b", "B", 400, 1000),
        ]);
        let mut nav = NavigationController::new(registry, NavConfig::default()).unwrap();
        // probe = 600 is inside both ranges; the later section wins.
        assert_eq!(nav.on_scroll(500), "b");
    }

    #[test]
    fn redundant_ticks_notify_once() {
        let mut nav = demo_controller();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        nav.subscribe(move |event| {
            if let NavEvent::ActiveChanged(id) = event {
                sink.borrow_mut().push(id.to_string());
            }
        });

        nav.on_scroll(750);
        nav.on_scroll(750);
        nav.on_scroll(750);

        assert_eq!(*changes.borrow(), vec!["about".to_string()]);
    }

    #[test]
    fn no_notification_without_change() {
        let mut nav = demo_controller();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        nav.subscribe(move |_| *sink.borrow_mut() += 1);

        // Already at home; probe stays inside home.
        nav.on_scroll(0);
        nav.on_scroll(10);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn navigate_targets_top_minus_bar_height() {
        let mut nav = demo_controller();
        let mut viewport = TestViewport::new();
        nav.request_navigate("about", &mut viewport).unwrap();
        // about.top = 800, bar height 80.
        assert_eq!(viewport.commands, vec![720]);
    }

    #[test]
    fn navigate_to_first_section_floors_at_zero() {
        let mut nav = demo_controller();
        let mut viewport = TestViewport::new();
        nav.request_navigate("home", &mut viewport).unwrap();
        assert_eq!(viewport.commands, vec![0]);
    }

    #[test]
    fn navigate_closes_menu() {
        let mut nav = demo_controller();
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        let mut viewport = TestViewport::new();
        nav.request_navigate("contact", &mut viewport).unwrap();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn navigate_with_closed_menu_stays_closed() {
        let mut nav = demo_controller();
        let mut viewport = TestViewport::new();
        nav.request_navigate("contact", &mut viewport).unwrap();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn navigate_does_not_set_active() {
        let mut nav = demo_controller();
        let mut viewport = TestViewport::new();
        nav.request_navigate("contact", &mut viewport).unwrap();
        // Active only moves once scroll ticks arrive.
        assert_eq!(nav.active_section_id(), "home");
        nav.on_scroll(viewport.scroll_offset());
        assert_eq!(nav.active_section_id(), "contact");
    }

    #[test]
    fn navigate_unknown_id_fails_without_side_effects() {
        let mut nav = demo_controller();
        nav.toggle_menu();
        let mut viewport = TestViewport::new();

        let err = nav.request_navigate("blog", &mut viewport).unwrap_err();
        assert!(matches!(err, FolioError::UnknownSection(id) if id == "blog"));
        assert!(viewport.commands.is_empty());
        assert_eq!(nav.active_section_id(), "home");
        // Menu state untouched by the failed request.
        assert!(nav.is_menu_open());
    }

    #[test]
    fn navigate_with_broken_viewport_still_closes_menu() {
        let mut nav = demo_controller();
        nav.toggle_menu();
        let mut viewport = BrokenViewport;

        // Degrades to a no-op scroll; not an error for the caller.
        nav.request_navigate("about", &mut viewport).unwrap();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn toggle_menu_round_trip() {
        let mut nav = demo_controller();
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn menu_events_delivered() {
        let mut nav = demo_controller();
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&states);
        nav.subscribe(move |event| {
            if let NavEvent::MenuChanged(open) = event {
                sink.borrow_mut().push(open);
            }
        });

        nav.toggle_menu();
        let mut viewport = TestViewport::new();
        nav.request_navigate("about", &mut viewport).unwrap();
        assert_eq!(*states.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut nav = demo_controller();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = nav.subscribe(move |_| *sink.borrow_mut() += 1);

        nav.toggle_menu();
        assert_eq!(*count.borrow(), 1);

        nav.unsubscribe(sub);
        nav.toggle_menu();
        nav.on_scroll(750);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn custom_margins_respected() {
        let registry = SectionRegistry::new(vec![
            Section::with_bounds("home", "Home", 0, 400),
            Section::with_bounds("about", "About", 400, 400),
        ]);
        let config = NavConfig {
            activation_margin: 0,
            nav_bar_height: 50,
        };
        let mut nav = NavigationController::new(registry, config).unwrap();

        // Without lookahead, offset 399 is still home.
        assert_eq!(nav.on_scroll(399), "home");
        assert_eq!(nav.on_scroll(400), "about");

        let mut viewport = TestViewport::new();
        nav.request_navigate("about", &mut viewport).unwrap();
        assert_eq!(viewport.commands, vec![350]);
    }

    #[test]
    fn geometry_update_changes_spy_result() {
        let mut nav = demo_controller();
        nav.on_scroll(750);
        assert_eq!(nav.active_section_id(), "about");

        // Simulated reflow pushes about further down the page.
        nav.registry_mut().set_bounds("about", 2000, 600).unwrap();
        // probe = 850 now falls in no section: unchanged.
        assert_eq!(nav.on_scroll(750), "about");
        assert_eq!(nav.on_scroll(1950), "about");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        /// Gapless registries: consecutive sections with random heights.
        fn arb_gapless(min: usize, max: usize) -> impl Strategy<Value = SectionRegistry> {
            proptest::collection::vec(100u32..2000, min..max).prop_map(|heights| {
                let mut top = 0i32;
                let sections = heights
                    .into_iter()
                    .enumerate()
                    .map(|(i, h)| {
                        let s = Section::with_bounds(format!("s{i}"), format!("S{i}"), top, h);
                        top += h as i32;
                        s
                    })
                    .collect();
                SectionRegistry::new(sections)
            })
        }

        proptest! {
            #[test]
            fn active_matches_containing_range(
                reg in arb_gapless(1, 12),
                offset in 0i32..30_000,
            ) {
                let config = NavConfig::default();
                let probe = offset + config.activation_margin;
                let expected: Option<String> = reg
                    .sections()
                    .iter()
                    .find(|s| s.contains(probe))
                    .map(|s| s.id.clone());

                let mut nav = NavigationController::new(reg, config).unwrap();
                let active = nav.on_scroll(offset).to_string();

                match expected {
                    // Non-overlapping ranges: the unique containing
                    // section must win.
                    Some(id) => prop_assert_eq!(active, id),
                    // Past the end: initial state is preserved.
                    None => prop_assert_eq!(active, "s0"),
                }
            }

            #[test]
            fn double_tick_is_idempotent(
                reg in arb_gapless(1, 12),
                offset in 0i32..30_000,
            ) {
                let mut nav = NavigationController::new(reg, NavConfig::default()).unwrap();
                let first = nav.on_scroll(offset).to_string();
                let second = nav.on_scroll(offset).to_string();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn navigate_always_leaves_menu_closed(
                reg in arb_gapless(1, 12),
                toggles in 0usize..4,
                target in 0usize..12,
            ) {
                let ids: Vec<String> =
                    reg.sections().iter().map(|s| s.id.clone()).collect();
                let mut nav = NavigationController::new(reg, NavConfig::default()).unwrap();
                for _ in 0..toggles {
                    nav.toggle_menu();
                }
                let id = &ids[target % ids.len()];
                let mut viewport = TestViewport::new();
                nav.request_navigate(id, &mut viewport).unwrap();
                prop_assert!(!nav.is_menu_open());
                prop_assert_eq!(viewport.commands.len(), 1);
            }

            #[test]
            fn active_is_always_registered(
                reg in arb_gapless(1, 12),
                offsets in proptest::collection::vec(0i32..40_000, 1..30),
            ) {
                let ids: Vec<String> =
                    reg.sections().iter().map(|s| s.id.clone()).collect();
                let mut nav = NavigationController::new(reg, NavConfig::default()).unwrap();
                for offset in offsets {
                    let active = nav.on_scroll(offset).to_string();
                    prop_assert!(ids.contains(&active));
                }
            }
        }
    }
}
