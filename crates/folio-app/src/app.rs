//! Application state: wires the page layout, the navigation
//! controller, the animated document scroll, and the bar widget into
//! one event-driven state machine.

use folio_content::Profile;
use folio_core::controller::{NavConfig, NavigationController};
use folio_core::scroll::DocumentScroll;
use folio_types::backend::RenderBackend;
use folio_types::error::Result;
use folio_types::input::UiEvent;
use folio_ui::nav_bar::{NavAction, NavBar};
use folio_ui::Theme;

use crate::page::PageLayout;

/// Viewport width below which the bar collapses behind a menu button.
const COLLAPSE_BELOW: u32 = 768;

pub struct App {
    page: PageLayout,
    nav: NavigationController,
    scroll: DocumentScroll,
    bar: NavBar,
    viewport_h: u32,
    running: bool,
}

impl App {
    pub fn new(profile: Profile, theme: Theme, width: u32, height: u32) -> Result<Self> {
        let page = PageLayout::new(profile, theme, width);
        let registry = page.registry();
        let nav = NavigationController::new(registry, NavConfig::default())?;
        let scroll = DocumentScroll::new(page.content_height(), height);

        let links = page.profile().nav.iter().map(|e| e.label.clone()).collect();
        let mut bar = NavBar::new(page.profile().name.clone(), links);
        bar.collapsed = width < COLLAPSE_BELOW;
        bar.height = nav.config().nav_bar_height as u32;

        Ok(Self {
            page,
            nav,
            scroll,
            bar,
            viewport_h: height,
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn controller(&self) -> &NavigationController {
        &self.nav
    }

    pub fn controller_mut(&mut self) -> &mut NavigationController {
        &mut self.nav
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll.offset()
    }

    pub fn is_settled(&self) -> bool {
        !self.scroll.is_animating()
    }

    /// Navigate to a section by id, as if its link had been clicked.
    pub fn navigate(&mut self, id: &str) -> Result<()> {
        self.nav.request_navigate(id, &mut self.scroll)?;
        self.sync_bar();
        Ok(())
    }

    /// Feed one input event through the state machine.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Scroll { offset } => {
                self.scroll.jump_to(offset);
                self.nav.on_scroll(self.scroll.offset());
            },
            UiEvent::Wheel { delta } => {
                self.scroll.scroll_by(delta);
                self.nav.on_scroll(self.scroll.offset());
            },
            UiEvent::PointerClick { x, y } => {
                match self.bar.hit_test(x, y, self.page.width()) {
                    Some(NavAction::Navigate(i)) => {
                        let id = self.nav.registry().sections()[i].id.clone();
                        self.nav.request_navigate(&id, &mut self.scroll)?;
                    },
                    Some(NavAction::ToggleMenu) => {
                        self.nav.toggle_menu();
                    },
                    None => {},
                }
            },
            UiEvent::Resize { width, height } => {
                self.viewport_h = height;
                self.page.resize(width);
                self.page.sync_registry(self.nav.registry_mut())?;
                self.scroll.set_extent(self.page.content_height(), height);
                self.bar.collapsed = width < COLLAPSE_BELOW;
                if !self.bar.collapsed && self.nav.is_menu_open() {
                    self.nav.toggle_menu();
                }
                self.nav.on_scroll(self.scroll.offset());
            },
            UiEvent::Tick => {
                if self.scroll.tick() {
                    self.nav.on_scroll(self.scroll.offset());
                }
            },
            UiEvent::Quit => {
                self.running = false;
            },
        }
        self.sync_bar();
        Ok(())
    }

    /// Drive ticks until the scroll animation settles.
    pub fn settle(&mut self) -> Result<()> {
        while self.scroll.is_animating() {
            self.handle_event(UiEvent::Tick)?;
        }
        Ok(())
    }

    fn sync_bar(&mut self) {
        self.bar.active = self.nav.active_index();
        self.bar.menu_open = self.nav.is_menu_open();
    }

    /// Render one frame.
    pub fn render(&self, backend: &mut dyn RenderBackend) -> Result<()> {
        self.page.paint(backend, &self.bar, self.scroll.offset())
    }
}
