//! folio: a data-driven portfolio page, demoed headlessly.
//!
//! Loads a profile (TOML or JSON), assembles the page, and walks a
//! scripted visit through it: scrolling section by section, exercising
//! the navigation links, and reporting what each frame would draw.

mod app;
mod backend;
mod page;

use std::path::Path;

use anyhow::Context;
use env_logger::Env;
use folio_content::Profile;
use folio_core::controller::NavEvent;
use folio_types::input::UiEvent;
use folio_ui::Theme;

use crate::app::App;
use crate::backend::HeadlessBackend;

const DEFAULT_PROFILE: &str = include_str!("../assets/profile.toml");

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let profile = match std::env::args().nth(1) {
        Some(path) => Profile::load(Path::new(&path))
            .with_context(|| format!("failed to load profile from {path}"))?,
        None => Profile::from_toml_str(DEFAULT_PROFILE).context("bundled profile is invalid")?,
    };
    log::info!(
        "profile loaded: {} ({} sections)",
        profile.name,
        profile.nav.len()
    );

    let mut app = App::new(profile, Theme::light(), WIDTH, HEIGHT)?;
    app.controller_mut().subscribe(|event| match event {
        NavEvent::ActiveChanged(id) => log::info!("active section: {id}"),
        NavEvent::MenuChanged(open) => log::info!("menu open: {open}"),
    });

    let mut backend = HeadlessBackend::new();
    app.render(&mut backend)?;
    log::info!("initial frame: {} ops", backend.ops().len());

    // Scroll through the whole page a viewport at a time.
    let step = (HEIGHT / 2) as i32;
    loop {
        let before = app.scroll_offset();
        app.handle_event(UiEvent::Wheel { delta: step })?;
        if app.scroll_offset() == before {
            break;
        }
    }
    log::info!(
        "reached the bottom at offset {}, active: {}",
        app.scroll_offset(),
        app.controller().active_section_id()
    );

    // Jump back up through the bar.
    app.navigate("home")?;
    app.settle()?;
    log::info!(
        "navigated home, offset {}, active: {}",
        app.scroll_offset(),
        app.controller().active_section_id()
    );

    backend.reset();
    app.render(&mut backend)?;
    log::info!(
        "final frame: {} ops across {} frames",
        backend.ops().len(),
        backend.frames()
    );

    app.handle_event(UiEvent::Quit)?;
    Ok(())
}
