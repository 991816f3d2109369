//! Headless preview of the landing page.
//!
//! Mounts the page, scrolls through it the way a visitor would and logs
//! what becomes visible when. `RUST_LOG=debug` shows every observer
//! registration, timer and latch flip.
//!
//! Usage: `glint-preview [config.json]`

use std::collections::BTreeSet;

use anyhow::Context;
use glint_core::*;
use glint_platform::{HeadlessHost, LogA11y};
use glint_site::{DESCRIPTION, LandingPage, SiteConfig, TITLE};
use web_time::Duration;

const STEP: Duration = Duration::from_millis(250);
const SETTLE: Duration = Duration::from_secs(3);

fn painted_text(frame: &Frame) -> BTreeSet<String> {
    frame.scene.texts().map(|(t, _, _)| t.to_string()).collect()
}

fn report(host: &HeadlessHost, shown: &mut BTreeSet<String>) {
    let now = host.elapsed().as_millis();
    let scroll = host.scroll_y();
    let Some(frame) = host.last_frame() else {
        return;
    };
    for text in painted_text(frame).difference(shown) {
        log::info!("t={now:>5}ms scroll={scroll:>5.0}  {text}");
    }
    shown.extend(painted_text(frame));
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => SiteConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SiteConfig::default(),
    };
    log::info!("{TITLE} ({DESCRIPTION}) at {}x{}", cfg.viewport.0, cfg.viewport.1);

    let page_cfg = cfg.clone();
    let mut host =
        HeadlessHost::new(cfg.viewport, move |_| LandingPage(&page_cfg)).with_a11y(LogA11y);

    let height = host.frame().content_size.height;
    log::info!("page is {height:.0}px tall");
    let mut shown = BTreeSet::new();
    report(&host, &mut shown);

    // Scroll half a viewport at a time, pausing at each stop.
    let step_px = cfg.viewport.1 as f32 / 2.0;
    loop {
        for _ in 0..4 {
            host.advance(STEP);
            report(&host, &mut shown);
        }
        if host.scroll_y() >= host.max_scroll() {
            break;
        }
        host.scroll_by(step_px);
        report(&host, &mut shown);
    }
    host.settle(SETTLE);
    report(&host, &mut shown);

    let href = host.click_tag("services.explore")?;
    log::info!("clicked 'Explore Our Services' -> {href}");
    log::info!(
        "{} frames, {} timers left, history {:?}",
        host.frames_composed(),
        host.pending_timers(),
        host.history().entries()
    );

    host.unmount();
    Ok(())
}
