//! The three landing page sections and the pieces they share.
//!
//! Each section is split into a `use_*_reveals` hook, which owns the
//! section's latches and timers, and a view function that turns a snapshot
//! of those latches into a tree. The sections share nothing at runtime.

pub mod company;
pub mod hero;
pub mod services;

use glint_core::*;
use glint_navigation::RouteTable;
use glint_ui::*;
use web_time::Duration;

use crate::content::CtaLink;
use crate::icons::{Glyph, GlyphIcon};

pub use company::{CompanyOverview, CompanyReveals, use_company_reveals};
pub use hero::{HeroBanner, HeroReveals, use_hero_reveals};
pub use services::{ServiceReveals, ServiceShowcase, use_service_reveals};

/// Width (dp) from which multi-column layouts kick in.
pub const WIDE_BREAKPOINT: f32 = 768.0;

pub(crate) fn is_wide() -> bool {
    viewport().width >= WIDE_BREAKPOINT
}

/// Fade-up distance for text blocks and cards.
pub(crate) const FADE_DISTANCE: f32 = 40.0;

pub(crate) fn secs(v: f32) -> Duration {
    Duration::from_secs_f32(v)
}

/// Two-line heading; the second line is in the accent color.
pub(crate) fn Heading(level: u8, line: &str, accent: &str, size: f32) -> View {
    let t = theme();
    Column(
        Modifier::new()
            .align_items(AlignItems::Center)
            .semantics(Semantics::new(Role::Heading { level }).label(format!("{line} {accent}"))),
    )
    .child((
        Text(line).size(size).color(t.primary_50),
        Text(accent).size(size).color(t.secondary_600),
    ))
}

#[derive(Clone, Copy)]
pub(crate) struct ButtonStyle {
    pub background: Color,
    pub border: Color,
    pub radius: f32,
    pub text_size: f32,
}

/// A link styled as a pill button with a leading glyph.
pub(crate) fn CtaButton(link: &CtaLink, routes: &RouteTable, glyph: Glyph, style: ButtonStyle) -> View {
    let t = theme();
    Link(
        routes.path(link.destination),
        Modifier::new()
            .tag(link.tag)
            .hoverable()
            .gap(8.0)
            .padding_xy(24.0, 12.0)
            .background(style.background)
            .border(1.0, style.border, style.radius)
            .clip_rounded(style.radius)
            .semantics(Semantics::new(Role::Link).label(link.aria_label)),
    )
    .child((
        GlyphIcon(glyph, 20.0, t.primary_100),
        Text(link.label).size(style.text_size).color(Color::WHITE),
    ))
}
