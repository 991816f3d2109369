use glint_core::*;
use glint_ui::*;

use super::{ButtonStyle, CtaButton, FADE_DISTANCE};
use crate::config::SiteConfig;
use crate::content::Service;
use crate::content::services::{EXPLORE, GRID_LABEL, HEADING, HEADING_ACCENT, INTRO, SERVICES};
use crate::icons::{Glyph, GlyphIcon, service_icon};

pub const TAG: &str = "services";
pub const HEADING_TAG: &str = "services.heading";
pub const GRID_TAG: &str = "services.grid";
pub const CTA_TAG: &str = "services.cta";

const CARD_HEIGHT: f32 = 480.0;

#[derive(Clone, Debug)]
pub struct ServiceReveals {
    pub heading: Latch,
    /// The grid scrolled into view. Cards are laid out before this.
    pub grid: Latch,
    /// Cards fade in from the left.
    pub cards: Latch,
    /// One per card icon, staggered from `grid`.
    pub icons: RevealFlags,
    /// The call-to-action block scrolled into view.
    pub cta_entered: Latch,
    pub cta: Latch,
}

pub fn use_service_reveals(cfg: &SiteConfig) -> ServiceReveals {
    let t = &cfg.timings;
    let heading = use_in_view(HEADING_TAG, cfg.thresholds.services_heading);
    let grid = use_in_view(GRID_TAG, cfg.thresholds.services_grid);
    let cards = use_delayed("services.cards", &grid, t.service_cards());
    let icons = use_reveal("services.icons", &grid, &t.service_icons(SERVICES.len()));
    let cta_entered = use_in_view(CTA_TAG, cfg.thresholds.services_cta);
    let cta = use_delayed("services.cta", &cta_entered, t.service_cta());
    ServiceReveals {
        heading,
        grid,
        cards,
        icons,
        cta_entered,
        cta,
    }
}

pub fn ServiceShowcase(cfg: &SiteConfig) -> View {
    let reveals = use_service_reveals(cfg);
    services_view(cfg, &reveals)
}

pub fn card_tag(i: usize) -> String {
    format!("services.card.{i}")
}

pub fn icon_tag(i: usize) -> String {
    format!("services.icon.{i}")
}

fn ServiceCard(i: usize, service: &Service, reveals: &ServiceReveals) -> View {
    let t = theme();
    let wide = super::is_wide();
    let spec = AnimationSpec::reveal();

    let icon = Reveal(
        icon_tag(i),
        reveals.icons.get(i),
        EnterTransition::FadeInUp(FADE_DISTANCE),
        spec,
        Row(Modifier::new()
            .tag(icon_tag(i))
            .justify_content(JustifyContent::Center)
            .margin_vertical(8.0, 0.0))
        .child(GlyphIcon(
            service_icon(service.catchphrase),
            40.0,
            t.secondary_500,
        )),
    );

    let card = Column(
        Modifier::new()
            .tag(card_tag(i))
            .height(CARD_HEIGHT)
            .padding(if wide { 32.0 } else { 24.0 })
            .background(t.primary_700)
            .border(1.0, t.tertiary_600, 24.0)
            .clip_rounded(24.0),
    )
    .child((
        Box(Modifier::new()
            .padding_xy(8.0, 2.0)
            .background(t.secondary_700)
            .clip_rounded(999.0)
            .margin_vertical(0.0, 16.0))
        .child(Text(service.catchphrase).size(14.0).color(t.primary_100)),
        Text(service.heading)
            .size(if wide { 30.0 } else { 24.0 })
            .color(t.primary_100)
            .modifier(Modifier::new().margin_vertical(0.0, 16.0))
            .semantics(Semantics::new(Role::Heading { level: 2 }).label(service.heading)),
        Text(service.description)
            .size(if wide { 16.0 } else { 20.0 })
            .color(t.primary_100)
            .wrap()
            .modifier(Modifier::new().flex_grow(1.0)),
        Box(Modifier::new()
            .fill_max_width()
            .height(1.0)
            .background(t.tertiary_600)
            .alpha(0.7)
            .margin_vertical(16.0, 16.0)),
        icon,
    ));

    Reveal(
        card_tag(i),
        reveals.cards.is_set(),
        EnterTransition::FadeInLeft(FADE_DISTANCE),
        spec,
        card,
    )
}

pub fn services_view(cfg: &SiteConfig, reveals: &ServiceReveals) -> View {
    let t = theme();
    let vp = viewport();
    let wide = super::is_wide();
    let spec = AnimationSpec::reveal();
    let columns = match vp.width {
        w if w >= 1024.0 => 3,
        w if w >= super::WIDE_BREAKPOINT => 2,
        _ => 1,
    };
    let gap = if wide { 32.0 } else { 24.0 };

    let heading = Reveal(
        HEADING_TAG,
        reveals.heading.is_set(),
        EnterTransition::FadeInUp(FADE_DISTANCE),
        spec,
        Column(
            Modifier::new()
                .tag(HEADING_TAG)
                .align_items(AlignItems::Center)
                .margin_vertical(32.0, if wide { 64.0 } else { 48.0 }),
        )
        .child((
            super::Heading(1, HEADING, HEADING_ACCENT, if wide { 60.0 } else { 36.0 }),
            Text(INTRO)
                .size(if wide { 24.0 } else { 20.0 })
                .color(t.primary_100)
                .wrap()
                .modifier(Modifier::new().max_width(672.0).margin_vertical(32.0, 0.0)),
        )),
    );

    let cards: Vec<View> = SERVICES
        .iter()
        .enumerate()
        .map(|(i, s)| ServiceCard(i, s, reveals))
        .collect();
    let grid = Grid(
        columns,
        Modifier::new()
            .tag(GRID_TAG)
            .fill_max_width()
            .semantics(Semantics::new(Role::Region).label(GRID_LABEL)),
        cards,
        gap,
        gap,
    );

    let cta = Reveal(
        CTA_TAG,
        reveals.cta.is_set(),
        EnterTransition::FadeInUp(FADE_DISTANCE),
        spec,
        Row(Modifier::new()
            .tag(CTA_TAG)
            .justify_content(JustifyContent::Center)
            .margin_vertical(if wide { 64.0 } else { 48.0 }, 0.0))
        .child(CtaButton(
            &EXPLORE,
            &cfg.routes,
            Glyph::Idea,
            ButtonStyle {
                background: t.secondary_600,
                border: t.tertiary_600,
                radius: 999.0,
                text_size: 18.0,
            },
        )),
    );

    Column(
        Modifier::new()
            .tag(TAG)
            .fill_max_width()
            .min_height(vp.height)
            .padding_xy(if wide { 64.0 } else { 16.0 }, 64.0)
            .background(t.primary_800)
            .semantics(Semantics::new(Role::Region).label(format!("{HEADING} {HEADING_ACCENT}"))),
    )
    .child(
        Column(
            Modifier::new()
                .fill_max_width()
                .max_width(1152.0)
                .min_height(vp.height)
                .margin_auto_x(),
        )
        .child((heading, grid, cta)),
    )
}
