use glint_core::*;
use glint_ui::*;

use super::{ButtonStyle, CtaButton, FADE_DISTANCE, secs};
use crate::config::SiteConfig;
use crate::content::CoreValue;
use crate::content::company::{ABOUT, HEADING, HEADING_ACCENT, LEARN_MORE, VALUES, VALUES_HEADING};
use crate::icons::{Glyph, GlyphIcon};

pub const TAG: &str = "company";
pub const HEADER_TAG: &str = "company.header";
pub const VALUES_TAG: &str = "company.values";

const BAR_WIDTH: f32 = 96.0;
const HOVER_LIFT: f32 = 8.0;

#[derive(Clone, Debug)]
pub struct CompanyReveals {
    pub header: Latch,
    /// Follows `header` after the configured delay.
    pub body: Latch,
    /// All three value cards reveal together on this latch.
    pub values: Latch,
}

pub fn use_company_reveals(cfg: &SiteConfig) -> CompanyReveals {
    let header = use_in_view(HEADER_TAG, cfg.thresholds.company_header);
    let body = use_delayed("company.body", &header, cfg.timings.company_body());
    let values = use_in_view(VALUES_TAG, cfg.thresholds.company_values);
    CompanyReveals {
        header,
        body,
        values,
    }
}

pub fn CompanyOverview(cfg: &SiteConfig) -> View {
    let reveals = use_company_reveals(cfg);
    company_view(cfg, &reveals)
}

pub fn value_card_tag(i: usize) -> String {
    format!("company.value.{i}")
}

fn ValueCard(i: usize, value: &CoreValue) -> View {
    let t = theme();
    let tag = value_card_tag(i);
    let card = Column(
        Modifier::new()
            .tag(tag.clone())
            .hoverable()
            .padding(20.0)
            .background(t.primary_800)
            .border(1.0, t.tertiary_600, 24.0)
            .clip_rounded(24.0),
    )
    .child((
        Box(Modifier::new()
            .size(40.0, 40.0)
            .clip_rounded(20.0)
            .background(t.secondary_600)
            .center()
            .margin_vertical(0.0, 12.0))
        .child(GlyphIcon(value.icon, 20.0, t.primary_100)),
        Text(value.title)
            .size(18.0)
            .color(t.primary_100)
            .modifier(Modifier::new().margin_vertical(0.0, 8.0))
            .semantics(Semantics::new(Role::Heading { level: 3 }).label(value.title)),
        Text(value.description).color(t.primary_100).wrap(),
    ));
    HoverLift(&tag, HOVER_LIFT, card)
}

pub fn company_view(cfg: &SiteConfig, reveals: &CompanyReveals) -> View {
    let t = theme();
    let wide = super::is_wide();
    let fade_up = AnimationSpec::reveal();
    let columns = if wide { 3 } else { 1 };

    let accent_bar = Box(Modifier::new()
        .size(BAR_WIDTH, 4.0)
        .background(t.tertiary_500)
        .clip()
        .margin_vertical(24.0, 32.0))
    .child(Reveal(
        "company.bar",
        reveals.header.is_set(),
        EnterTransition::SlideInLeft(BAR_WIDTH),
        AnimationSpec::tween(secs(1.0), Easing::EaseInOut),
        Box(Modifier::new().fill_parent().background(t.secondary_600)),
    ));

    let header = Reveal(
        HEADER_TAG,
        reveals.header.is_set(),
        EnterTransition::FadeInUp(FADE_DISTANCE),
        fade_up,
        Column(
            Modifier::new()
                .tag(HEADER_TAG)
                .align_items(AlignItems::Center)
                .margin_vertical(0.0, 40.0),
        )
        .child((
            super::Heading(1, HEADING, HEADING_ACCENT, if wide { 60.0 } else { 36.0 }),
            accent_bar,
        )),
    );

    let body = Reveal(
        "company.body",
        reveals.body.is_set(),
        EnterTransition::FadeInUp(FADE_DISTANCE),
        fade_up,
        Column(
            Modifier::new()
                .fill_max_width()
                .max_width(768.0)
                .margin_auto_x()
                .margin_vertical(0.0, 48.0),
        )
        .child(
            Text(ABOUT)
                .size(if wide { 24.0 } else { 20.0 })
                .color(t.primary_100)
                .wrap(),
        ),
    );

    let cards: Vec<View> = VALUES
        .iter()
        .enumerate()
        .map(|(i, v)| ValueCard(i, v))
        .collect();

    let values = Reveal(
        VALUES_TAG,
        reveals.values.is_set(),
        EnterTransition::FadeInUp(FADE_DISTANCE),
        fade_up,
        Column(
            Modifier::new()
                .tag(VALUES_TAG)
                .fill_max_width()
                .margin_vertical(0.0, 48.0),
        )
        .child((
            Text(VALUES_HEADING)
                .size(if wide { 30.0 } else { 24.0 })
                .color(t.secondary_600)
                .modifier(Modifier::new().margin_vertical(0.0, 24.0))
                .semantics(Semantics::new(Role::Heading { level: 2 }).label(VALUES_HEADING)),
            Grid(columns, Modifier::new().fill_max_width(), cards, 24.0, 24.0),
        )),
    );

    let learn_more = Row(Modifier::new()
        .justify_content(JustifyContent::Center)
        .margin_vertical(48.0, 0.0))
    .child(CtaButton(
        &LEARN_MORE,
        &cfg.routes,
        Glyph::AccountGroup,
        ButtonStyle {
            background: t.secondary_600,
            border: t.tertiary_600,
            radius: 999.0,
            text_size: 18.0,
        },
    ));

    Column(
        Modifier::new()
            .tag(TAG)
            .fill_max_width()
            .min_height(viewport().height)
            .padding_xy(if wide { 64.0 } else { 16.0 }, 32.0)
            .justify_content(JustifyContent::Center)
            .background_brush(LinearGradient::vertical(t.primary_700, t.primary_900))
            .semantics(Semantics::new(Role::Region).label(format!("{HEADING} {HEADING_ACCENT}"))),
    )
    .child(
        Column(
            Modifier::new()
                .fill_max_width()
                .max_width(1152.0)
                .margin_auto_x(),
        )
        .child((header, body, values, learn_more)),
    )
}
