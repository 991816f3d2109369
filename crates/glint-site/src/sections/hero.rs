use glint_core::*;
use glint_ui::*;

use super::{ButtonStyle, CtaButton, secs};
use crate::config::SiteConfig;
use crate::content::hero::{LINKS, SUBTITLE, TAGLINE, TITLE};
use crate::icons::Glyph;

pub const TAG: &str = "hero";

const MIN_HEIGHT: f32 = 600.0;
const FLY_DISTANCE: f32 = 20.0;

#[derive(Clone, Debug)]
pub struct HeroReveals {
    /// The banner has been seen; the content block exists from here on.
    pub visible: Latch,
    pub tagline: Latch,
    /// Index-aligned with `content::hero::LINKS`.
    pub links: RevealFlags,
}

pub fn use_hero_reveals(cfg: &SiteConfig) -> HeroReveals {
    let visible = use_in_view(TAG, cfg.thresholds.hero);
    let tagline = use_delayed("hero.tagline", &visible, cfg.timings.hero_tagline());
    let links = use_reveal("hero.links", &visible, &cfg.timings.hero_links());
    HeroReveals {
        visible,
        tagline,
        links,
    }
}

pub fn HeroBanner(cfg: &SiteConfig) -> View {
    let reveals = use_hero_reveals(cfg);
    hero_view(cfg, &reveals)
}

pub fn hero_view(cfg: &SiteConfig, reveals: &HeroReveals) -> View {
    let t = theme();
    let wide = super::is_wide();
    let height = viewport().height.max(MIN_HEIGHT);

    let backdrop = Box(Modifier::new()
        .fill_parent()
        .background_brush(LinearGradient::vertical(
            t.primary_900.mul_alpha(0.5),
            Color::BLACK.with_alpha(128),
        )));

    let content = reveals.visible.is_set().then(|| {
        let fly = AnimationSpec::tween(secs(1.0), Easing::EaseOut);
        let links: Vec<View> = LINKS
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let style = match i {
                    1 => ButtonStyle {
                        background: t.secondary_700,
                        border: t.tertiary_500,
                        radius: 24.0,
                        text_size: 24.0,
                    },
                    _ => ButtonStyle {
                        background: t.primary_800,
                        border: t.tertiary_900,
                        radius: 24.0,
                        text_size: 24.0,
                    },
                };
                Reveal(
                    link.tag,
                    reveals.links.get(i),
                    EnterTransition::FadeInUp(FLY_DISTANCE),
                    fly,
                    CtaButton(link, &cfg.routes, Glyph::Home, style),
                )
            })
            .collect();

        let link_row = if wide {
            Row(Modifier::new()
                .gap(16.0)
                .justify_content(JustifyContent::Center)
                .margin_vertical(24.0, 0.0))
        } else {
            Column(Modifier::new()
                .gap(16.0)
                .align_items(AlignItems::Center)
                .margin_vertical(24.0, 0.0))
        };

        Reveal(
            "hero.content",
            true,
            EnterTransition::FadeIn,
            AnimationSpec::tween(secs(0.8), Easing::EaseInOut),
            Column(
                Modifier::new()
                    .tag("hero.content")
                    .max_width(768.0)
                    .align_items(AlignItems::Center),
            )
            .child((
                super::Heading(1, TITLE, SUBTITLE, if wide { 72.0 } else { 36.0 }),
                Reveal(
                    "hero.tagline",
                    reveals.tagline.is_set(),
                    EnterTransition::FadeInUp(FLY_DISTANCE),
                    fly,
                    Text(TAGLINE)
                        .size(if wide { 30.0 } else { 18.0 })
                        .color(Color::WHITE)
                        .wrap()
                        .modifier(Modifier::new().margin_vertical(16.0, 0.0)),
                ),
                link_row.child(links),
            )),
        )
    });

    Box(Modifier::new()
        .tag(TAG)
        .fill_max_width()
        .height(height)
        .padding_xy(24.0, 0.0)
        .center()
        .semantics(Semantics::new(Role::Region).label(TITLE)))
    .child((backdrop, content))
}
