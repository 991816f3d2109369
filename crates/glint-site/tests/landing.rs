use std::cell::RefCell;
use std::rc::Rc;

use glint_core::*;
use glint_navigation::Destination;
use glint_platform::HeadlessHost;
use glint_site::content::services::SERVICES;
use glint_site::sections::company::value_card_tag;
use glint_site::sections::services::{self, card_tag, services_view};
use glint_site::sections::*;
use glint_site::{LandingPage, SiteConfig};
use glint_ui::*;
use web_time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[derive(Clone)]
struct Probe {
    hero: HeroReveals,
    company: CompanyReveals,
    services: ServiceReveals,
}

type Slot<T> = Rc<RefCell<Option<T>>>;

/// Full page; the hooks are remembered by key, so calling them again after
/// `LandingPage` hands back the page's own latches.
fn page_host(cfg: SiteConfig, observer: SharedObserver) -> (HeadlessHost, Slot<Probe>) {
    let probe: Slot<Probe> = Rc::new(RefCell::new(None));
    let p = probe.clone();
    let size = cfg.viewport;
    let host = HeadlessHost::new(size, move |_| {
        let page = LandingPage(&cfg);
        *p.borrow_mut() = Some(Probe {
            hero: use_hero_reveals(&cfg),
            company: use_company_reveals(&cfg),
            services: use_service_reveals(&cfg),
        });
        page
    })
    .with_observer(observer);
    (host, probe)
}

fn latches(slot: &Slot<Probe>) -> Probe {
    slot.borrow().clone().expect("composed at least once")
}

fn services_host(manual: &ManualObserver) -> (HeadlessHost, Slot<ServiceReveals>) {
    let cfg = SiteConfig::default();
    let probe: Slot<ServiceReveals> = Rc::new(RefCell::new(None));
    let p = probe.clone();
    let host = HeadlessHost::new(cfg.viewport, move |_| {
        let reveals = use_service_reveals(&cfg);
        *p.borrow_mut() = Some(reveals.clone());
        services_view(&cfg, &reveals)
    })
    .with_observer(SharedObserver::new(manual.clone()));
    (host, probe)
}

fn labels(frame: &Frame) -> Vec<String> {
    frame
        .semantics_nodes
        .iter()
        .filter_map(|n| n.label.clone())
        .collect()
}

#[test]
fn service_showcase_timeline() {
    let manual = ManualObserver::new();
    let (mut host, probe) = services_host(&manual);

    // Cards are laid out with their text before anything is seen.
    let frame = host.frame();
    let text = labels(frame);
    for (i, s) in SERVICES.iter().enumerate() {
        assert!(frame.has_tag(&card_tag(i)));
        assert!(text.iter().any(|l| l == s.catchphrase));
        assert!(text.iter().any(|l| l == s.heading));
        assert!(text.iter().any(|l| l == s.description));
    }
    let r = probe.borrow().clone().expect("composed");
    assert!(!r.grid.is_set());
    assert!(!r.icons.any());
    assert_eq!(host.pending_timers(), 0);

    // Grid and call to action enter at t=0.
    assert_eq!(manual.enter(services::GRID_TAG), 1);
    assert_eq!(manual.enter(services::CTA_TAG), 1);
    host.frame();

    host.advance(ms(399));
    assert!(!r.cards.is_set());
    host.advance(ms(1));
    assert!(r.cards.is_set());

    host.advance(ms(199));
    assert_eq!(r.icons.snapshot(), vec![false, false, false]);
    host.advance(ms(1));
    assert_eq!(r.icons.snapshot(), vec![true, false, false]);
    host.advance(ms(100));
    assert_eq!(r.icons.snapshot(), vec![true, true, false]);
    assert!(!r.cta.is_set());
    host.advance(ms(100));
    assert_eq!(r.icons.snapshot(), vec![true, true, true]);
    assert!(r.cta.is_set());
    assert_eq!(host.elapsed(), ms(800));
    assert_eq!(host.pending_timers(), 0);

    // Heading was never seen, so it stays hidden.
    assert!(!r.heading.is_set());
}

#[test]
fn icons_wait_for_the_grid() {
    let manual = ManualObserver::new();
    let (mut host, probe) = services_host(&manual);
    host.frame();
    manual.enter(services::CTA_TAG);
    host.advance(Duration::from_secs(5));

    let r = probe.borrow().clone().expect("composed");
    assert!(r.cta.is_set());
    assert!(!r.cards.is_set());
    assert_eq!(r.icons.snapshot(), vec![false, false, false]);
}

#[test]
fn unmount_mid_sequence_freezes_the_old_mount() {
    let manual = ManualObserver::new();
    let (mut host, probe) = services_host(&manual);
    host.frame();
    manual.enter(services::GRID_TAG);
    host.advance(ms(650));

    let old = probe.borrow().clone().expect("composed");
    assert_eq!(old.icons.snapshot(), vec![true, false, false]);
    assert!(host.pending_timers() > 0);

    host.unmount();
    assert_eq!(host.pending_timers(), 0);
    assert_eq!(manual.pending(), 0);

    // Time keeps moving (and the page remounts); the old latches never move.
    host.advance(Duration::from_secs(2));
    assert_eq!(old.icons.snapshot(), vec![true, false, false]);
    assert!(!old.cta.is_set());

    // The fresh mount starts from scratch.
    let fresh = probe.borrow().clone().expect("remounted");
    assert!(!fresh.grid.is_set());
    assert!(!fresh.icons.any());
}

#[test]
fn hero_is_seen_at_mount_and_links_fly_in_order() {
    let (mut host, probe) = page_host(
        SiteConfig::default(),
        SharedObserver::new(LayoutObserver::new()),
    );
    let frame = host.frame();
    assert!(frame.has_tag("hero.content"));

    let p = latches(&probe);
    assert!(p.hero.visible.is_set());
    assert!(!p.company.header.is_set());
    assert!(!p.services.grid.is_set());

    host.advance(ms(200));
    assert!(p.hero.tagline.is_set());
    // About at 400, Team at 600, Services at 800.
    host.advance(ms(200));
    assert_eq!(p.hero.links.snapshot(), vec![true, false, false]);
    host.advance(ms(200));
    assert_eq!(p.hero.links.snapshot(), vec![true, false, true]);
    host.advance(ms(200));
    assert!(p.hero.links.all());
}

#[test]
fn hero_content_is_absent_until_seen() {
    let manual = ManualObserver::new();
    let (mut host, _probe) = page_host(SiteConfig::default(), SharedObserver::new(manual.clone()));
    assert!(!host.frame().has_tag("hero.content"));
    assert!(host.click_tag("hero.team").is_err());

    manual.enter("hero");
    assert!(host.frame().has_tag("hero.content"));
}

#[test]
fn scrolling_reveals_sections_once() {
    let (mut host, probe) = page_host(
        SiteConfig::default(),
        SharedObserver::new(LayoutObserver::new()),
    );
    host.frame();
    let p = latches(&probe);

    host.scroll_to_tag(company::HEADER_TAG).expect("tagged");
    assert!(p.company.header.is_set());
    assert!(!p.company.body.is_set());
    host.advance(ms(400));
    assert!(p.company.body.is_set());

    host.scroll_to_tag(services::GRID_TAG).expect("tagged");
    assert!(p.services.grid.is_set());
    host.settle(Duration::from_secs(3));
    assert!(p.services.icons.all());

    // Away and back: nothing is scheduled again and nothing reverts.
    host.scroll_to(0.0);
    host.scroll_to_tag(services::GRID_TAG).expect("tagged");
    assert_eq!(host.pending_timers(), 0);
    assert!(p.services.icons.all());
    assert!(p.company.header.is_set());
}

#[test]
fn everything_is_visible_without_an_observer() {
    let (mut host, probe) = page_host(
        SiteConfig::default(),
        SharedObserver::new(UnsupportedObserver),
    );
    host.frame();
    let p = latches(&probe);
    assert!(p.hero.visible.is_set());
    assert!(p.company.header.is_set());
    assert!(p.company.values.is_set());
    assert!(p.services.heading.is_set());
    assert!(p.services.grid.is_set());
    assert!(p.services.cta_entered.is_set());

    host.settle(Duration::from_secs(3));
    assert!(p.company.body.is_set());
    assert!(p.services.icons.all());
    assert!(p.services.cta.is_set());
}

#[test]
fn links_resolve_through_the_route_table() {
    let cfg = SiteConfig {
        routes: SiteConfig::default()
            .routes
            .with_path(Destination::Team, "/people"),
        ..SiteConfig::default()
    };
    let (mut host, _probe) = page_host(cfg, SharedObserver::new(LayoutObserver::new()));
    host.frame();

    assert_eq!(host.click_tag("hero.team").ok().as_deref(), Some("/people"));
    assert_eq!(host.click_tag("hero.about").ok().as_deref(), Some("/about"));
    assert_eq!(
        host.click_tag("services.explore").ok().as_deref(),
        Some("/services")
    );
    assert_eq!(host.history().current(), "/services");
}

#[test]
fn links_announce_their_labels() {
    let (mut host, _probe) = page_host(
        SiteConfig::default(),
        SharedObserver::new(LayoutObserver::new()),
    );
    let frame = host.frame();
    let links: Vec<String> = frame
        .semantics_nodes
        .iter()
        .filter(|n| n.role == Role::Link)
        .filter_map(|n| n.label.clone())
        .collect();
    for label in [
        "Learn more about our company",
        "Explore our services",
        "Meet our team",
        "Explore all our services",
    ] {
        assert!(links.iter().any(|l| l == label), "{label}");
    }
}

#[test]
fn value_cards_lift_on_hover() {
    let (mut host, _probe) = page_host(
        SiteConfig::default(),
        SharedObserver::new(UnsupportedObserver),
    );
    host.frame();
    host.settle(Duration::from_secs(3));
    let rect = |host: &HeadlessHost, i: usize| {
        host.last_frame()
            .and_then(|f| f.rect_of(&value_card_tag(i)))
            .expect("value card laid out")
    };
    let (a0, b0) = (rect(&host, 0), rect(&host, 1));

    host.hover_tag(&value_card_tag(0)).expect("tagged");
    host.advance(ms(600));
    assert!((rect(&host, 0).y - (a0.y - 8.0)).abs() < 0.01);
    assert_eq!(rect(&host, 1).y, b0.y);

    host.pointer_leave();
    host.advance(ms(600));
    assert!((rect(&host, 0).y - a0.y).abs() < 0.01);
}

#[test]
fn reduced_motion_reaches_full_opacity_quickly() {
    let header_alpha = |motion: MotionPreference| {
        let (host, _probe) = page_host(
            SiteConfig::default(),
            SharedObserver::new(LayoutObserver::new()),
        );
        let mut host = host.with_motion(motion);
        host.frame();
        host.scroll_to_tag(company::HEADER_TAG).expect("tagged");
        host.advance(ms(100));
        host.last_frame()
            .and_then(|f| f.scene.texts().find(|(t, _, _)| *t == "not your typical"))
            .map(|(_, _, color)| color.3)
            .unwrap_or(0)
    };
    assert_eq!(header_alpha(MotionPreference::Reduced), 255);
    assert!(header_alpha(MotionPreference::Full) < 255);
}

#[test]
fn narrow_viewport_stacks_service_cards() {
    let cfg = SiteConfig {
        viewport: (390, 844),
        ..SiteConfig::default()
    };
    let (mut host, _probe) = page_host(cfg, SharedObserver::new(UnsupportedObserver));
    let frame = host.frame();
    let r0 = frame.rect_of(&card_tag(0)).expect("card 0");
    let r1 = frame.rect_of(&card_tag(1)).expect("card 1");
    assert_eq!(r0.x, r1.x);
    assert!(r1.y > r0.y);
}
