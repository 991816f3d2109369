use glint_core::*;
use glint_platform::HeadlessHost;
use glint_ui::*;
use web_time::Duration;

fn texts(frame: &Frame) -> Vec<String> {
    frame.scene.texts().map(|(t, _, _)| t.to_string()).collect()
}

/// One viewport of filler, then a 400px block that says "seen" once it has
/// been at least 30% visible.
fn below_the_fold(_s: &mut Scheduler) -> View {
    let seen = use_in_view("below", 0.3);
    Column(Modifier::new().fill_max_width()).child((
        Box(Modifier::new().height(800.0).tag("top")),
        Box(Modifier::new().height(400.0).tag("below"))
            .child(seen.is_set().then(|| Text("seen"))),
    ))
}

#[test]
fn nothing_below_the_fold_is_seen_at_mount() {
    let mut host = HeadlessHost::new((1280, 800), below_the_fold);
    let frame = host.frame();
    assert!(texts(frame).is_empty());
    assert_eq!(frame.content_size.height, 1200.0);
}

#[test]
fn scrolling_past_the_threshold_reveals_in_the_same_frame() {
    let mut host = HeadlessHost::new((1280, 800), below_the_fold);
    host.frame();

    // 100 of 400px visible: 25%.
    assert!(texts(host.scroll_to(100.0)).is_empty());
    // 200 of 400px: 50%.
    assert_eq!(texts(host.scroll_to(200.0)), vec!["seen"]);
}

#[test]
fn scrolling_back_never_hides_revealed_content() {
    let mut host = HeadlessHost::new((1280, 800), below_the_fold);
    host.scroll_to(400.0);
    assert_eq!(texts(host.scroll_to(0.0)), vec!["seen"]);
    assert_eq!(texts(host.scroll_to(400.0)), vec!["seen"]);
}

#[test]
fn scroll_is_clamped_to_the_page() {
    let mut host = HeadlessHost::new((1280, 800), below_the_fold);
    host.scroll_to(10_000.0);
    assert_eq!(host.scroll_y(), 400.0);
    host.scroll_by(-10_000.0);
    assert_eq!(host.scroll_y(), 0.0);
}

#[test]
fn scroll_to_tag_reports_unknown_tags() {
    let mut host = HeadlessHost::new((1280, 800), below_the_fold);
    assert!(host.scroll_to_tag("below").is_ok());
    assert!(host.scroll_to_tag("nowhere").is_err());
}

fn delayed_note(_s: &mut Scheduler) -> View {
    let entered = use_in_view("note", 0.3);
    let shown = use_delayed("note.body", &entered, Duration::from_millis(800));
    Column(Modifier::new().tag("note").height(200.0))
        .child(shown.is_set().then(|| Text("later")))
}

#[test]
fn advance_fires_timers_and_recomposes() {
    let mut host = HeadlessHost::new((1280, 800), delayed_note);
    host.frame();
    assert_eq!(host.pending_timers(), 1);

    assert!(texts(host.advance(Duration::from_millis(799))).is_empty());
    assert_eq!(texts(host.advance(Duration::from_millis(1))), vec!["later"]);
    assert_eq!(host.pending_timers(), 0);
    assert_eq!(host.elapsed(), Duration::from_millis(800));
}

#[test]
fn unmount_cancels_pending_reveals() {
    let mut host = HeadlessHost::new((1280, 800), delayed_note);
    host.frame();
    host.advance(Duration::from_millis(300));
    assert_eq!(host.pending_timers(), 1);

    host.unmount();
    assert!(!host.is_mounted());
    assert_eq!(host.pending_timers(), 0);
    assert!(host.last_frame().is_none());
}

#[test]
fn remount_starts_from_hidden_again() {
    let mut host = HeadlessHost::new((1280, 800), delayed_note);
    host.frame();
    host.settle(Duration::from_secs(5));
    assert_eq!(texts(host.frame()), vec!["later"]);

    host.unmount();
    assert!(texts(host.frame()).is_empty());
    assert_eq!(host.pending_timers(), 1);
}

#[test]
fn unsupported_observer_fails_open() {
    let mut host = HeadlessHost::new((1280, 800), below_the_fold)
        .with_observer(SharedObserver::new(UnsupportedObserver));
    assert_eq!(texts(host.frame()), vec!["seen"]);
}

#[test]
fn manual_observer_only_fires_on_demand() {
    let manual = ManualObserver::new();
    let mut host = HeadlessHost::new((1280, 800), below_the_fold)
        .with_observer(SharedObserver::new(manual.clone()));
    assert!(texts(host.scroll_to(400.0)).is_empty());

    assert_eq!(manual.enter("below"), 1);
    assert_eq!(texts(host.frame()), vec!["seen"]);
}

fn links(_s: &mut Scheduler) -> View {
    Row(Modifier::new().gap(10.0)).child((
        Link("/about", Modifier::new().tag("about").size(100.0, 40.0)).child(Text("About Us")),
        Link("/team", Modifier::new().tag("team").size(100.0, 40.0)).child(Text("Our Team")),
    ))
}

#[test]
fn click_activates_the_link_under_the_pointer() {
    let mut host = HeadlessHost::new((1280, 800), links);
    assert_eq!(host.click(Vec2 { x: 150.0, y: 20.0 }).as_deref(), Some("/team"));
    assert_eq!(host.click(Vec2 { x: 500.0, y: 500.0 }), None);
    assert_eq!(host.history().current(), "/team");
    assert_eq!(host.history().len(), 2);
}

#[test]
fn click_tag_resolves_href() {
    let mut host = HeadlessHost::new((1280, 800), links);
    assert_eq!(host.click_tag("about").ok().as_deref(), Some("/about"));
    assert!(host.click_tag("missing").is_err());
    assert_eq!(host.history().entries(), vec!["/".to_string(), "/about".to_string()]);
}

/// The root always spans the viewport, so the card sits in a row to keep its
/// own size.
fn hover_card(_s: &mut Scheduler) -> View {
    let label = if is_hovered("card") { "hot" } else { "cold" };
    Row(Modifier::new().fill_max_width()).child(
        Box(Modifier::new().tag("card").hoverable().size(200.0, 100.0)).child(Text(label)),
    )
}

#[test]
fn pointer_move_sets_the_hover_target() {
    let mut host = HeadlessHost::new((1280, 800), hover_card);
    assert_eq!(texts(host.frame()), vec!["cold"]);
    let card = host.last_frame().and_then(|f| f.rect_of("card")).expect("card laid out");
    assert_eq!((card.w, card.h), (200.0, 100.0));
    assert_eq!(texts(host.pointer_move(Vec2 { x: 50.0, y: 50.0 })), vec!["hot"]);
    assert_eq!(texts(host.pointer_move(Vec2 { x: 600.0, y: 50.0 })), vec!["cold"]);
    assert!(host.hover_tag("card").is_ok());
    assert_eq!(texts(host.pointer_leave()), vec!["cold"]);
}
