//! Headless host.
//!
//! `HeadlessHost` owns everything a browser would own for a page: the clock,
//! the viewport and its scroll position, the pointer, link activation and
//! the visibility observer. Frames are composed on demand, so tests and the
//! preview binary can step a page through time deterministically.

mod common;

use std::rc::Rc;

use anyhow::{Context, bail};
use glint_core::timer;
use glint_core::*;
use glint_navigation::History;
use glint_ui::{LayoutObserver, SharedObserver, layout_and_paint, with_observer};
use web_time::{Duration, Instant};

use crate::common::{center, hit_index_by_tag, top_hit_index};

// Observers can fire, and the recomposed frame can register new targets that
// are already in view; bound how often one frame may chain like that.
const MAX_SYNC_PASSES: usize = 8;

/// Root composable signature.
pub type RootFn = Box<dyn FnMut(&mut Scheduler) -> View>;

pub struct HeadlessHost {
    root: RootFn,
    sched: Scheduler,
    clock: ManualClock,
    start: Instant,
    observer: SharedObserver,
    motion: MotionPreference,
    history: History,
    scroll_y: f32,
    hover: Option<String>,
    frame: Option<Frame>,
    frames_composed: u64,
    a11y: Box<dyn A11yBridge>,
}

impl HeadlessHost {
    /// A host with a `size` viewport (px) around `root`.
    ///
    /// Installs a manual clock on this thread; time only moves through
    /// [`HeadlessHost::advance`].
    pub fn new(size: (u32, u32), root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        let start = Instant::now();
        let clock = ManualClock::new(start);
        animation::set_clock(Rc::new(clock.clone()));
        let mut sched = Scheduler::new();
        sched.size = size;
        Self {
            root: Box::new(root),
            sched,
            clock,
            start,
            observer: SharedObserver::new(LayoutObserver::new()),
            motion: MotionPreference::Full,
            history: History::default(),
            scroll_y: 0.0,
            hover: None,
            frame: None,
            frames_composed: 0,
            a11y: Box::new(NoopA11y),
        }
    }

    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_a11y(mut self, bridge: impl A11yBridge + 'static) -> Self {
        self.a11y = Box::new(bridge);
        self
    }

    pub fn size(&self) -> (u32, u32) {
        self.sched.size
    }

    /// Visible part of the page, in page coordinates.
    pub fn viewport_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: self.scroll_y,
            w: self.sched.size.0 as f32,
            h: self.sched.size.1 as f32,
        }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    pub fn pending_timers(&self) -> usize {
        timer::pending_timers()
    }

    pub fn frames_composed(&self) -> u64 {
        self.frames_composed
    }

    pub fn is_mounted(&self) -> bool {
        self.sched.is_mounted()
    }

    /// Most recent frame, if any was composed since mount.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Compose a frame at the current time and scroll position.
    ///
    /// Due timers fire first; after layout the observer sees the new rects,
    /// and if anything entered the viewport the page is composed again.
    pub fn frame(&mut self) -> &Frame {
        let fired = timer::run_due(self.clock.now());
        if fired > 0 {
            log::trace!("{fired} timer(s) fired before frame");
        }

        for pass in 0..MAX_SYNC_PASSES {
            let frame = self.compose_once();
            let entered = self.observer.sync(&frame.tagged, self.viewport_rect());
            self.frame = Some(frame);
            if entered == 0 {
                break;
            }
            log::debug!("{entered} target(s) entered the viewport (pass {pass})");
        }

        let frame = self.frame.get_or_insert_with(Frame::default);
        self.a11y.publish_tree(&frame.semantics_nodes);
        frame
    }

    fn compose_once(&mut self) -> Frame {
        let viewport = Viewport {
            width: self.sched.size.0 as f32,
            height: self.sched.size.1 as f32,
        };
        let interactions = Interactions {
            hover: self.hover.clone(),
        };
        let observer = self.observer.clone();
        let motion = self.motion;
        let root = &mut self.root;

        self.frames_composed += 1;
        self.sched.compose(
            |s| {
                with_viewport(viewport, || {
                    with_motion(motion, || {
                        with_interactions(interactions.clone(), || {
                            with_observer(observer.clone(), || root(s))
                        })
                    })
                })
            },
            layout_and_paint,
        )
    }

    fn ensure_frame(&mut self) -> &Frame {
        if self.frame.is_none() {
            self.frame();
        }
        self.frame.get_or_insert_with(Frame::default)
    }

    /// Move the clock forward by `by`, composing a frame at every timer due
    /// time along the way and once more at the end.
    pub fn advance(&mut self, by: Duration) -> &Frame {
        let target = self.clock.now() + by;
        while let Some(due) = timer::next_due() {
            if due > target {
                break;
            }
            self.clock.set(due);
            timer::run_due(due);
            self.frame();
        }
        self.clock.set(target);
        self.frame()
    }

    /// Advance until no timers are pending, at most `limit` of clock time.
    pub fn settle(&mut self, limit: Duration) -> &Frame {
        let deadline = self.clock.now() + limit;
        while let Some(due) = timer::next_due() {
            if due > deadline {
                break;
            }
            let step = due.saturating_duration_since(self.clock.now());
            self.advance(step);
        }
        self.frame()
    }

    /// Largest scroll offset the current page allows.
    pub fn max_scroll(&mut self) -> f32 {
        let h = self.sched.size.1 as f32;
        let content = self.ensure_frame().content_size.height;
        (content - h).max(0.0)
    }

    pub fn scroll_to(&mut self, y: f32) -> &Frame {
        let max = self.max_scroll();
        self.scroll_y = y.clamp(0.0, max);
        log::debug!("scroll to {:.0}", self.scroll_y);
        self.frame()
    }

    pub fn scroll_by(&mut self, dy: f32) -> &Frame {
        let y = self.scroll_y + dy;
        self.scroll_to(y)
    }

    /// Scroll so the view tagged `tag` starts at the top of the viewport
    /// (as far as the page allows).
    pub fn scroll_to_tag(&mut self, tag: &str) -> anyhow::Result<&Frame> {
        let rect = self
            .ensure_frame()
            .rect_of(tag)
            .with_context(|| format!("no view tagged '{tag}' in the layout"))?;
        Ok(self.scroll_to(rect.y))
    }

    /// Pointer moved to `pos` (viewport coordinates).
    pub fn pointer_move(&mut self, pos: Vec2) -> &Frame {
        let page = Vec2 {
            x: pos.x,
            y: pos.y + self.scroll_y,
        };
        let hover = {
            let frame = self.ensure_frame();
            top_hit_index(frame, page, |h| h.hoverable)
                .and_then(|i| frame.hit_regions.get(i))
                .and_then(|h| h.tag.clone())
        };
        if hover != self.hover {
            log::trace!("hover {:?} -> {:?}", self.hover, hover);
            self.hover = hover;
        }
        self.frame()
    }

    pub fn pointer_leave(&mut self) -> &Frame {
        self.hover = None;
        self.frame()
    }

    /// Hover the view tagged `tag`.
    pub fn hover_tag(&mut self, tag: &str) -> anyhow::Result<&Frame> {
        let rect = self
            .ensure_frame()
            .rect_of(tag)
            .with_context(|| format!("no view tagged '{tag}' in the layout"))?;
        let c = center(rect);
        let scroll_y = self.scroll_y;
        Ok(self.pointer_move(Vec2 {
            x: c.x,
            y: c.y - scroll_y,
        }))
    }

    /// Click at `pos` (viewport coordinates). Returns the href of the link
    /// that was activated, if any.
    pub fn click(&mut self, pos: Vec2) -> Option<String> {
        let page = Vec2 {
            x: pos.x,
            y: pos.y + self.scroll_y,
        };
        let href = {
            let frame = self.ensure_frame();
            top_hit_index(frame, page, |h| h.href.is_some())
                .and_then(|i| frame.hit_regions.get(i))
                .and_then(|h| h.href.clone())
        };
        if let Some(href) = &href {
            self.history.push(href.clone());
        }
        href
    }

    /// Activate the link tagged `tag`.
    pub fn click_tag(&mut self, tag: &str) -> anyhow::Result<String> {
        let (href, rect) = {
            let frame = self.ensure_frame();
            let Some(i) = hit_index_by_tag(frame, tag) else {
                bail!("no link tagged '{tag}'");
            };
            let hit = &frame.hit_regions[i];
            match &hit.href {
                Some(href) => (href.clone(), hit.rect),
                None => bail!("view tagged '{tag}' is not a link"),
            }
        };
        log::debug!("activate '{tag}' at {:?}", center(rect));
        self.history.push(href.clone());
        Ok(href)
    }

    /// Tear the page down: the mount scope is disposed (cancelling timers
    /// and observer registrations) and remembered state is dropped.
    pub fn unmount(&mut self) {
        self.sched.unmount();
        self.frame = None;
        self.hover = None;
    }
}

impl Drop for HeadlessHost {
    fn drop(&mut self) {
        if self.sched.is_mounted() {
            self.unmount();
        }
        animation::reset_clock();
    }
}

/// Receives the semantics tree after every frame.
pub trait A11yBridge {
    fn publish_tree(&mut self, nodes: &[SemNode]);
}

struct NoopA11y;
impl A11yBridge for NoopA11y {
    fn publish_tree(&mut self, _nodes: &[SemNode]) {
        // no-op
    }
}

/// Logs each published tree at debug level.
pub struct LogA11y;
impl A11yBridge for LogA11y {
    fn publish_tree(&mut self, nodes: &[SemNode]) {
        log::debug!("a11y: publish {} nodes", nodes.len());
        for n in nodes.iter().filter(|n| n.role == Role::Link) {
            log::trace!("a11y link {:?} at {:?}", n.label, n.rect);
        }
    }
}
