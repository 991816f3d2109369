//! Viewport-entry detection.
//!
//! Composables ask "tell me once when the view tagged `tag` is at least
//! `threshold` visible" through [`use_in_view`]. The host supplies the
//! capability as a [`SharedObserver`] composition local and feeds it the
//! laid-out rects after every frame. Without a capability, or when the
//! target cannot be measured, the answer is "visible now": content is never
//! hidden because detection failed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glint_core::*;
use slotmap::{SlotMap, new_key_type};

use crate::error::ObserveError;
use crate::reveal::Latch;

/// Callback fired once when a target enters the viewport.
pub type EnterCallback = Box<dyn FnOnce()>;

/// Capability to watch tagged views enter the viewport.
pub trait VisibilityObserver {
    /// Register a one-shot observation. Dropping the registration early is
    /// done by running the returned `Dispose`.
    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_enter: EnterCallback,
    ) -> Result<Dispose, ObserveError>;

    /// Evaluate registrations against a fresh layout. Returns how many fired.
    fn sync(&self, tagged: &[TaggedRect], viewport: Rect) -> usize;

    /// Registrations still waiting to fire.
    fn pending(&self) -> usize;
}

/// Observer handle passed down as a composition local.
#[derive(Clone)]
pub struct SharedObserver(pub Rc<dyn VisibilityObserver>);

impl SharedObserver {
    pub fn new(observer: impl VisibilityObserver + 'static) -> Self {
        Self(Rc::new(observer))
    }
}

impl std::ops::Deref for SharedObserver {
    type Target = dyn VisibilityObserver;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub fn with_observer<R>(observer: SharedObserver, f: impl FnOnce() -> R) -> R {
    provide_local(observer, f)
}

new_key_type! {
    struct ObservationKey;
}

struct Observation {
    target: String,
    threshold: f32,
    on_enter: EnterCallback,
}

#[derive(Default)]
struct Registry {
    entries: SlotMap<ObservationKey, Observation>,
}

type SharedRegistry = Rc<RefCell<Registry>>;

fn validate(target: &str, threshold: f32) -> Result<(), ObserveError> {
    if target.is_empty() {
        return Err(ObserveError::EmptyTarget);
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ObserveError::InvalidThreshold(threshold.to_string()));
    }
    Ok(())
}

fn register(
    registry: &SharedRegistry,
    target: &str,
    threshold: f32,
    on_enter: EnterCallback,
) -> Result<Dispose, ObserveError> {
    validate(target, threshold)?;
    let key = registry.borrow_mut().entries.insert(Observation {
        target: target.to_string(),
        threshold,
        on_enter,
    });
    log::debug!("observing '{target}' at threshold {threshold}");

    let weak: Weak<RefCell<Registry>> = Rc::downgrade(registry);
    Ok(Dispose::new(move || {
        if let Some(reg) = weak.upgrade() {
            reg.borrow_mut().entries.remove(key);
        }
    }))
}

/// Remove the registrations selected by `fire` and run their callbacks with
/// the registry unborrowed.
fn fire_where(registry: &SharedRegistry, mut fire: impl FnMut(&Observation) -> bool) -> usize {
    let fired: Vec<Observation> = {
        let mut reg = registry.borrow_mut();
        let keys: Vec<ObservationKey> = reg
            .entries
            .iter()
            .filter(|(_, o)| fire(o))
            .map(|(k, _)| k)
            .collect();
        keys.into_iter()
            .filter_map(|k| reg.entries.remove(k))
            .collect()
    };
    let n = fired.len();
    for o in fired {
        log::debug!("'{}' entered the viewport", o.target);
        (o.on_enter)();
    }
    n
}

/// Production observer: measures tagged rects from layout against the
/// viewport rect.
///
/// A target fires when its visible area fraction is positive and at least
/// its threshold. A target missing from the layout fires immediately.
#[derive(Clone, Default)]
pub struct LayoutObserver {
    registry: SharedRegistry,
}

impl LayoutObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisibilityObserver for LayoutObserver {
    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_enter: EnterCallback,
    ) -> Result<Dispose, ObserveError> {
        register(&self.registry, target, threshold, on_enter)
    }

    fn sync(&self, tagged: &[TaggedRect], viewport: Rect) -> usize {
        fire_where(&self.registry, |o| {
            match tagged.iter().find(|t| t.tag == o.target) {
                Some(t) => {
                    let fraction = t.rect.visible_fraction(&viewport);
                    fraction > 0.0 && fraction >= o.threshold
                }
                None => {
                    log::warn!("'{}' is not in the layout; treating as visible", o.target);
                    true
                }
            }
        })
    }

    fn pending(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// Test double: registrations fire only when told to.
#[derive(Clone, Default)]
pub struct ManualObserver {
    registry: SharedRegistry,
}

impl ManualObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire every registration waiting on `target`.
    pub fn enter(&self, target: &str) -> usize {
        fire_where(&self.registry, |o| o.target == target)
    }

    pub fn is_observing(&self, target: &str) -> bool {
        self.registry
            .borrow()
            .entries
            .values()
            .any(|o| o.target == target)
    }
}

impl VisibilityObserver for ManualObserver {
    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_enter: EnterCallback,
    ) -> Result<Dispose, ObserveError> {
        register(&self.registry, target, threshold, on_enter)
    }

    fn sync(&self, _tagged: &[TaggedRect], _viewport: Rect) -> usize {
        0
    }

    fn pending(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// A host without any way to measure visibility.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedObserver;

impl VisibilityObserver for UnsupportedObserver {
    fn observe(
        &self,
        _target: &str,
        _threshold: f32,
        _on_enter: EnterCallback,
    ) -> Result<Dispose, ObserveError> {
        Err(ObserveError::Unsupported)
    }

    fn sync(&self, _tagged: &[TaggedRect], _viewport: Rect) -> usize {
        0
    }

    fn pending(&self) -> usize {
        0
    }
}

/// Latch set the first time the view tagged `tag` is at least `threshold`
/// visible.
///
/// Registers once per mount; the registration is released with the mount
/// scope. If the observer cannot take the registration the latch is set
/// immediately.
pub fn use_in_view(tag: &str, threshold: f32) -> Latch {
    let tag = tag.to_string();
    let latch = remember_with_key(format!("in_view:{tag}"), move || {
        let latch = Latch::new();
        let observer = local::<SharedObserver>()
            .unwrap_or_else(|| SharedObserver::new(UnsupportedObserver));

        let l = latch.clone();
        effect(move || {
            let on_enter: EnterCallback = {
                let l = l.clone();
                Box::new(move || {
                    l.fire();
                })
            };
            match observer.observe(&tag, threshold, on_enter) {
                Ok(registration) => registration,
                Err(e) => {
                    log::warn!("cannot observe '{tag}' ({e}); showing it now");
                    l.fire();
                    Dispose::noop()
                }
            }
        });
        latch
    });
    (*latch).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(y: f32, h: f32) -> Rect {
        Rect {
            x: 0.0,
            y,
            w: 100.0,
            h,
        }
    }

    fn tagged(tag: &str, r: Rect) -> Vec<TaggedRect> {
        vec![TaggedRect {
            tag: tag.to_string(),
            rect: r,
        }]
    }

    #[test]
    fn layout_observer_fires_at_threshold_once() {
        let obs = LayoutObserver::new();
        let count = Rc::new(std::cell::Cell::new(0));
        let c = count.clone();
        let _d = obs
            .observe("grid", 0.3, Box::new(move || c.set(c.get() + 1)))
            .expect("registered");

        let viewport = rect(0.0, 100.0);
        // 20% visible: below threshold.
        assert_eq!(obs.sync(&tagged("grid", rect(80.0, 100.0)), viewport), 0);
        // 30% visible: fires.
        assert_eq!(obs.sync(&tagged("grid", rect(70.0, 100.0)), viewport), 1);
        // Out and back in again: nothing more.
        obs.sync(&tagged("grid", rect(500.0, 100.0)), viewport);
        obs.sync(&tagged("grid", rect(0.0, 100.0)), viewport);
        assert_eq!(count.get(), 1);
        assert_eq!(obs.pending(), 0);
    }

    #[test]
    fn zero_threshold_still_needs_some_overlap() {
        let obs = LayoutObserver::new();
        let fired = Rc::new(std::cell::Cell::new(false));
        let f = fired.clone();
        let _d = obs.observe("cta", 0.0, Box::new(move || f.set(true)));

        obs.sync(&tagged("cta", rect(150.0, 10.0)), rect(0.0, 100.0));
        assert!(!fired.get());
        obs.sync(&tagged("cta", rect(95.0, 10.0)), rect(0.0, 100.0));
        assert!(fired.get());
    }

    #[test]
    fn missing_target_fails_open() {
        let obs = LayoutObserver::new();
        let fired = Rc::new(std::cell::Cell::new(false));
        let f = fired.clone();
        let _d = obs.observe("ghost", 0.3, Box::new(move || f.set(true)));
        obs.sync(&[], rect(0.0, 100.0));
        assert!(fired.get());
    }

    #[test]
    fn dispose_releases_registration() {
        let obs = LayoutObserver::new();
        let d = obs
            .observe("hero", 0.3, Box::new(|| {}))
            .expect("registered");
        assert_eq!(obs.pending(), 1);
        d.run();
        assert_eq!(obs.pending(), 0);
    }

    #[test]
    fn invalid_registrations_are_rejected() {
        let obs = LayoutObserver::new();
        assert_eq!(
            obs.observe("", 0.3, Box::new(|| {})).err(),
            Some(ObserveError::EmptyTarget)
        );
        assert!(matches!(
            obs.observe("x", 1.5, Box::new(|| {})),
            Err(ObserveError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn use_in_view_without_capability_is_visible_at_mount() {
        clear_slots();
        let scope = Scope::new();
        let latch = scope.run(|| use_in_view("hero", 0.3));
        assert!(latch.is_set());
        scope.dispose();
    }

    #[test]
    fn use_in_view_with_empty_tag_fails_open() {
        clear_slots();
        let manual = ManualObserver::new();
        let scope = Scope::new();
        let latch = scope.run(|| {
            with_observer(SharedObserver::new(manual.clone()), || use_in_view("", 0.3))
        });
        assert!(latch.is_set());
        assert_eq!(manual.pending(), 0);
        scope.dispose();
    }

    #[test]
    fn use_in_view_registers_once_and_releases_on_dispose() {
        clear_slots();
        let manual = ManualObserver::new();
        let scope = Scope::new();
        let shared = SharedObserver::new(manual.clone());

        let latch = scope.run(|| with_observer(shared.clone(), || use_in_view("services.grid", 0.1)));
        scope.run(|| with_observer(shared.clone(), || use_in_view("services.grid", 0.1)));
        assert!(!latch.is_set());
        assert_eq!(manual.pending(), 1);

        assert_eq!(manual.enter("services.grid"), 1);
        assert!(latch.is_set());
        assert_eq!(manual.enter("services.grid"), 0);

        let late = scope.run(|| with_observer(shared.clone(), || use_in_view("services.cta", 0.1)));
        assert!(manual.is_observing("services.cta"));
        scope.dispose();
        assert_eq!(manual.pending(), 0);
        assert!(!late.is_set());
    }
}
