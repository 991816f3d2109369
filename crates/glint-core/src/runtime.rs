use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::{Rect, Scene, Size, View, semantics::Role};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
pub struct Composer {
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Key-based remember.
///
/// The slot lives until the mount is torn down (`Scheduler::unmount` or
/// `clear_slots`), independent of whether the caller composes every frame.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        match c.keyed_slots.get(&key) {
            Some(slot) => match slot.downcast_ref::<Rc<T>>() {
                Some(rc) => Some(rc.clone()),
                None => {
                    log::warn!(
                        "remember_with_key: key '{}' reused with a different type; replacing.",
                        key
                    );
                    None
                }
            },
            None => None,
        }
    });
    if let Some(rc) = existing {
        return rc;
    }

    // `init` runs without the composer borrowed so it may remember other keys.
    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        c.borrow_mut()
            .keyed_slots
            .insert(key, Box::new(rc.clone()))
    });
    rc
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Drop every remembered slot on this thread.
pub fn clear_slots() {
    // Take the map out first: dropping slot values may run arbitrary Drop code.
    let slots = COMPOSER.with(|c| std::mem::take(&mut c.borrow_mut().keyed_slots));
    drop(slots);
}

pub fn slot_count() -> usize {
    COMPOSER.with(|c| c.borrow().keyed_slots.len())
}

/// Frame: output of composition for a tick: scene + layout metadata.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    /// Page-space rects of every tagged view, in tree order.
    pub tagged: Vec<TaggedRect>,
    /// Laid-out size of the whole page (may exceed the viewport).
    pub content_size: Size,
}

impl Frame {
    pub fn rect_of(&self, tag: &str) -> Option<Rect> {
        self.tagged.iter().find(|t| t.tag == tag).map(|t| t.rect)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tagged.iter().any(|t| t.tag == tag)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaggedRect {
    pub tag: String,
    pub rect: Rect,
}

/// Pointer target produced by layout: links and hoverable views.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub id: u64,
    pub rect: Rect,
    pub tag: Option<String>,
    /// Set for links; activating the region navigates here.
    pub href: Option<String>,
    pub hoverable: bool,
    pub z_index: f32,
}

/// Flattened semantics node produced by `layout_and_paint`.
///
/// This is the source of truth for accessibility backends: it contains the
/// resolved page rect, role and label.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub rect: Rect,
}

/// Drives composition for one mounted root.
///
/// The first `compose` after construction (or after `unmount`) creates the
/// mount scope; effects registered while composing attach to it and are
/// disposed on `unmount`.
pub struct Scheduler {
    next_id: u64,
    pub size: (u32, u32),
    scope: Option<Scope>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            size: (1280, 800),
            scope: None,
        }
    }

    pub fn id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        layout_paint: impl FnOnce(&View, (u32, u32)) -> Frame,
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let scope = match &self.scope {
            Some(s) => s.clone(),
            None => {
                log::debug!("mounting root scope");
                let s = Scope::new();
                self.scope = Some(s.clone());
                s
            }
        };
        let root = scope.run(|| build_root(self));
        layout_paint(&root, self.size)
    }

    /// Dispose the mount scope and forget remembered state.
    pub fn unmount(&mut self) {
        if let Some(scope) = self.scope.take() {
            log::debug!("unmounting root scope");
            scope.dispose();
        }
        clear_slots();
    }
}
