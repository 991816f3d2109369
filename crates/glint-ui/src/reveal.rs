//! One-shot latches and staggered reveal timers.
//!
//! A section reveals its content in steps: a trigger latch (usually "the
//! block scrolled into view") fires once, and each dependent latch follows
//! after a fixed offset from that moment.
//!
//! ```rust
//! use glint_ui::reveal::*;
//! use web_time::Duration;
//!
//! let trigger = Latch::new();
//! let icons = use_reveal("demo:icons", &trigger, &Stagger::linear(
//!     Duration::from_millis(600),
//!     Duration::from_millis(100),
//!     3,
//! ));
//! assert!(!icons.any());
//! trigger.fire();
//! assert_eq!(glint_core::timer::pending_timers(), 3);
//! ```

use std::cell::RefCell;

use glint_core::*;
use smallvec::SmallVec;
use web_time::Duration;

/// Boolean that goes from false to true at most once.
#[derive(Clone)]
pub struct Latch {
    state: Signal<bool>,
}

impl Latch {
    pub fn new() -> Self {
        Self {
            state: signal(false),
        }
    }

    /// Set the latch. Returns `false` if it was already set.
    pub fn fire(&self) -> bool {
        if self.state.get() {
            return false;
        }
        self.state.set(true);
        true
    }

    pub fn is_set(&self) -> bool {
        self.state.get()
    }

    /// Run `f` once the latch is set; immediately if it already is.
    pub fn on_fire(&self, f: impl FnOnce() + 'static) {
        if self.is_set() {
            f();
            return;
        }
        let pending = RefCell::new(Some(f));
        self.state.subscribe(move |set| {
            if *set && let Some(f) = pending.borrow_mut().take() {
                f();
            }
        });
    }
}

impl Default for Latch {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Latch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Latch").field(&self.is_set()).finish()
    }
}

/// Latches index-aligned with a list of content items.
#[derive(Clone, Debug, Default)]
pub struct RevealFlags {
    latches: SmallVec<[Latch; 4]>,
}

impl RevealFlags {
    pub fn new(len: usize) -> Self {
        Self {
            latches: (0..len).map(|_| Latch::new()).collect(),
        }
    }

    /// State of flag `i`; out-of-range indices read as not revealed.
    pub fn get(&self, i: usize) -> bool {
        self.latches.get(i).is_some_and(Latch::is_set)
    }

    pub fn latch(&self, i: usize) -> Option<&Latch> {
        self.latches.get(i)
    }

    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }

    pub fn any(&self) -> bool {
        self.latches.iter().any(Latch::is_set)
    }

    pub fn all(&self) -> bool {
        self.latches.iter().all(Latch::is_set)
    }

    pub fn snapshot(&self) -> Vec<bool> {
        self.latches.iter().map(Latch::is_set).collect()
    }
}

/// Per-item offsets from a common trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stagger {
    offsets: SmallVec<[Duration; 4]>,
}

impl Stagger {
    /// `base + i * step` for `i` in `0..count`.
    pub fn linear(base: Duration, step: Duration, count: usize) -> Self {
        Self {
            offsets: (0..count).map(|i| base + step * i as u32).collect(),
        }
    }

    pub fn offsets(offsets: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    pub fn single(delay: Duration) -> Self {
        Self::offsets([delay])
    }

    pub fn as_slice(&self) -> &[Duration] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Flags that flip at `T + offset_i`, where `T` is the moment `trigger`
/// fires.
///
/// Remembered under `key` for the lifetime of the mount. The timers belong to
/// a `TimerGroup` that the mount scope cancels on unmount, so a section torn
/// down mid-sequence never updates afterwards.
pub fn use_reveal(key: &str, trigger: &Latch, stagger: &Stagger) -> RevealFlags {
    let key = key.to_string();
    let trigger = trigger.clone();
    let stagger = stagger.clone();
    let flags = remember_with_key(format!("reveal:{key}"), move || {
        let flags = RevealFlags::new(stagger.len());
        let group = TimerGroup::new();

        let g = group.clone();
        let k = key.clone();
        effect(move || {
            on_unmount(move || {
                let cancelled = g.cancel_all();
                if cancelled > 0 {
                    log::debug!("reveal '{k}': cancelled {cancelled} pending timer(s)");
                }
            })
        });

        let f = flags.clone();
        trigger.on_fire(move || {
            log::debug!("reveal '{key}': triggered, scheduling {}", stagger.len());
            for (i, offset) in stagger.as_slice().iter().enumerate() {
                let Some(latch) = f.latch(i).cloned() else {
                    continue;
                };
                let k = key.clone();
                group.schedule(*offset, move || {
                    if latch.fire() {
                        log::debug!("reveal '{k}': flag {i} set");
                    }
                });
            }
        });
        flags
    });
    (*flags).clone()
}

/// A single latch that follows `trigger` after `delay`.
pub fn use_delayed(key: &str, trigger: &Latch, delay: Duration) -> Latch {
    use_reveal(key, trigger, &Stagger::single(delay))
        .latch(0)
        .cloned()
        .unwrap_or_default()
}
