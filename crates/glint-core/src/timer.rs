//! Cancellable timers on the animation clock.
//!
//! The queue is thread-local and passive: nothing fires until the host calls
//! [`run_due`] (or [`advance_to`]) with the current time. This keeps timers on
//! the same clock as animations, so a headless host can step both together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::animation;

new_key_type! {
    pub struct TimerKey;
}

struct Entry {
    due: Instant,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimerQueue {
    entries: SlotMap<TimerKey, Entry>,
    next_seq: u64,
}

impl TimerQueue {
    fn next(&self) -> Option<(TimerKey, Instant)> {
        self.entries
            .iter()
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(k, e)| (k, e.due))
    }
}

thread_local! {
    static TIMERS: RefCell<TimerQueue> = RefCell::new(TimerQueue::default());
}

/// Handle to one scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    key: TimerKey,
}

impl TimerHandle {
    /// Cancel the timer; returns `false` if it already fired or was cancelled.
    pub fn cancel(&self) -> bool {
        TIMERS.with(|t| t.borrow_mut().entries.remove(self.key).is_some())
    }

    pub fn is_pending(&self) -> bool {
        TIMERS.with(|t| t.borrow().entries.contains_key(self.key))
    }
}

/// Schedule `f` to run `delay` after the current clock time.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> TimerHandle {
    let due = animation::now() + delay;
    TIMERS.with(|t| {
        let mut q = t.borrow_mut();
        let seq = q.next_seq;
        q.next_seq += 1;
        let key = q.entries.insert(Entry {
            due,
            seq,
            callback: Box::new(f),
        });
        log::trace!("timer {seq} scheduled in {}ms", delay.as_millis());
        TimerHandle { key }
    })
}

/// Due time of the earliest pending timer.
pub fn next_due() -> Option<Instant> {
    TIMERS.with(|t| t.borrow().next().map(|(_, due)| due))
}

pub fn pending_timers() -> usize {
    TIMERS.with(|t| t.borrow().entries.len())
}

/// Fire every timer due at or before `now`, earliest first (ties in
/// scheduling order). Callbacks may schedule or cancel other timers.
pub fn run_due(now: Instant) -> usize {
    let mut fired = 0;
    loop {
        let entry = TIMERS.with(|t| {
            let mut q = t.borrow_mut();
            match q.next() {
                Some((key, due)) if due <= now => q.entries.remove(key),
                _ => None,
            }
        });
        let Some(entry) = entry else { break };
        log::trace!("timer {} fired", entry.seq);
        (entry.callback)();
        fired += 1;
    }
    fired
}

/// Step `clock` to each pending due time up to `target`, firing timers as
/// their time comes, then leave the clock at `target`.
///
/// Callbacks observe `animation::now()` equal to their own due time, so
/// timers they schedule are offset from the right instant.
pub fn advance_to(clock: &animation::ManualClock, target: Instant) -> usize {
    let mut fired = 0;
    while let Some(due) = next_due() {
        if due > target {
            break;
        }
        clock.set(due);
        fired += run_due(due);
    }
    clock.set(target);
    fired
}

/// Drop every pending timer on this thread.
pub fn clear_timers() {
    TIMERS.with(|t| t.borrow_mut().entries.clear());
}

/// A set of timers that live and die together.
///
/// The owner cancels the group when it is torn down; after that the group
/// refuses new timers, so a late trigger cannot schedule updates against a
/// disposed owner.
#[derive(Clone, Default)]
pub struct TimerGroup {
    handles: Rc<RefCell<Vec<TimerHandle>>>,
    cancelled: Rc<Cell<bool>>,
}

impl TimerGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) -> Option<TimerHandle> {
        if self.cancelled.get() {
            log::debug!("TimerGroup::schedule after cancel; ignored");
            return None;
        }
        let handle = set_timeout(delay, f);
        let mut handles = self.handles.borrow_mut();
        handles.retain(TimerHandle::is_pending);
        handles.push(handle);
        Some(handle)
    }

    pub fn cancel_all(&self) -> usize {
        self.cancelled.set(true);
        let handles = std::mem::take(&mut *self.handles.borrow_mut());
        handles.iter().filter(|h| h.cancel()).count()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub fn pending(&self) -> usize {
        self.handles
            .borrow()
            .iter()
            .filter(|h| h.is_pending())
            .count()
    }
}

impl std::fmt::Debug for TimerGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGroup")
            .field("pending", &self.pending())
            .field("cancelled", &self.cancelled.get())
            .finish()
    }
}
