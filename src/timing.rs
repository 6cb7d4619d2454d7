//! Cancellable timers.
//!
//! Interactive components never block: the only deferred work in this crate
//! is a fixed delay (hover-card open/close, carousel autoplay). Each pending
//! delay must be cancelled on unmount or on a superseding state change so a
//! stale callback can never fire against state that has moved on.
//!
//! [`TimerQueue`] is a deterministic virtual-clock scheduler used by the
//! components and their tests; [`run_after`] and [`repeat_every`] are the
//! real-time async drivers.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

/// Cooperative cancellation flag shared between a scheduler and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Identifies one scheduled entry in a [`TimerQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

type TimerCallback = Box<dyn FnOnce(&mut TimerQueue)>;

struct TimerEntry {
    id: TimerId,
    due: Duration,
    callback: TimerCallback,
}

/// A deterministic, virtual-clock timer scheduler.
///
/// Callbacks receive the queue itself so they can reschedule (repeating
/// timers). Entries fire in due order; entries with equal deadlines fire in
/// scheduling order.
#[derive(Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The virtual clock's current reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn schedule(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut TimerQueue) + 'static,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            due: self.now + delay,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a pending entry. Returns false when the entry already fired
    /// or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Advances the virtual clock, firing every entry that comes due, in due
    /// order. Callbacks may schedule or cancel further entries.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;

        loop {
            let next = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.due <= target)
                .min_by_key(|(index, entry)| (entry.due, *index))
                .map(|(index, _)| index);

            let Some(index) = next else { break };

            let entry = self.entries.remove(index);
            self.now = entry.due;
            (entry.callback)(self);
        }

        self.now = target;
    }
}

/// Runs `f` after `delay` unless the token is cancelled first.
pub async fn run_after(delay: Duration, token: CancelToken, f: impl FnOnce()) {
    smol::Timer::after(delay).await;

    if !token.is_cancelled() {
        f();
    }
}

/// Runs `f` every `interval` until the token is cancelled.
pub async fn repeat_every(interval: Duration, token: CancelToken, mut f: impl FnMut()) {
    loop {
        smol::Timer::after(interval).await;

        if token.is_cancelled() {
            break;
        }

        f();
    }
}
