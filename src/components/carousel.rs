use std::{cell::Cell, rc::Rc, time::Duration};

use crate::{SharedString, timing::TimerQueue};

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Default)]
struct CarouselShared {
    index: Cell<usize>,
    len: Cell<usize>,
    playing: Cell<bool>,
    /// Bumped whenever autoplay (re)starts or stops, so a tick scheduled
    /// under an older generation falls through instead of advancing stale
    /// state.
    generation: Cell<u64>,
}

/// A slide strip with wrap-around navigation and optional autoplay.
///
/// Manual navigation while autoplaying restarts the interval, so the next
/// automatic advance is always a full interval after the last interaction.
pub struct Carousel {
    id: SharedString,
    interval: Duration,
    shared: Rc<CarouselShared>,
}

impl Carousel {
    pub fn new(id: impl Into<SharedString>, len: usize) -> Self {
        let shared = Rc::new(CarouselShared::default());
        shared.len.set(len);

        Self {
            id: id.into(),
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            shared,
        }
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.shared.len.get()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.len.get() == 0
    }

    pub fn index(&self) -> usize {
        self.shared.index.get()
    }

    pub fn is_playing(&self) -> bool {
        self.shared.playing.get()
    }

    pub fn next(&mut self, queue: &mut TimerQueue) {
        self.step(queue, step_forward);
    }

    pub fn prev(&mut self, queue: &mut TimerQueue) {
        self.step(queue, step_backward);
    }

    pub fn go_to(&mut self, queue: &mut TimerQueue, index: usize) {
        if index >= self.shared.len.get() || index == self.shared.index.get() {
            return;
        }
        self.shared.index.set(index);
        self.restart_if_playing(queue);
    }

    pub fn start_autoplay(&mut self, queue: &mut TimerQueue) {
        if self.shared.len.get() < 2 {
            return;
        }

        self.shared.playing.set(true);
        let generation = self.bump_generation();
        schedule_tick(self.shared.clone(), generation, self.interval, queue);
    }

    /// Pending ticks are invalidated rather than individually cancelled; a
    /// stale tick checks the generation and does nothing.
    pub fn stop_autoplay(&mut self) {
        self.shared.playing.set(false);
        self.bump_generation();
    }

    fn step(&mut self, queue: &mut TimerQueue, step: fn(usize, usize) -> usize) {
        let len = self.shared.len.get();
        if len == 0 {
            return;
        }

        self.shared.index.set(step(self.shared.index.get(), len));
        self.restart_if_playing(queue);
    }

    fn restart_if_playing(&mut self, queue: &mut TimerQueue) {
        if self.shared.playing.get() {
            let generation = self.bump_generation();
            schedule_tick(self.shared.clone(), generation, self.interval, queue);
        }
    }

    fn bump_generation(&self) -> u64 {
        let next = self.shared.generation.get() + 1;
        self.shared.generation.set(next);
        next
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.stop_autoplay();
    }
}

fn step_forward(index: usize, len: usize) -> usize {
    (index + 1) % len
}

fn step_backward(index: usize, len: usize) -> usize {
    if index == 0 { len - 1 } else { index - 1 }
}

fn schedule_tick(
    shared: Rc<CarouselShared>,
    generation: u64,
    interval: Duration,
    queue: &mut TimerQueue,
) {
    queue.schedule(interval, move |queue| {
        if shared.generation.get() != generation || !shared.playing.get() {
            return;
        }

        let len = shared.len.get();
        shared.index.set(step_forward(shared.index.get(), len));
        schedule_tick(shared, generation, interval, queue);
    });
}
