use std::{cell::Cell, rc::Rc, time::Duration};

use crate::{
    SharedString,
    timing::{TimerId, TimerQueue},
};

pub const DEFAULT_OPEN_DELAY: Duration = Duration::from_millis(700);
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// A preview card shown after the pointer rests on its trigger.
///
/// Both transitions are delayed, and every pointer event cancels whichever
/// delay is pending: a leave during the open delay aborts the open, and a
/// re-enter during the close delay keeps the card up. Hovering the card
/// content counts as a re-enter, so moving from trigger to content does not
/// flicker.
pub struct HoverCard {
    id: SharedString,
    open_delay: Duration,
    close_delay: Duration,
    controlled: bool,
    open: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<TimerId>>>,
    on_open_change: Option<Rc<dyn Fn(&bool)>>,
}

impl HoverCard {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, None)
    }

    /// `open` picks controlled mode, exactly as for any other control host.
    /// A controlled card still runs the delays; the elapsed timer forwards
    /// the target state instead of applying it.
    pub fn resolve(id: impl Into<SharedString>, open: Option<bool>) -> Self {
        Self {
            id: id.into(),
            open_delay: DEFAULT_OPEN_DELAY,
            close_delay: DEFAULT_CLOSE_DELAY,
            controlled: open.is_some(),
            open: Rc::new(Cell::new(open.unwrap_or(false))),
            pending: Rc::new(Cell::new(None)),
            on_open_change: None,
        }
    }

    pub fn on_open_change(mut self, on_change: impl Fn(&bool) + 'static) -> Self {
        self.on_open_change = Some(Rc::new(on_change));
        self
    }

    pub fn open_delay(mut self, delay: Duration) -> Self {
        self.open_delay = delay;
        self
    }

    pub fn close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Pointer entered the trigger or the card content.
    pub fn pointer_enter(&mut self, queue: &mut TimerQueue) {
        self.cancel_pending(queue);

        if self.open.get() {
            return;
        }
        self.schedule_transition(queue, self.open_delay, true);
    }

    /// Pointer left both the trigger and the card content.
    pub fn pointer_leave(&mut self, queue: &mut TimerQueue) {
        self.cancel_pending(queue);

        if !self.open.get() {
            return;
        }
        self.schedule_transition(queue, self.close_delay, false);
    }

    /// Unmount: the card disappears and no stale delay may fire.
    pub fn dismiss(&mut self, queue: &mut TimerQueue) {
        self.cancel_pending(queue);

        if !self.controlled {
            self.open.set(false);
        } else if self.open.get()
            && let Some(on_open_change) = &self.on_open_change
        {
            (on_open_change)(&false);
        }
    }

    /// Controlled consumers push the new open state here.
    pub fn sync_open(&mut self, open: bool) {
        if self.controlled {
            self.open.set(open);
        }
    }

    fn schedule_transition(&mut self, queue: &mut TimerQueue, delay: Duration, target: bool) {
        let controlled = self.controlled;
        let open = self.open.clone();
        let pending = self.pending.clone();
        let on_open_change = self.on_open_change.clone();

        let id = queue.schedule(delay, move |_| {
            pending.set(None);
            if !controlled {
                open.set(target);
            }
            if let Some(on_open_change) = &on_open_change {
                (on_open_change)(&target);
            }
        });
        self.pending.set(Some(id));
    }

    fn cancel_pending(&mut self, queue: &mut TimerQueue) {
        if let Some(id) = self.pending.take() {
            queue.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> HoverCard {
        HoverCard::new("profile-card")
            .open_delay(Duration::from_millis(700))
            .close_delay(Duration::from_millis(300))
    }

    #[test]
    fn test_opens_after_the_full_delay() {
        let mut queue = TimerQueue::new();
        let mut card = card();

        card.pointer_enter(&mut queue);
        queue.advance(Duration::from_millis(699));
        assert!(!card.is_open(), "The card must wait out the full delay");

        queue.advance(Duration::from_millis(1));
        assert!(card.is_open());
        assert!(!card.has_pending_transition());
    }

    #[test]
    fn test_leave_during_open_delay_aborts() {
        let mut queue = TimerQueue::new();
        let mut card = card();

        card.pointer_enter(&mut queue);
        queue.advance(Duration::from_millis(300));
        card.pointer_leave(&mut queue);
        queue.advance(Duration::from_secs(10));

        assert!(!card.is_open(), "A pointer that left early must not open the card");
        assert_eq!(queue.pending(), 0, "The aborted delay must be cancelled, not left behind");
    }

    #[test]
    fn test_reenter_during_close_delay_keeps_the_card_up() {
        let mut queue = TimerQueue::new();
        let mut card = card();

        card.pointer_enter(&mut queue);
        queue.advance(Duration::from_millis(700));
        assert!(card.is_open());

        card.pointer_leave(&mut queue);
        queue.advance(Duration::from_millis(100));
        card.pointer_enter(&mut queue);
        queue.advance(Duration::from_secs(10));

        assert!(card.is_open(), "Moving from trigger to content must not close the card");
    }

    #[test]
    fn test_rapid_enter_leave_fires_nothing() {
        let mut queue = TimerQueue::new();
        let mut card = card();

        for _ in 0..10 {
            card.pointer_enter(&mut queue);
            card.pointer_leave(&mut queue);
        }
        queue.advance(Duration::from_secs(10));

        assert!(!card.is_open());
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_controlled_card_forwards_after_the_delay() {
        use std::cell::RefCell;

        let mut queue = TimerQueue::new();
        let forwarded = Rc::new(RefCell::new(Vec::new()));

        let sink = forwarded.clone();
        let mut card = HoverCard::resolve("profile-card", Some(false))
            .open_delay(Duration::from_millis(700))
            .close_delay(Duration::from_millis(300))
            .on_open_change(move |open| sink.borrow_mut().push(*open));

        card.pointer_enter(&mut queue);
        queue.advance(Duration::from_millis(700));
        assert!(!card.is_open(), "A controlled card is inert without the consumer");
        assert_eq!(*forwarded.borrow(), vec![true], "The elapsed delay forwards the target");

        card.sync_open(true);
        assert!(card.is_open());

        card.pointer_leave(&mut queue);
        queue.advance(Duration::from_millis(300));
        assert!(card.is_open(), "Closing waits for the consumer too");
        assert_eq!(*forwarded.borrow(), vec![true, false]);

        card.sync_open(false);
        assert!(!card.is_open());
    }

    #[test]
    fn test_dismiss_cancels_and_closes() {
        let mut queue = TimerQueue::new();
        let mut card = card();

        card.pointer_enter(&mut queue);
        queue.advance(Duration::from_millis(700));
        card.pointer_leave(&mut queue);

        card.dismiss(&mut queue);
        queue.advance(Duration::from_secs(10));

        assert!(!card.is_open());
        assert_eq!(queue.pending(), 0);
    }
}
