use crate::SharedString;

/// Confines keyboard focus to an ordered ring of focusable parts.
///
/// `next`/`prev` wrap at the ends (tab / shift-tab cycling). The trap does
/// not move real focus; it reports which part should receive it.
#[derive(Debug, Default)]
pub struct FocusTrap {
    order: Vec<SharedString>,
    active: Option<usize>,
}

impl FocusTrap {
    pub fn new<I, S>(order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn register(&mut self, id: impl Into<SharedString>) {
        let id = id.into();
        if !self.order.contains(&id) {
            self.order.push(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|entry| entry == id)
    }

    pub fn active(&self) -> Option<&SharedString> {
        self.active.map(|index| &self.order[index])
    }

    /// Moves focus to a specific part. Returns false for parts outside the
    /// trap.
    pub fn focus(&mut self, id: &str) -> bool {
        match self.order.iter().position(|entry| entry == id) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    /// Focuses the first part, the entry point when the trap activates.
    pub fn focus_first(&mut self) -> Option<&SharedString> {
        if self.order.is_empty() {
            self.active = None;
            return None;
        }

        self.active = Some(0);
        self.active()
    }

    /// Tab: advances with wrap-around.
    pub fn next(&mut self) -> Option<&SharedString> {
        if self.order.is_empty() {
            return None;
        }

        self.active = Some(match self.active {
            None => 0,
            Some(index) => (index + 1) % self.order.len(),
        });
        self.active()
    }

    /// Shift-tab: retreats with wrap-around.
    pub fn prev(&mut self) -> Option<&SharedString> {
        if self.order.is_empty() {
            return None;
        }

        self.active = Some(match self.active {
            None => self.order.len() - 1,
            Some(0) => self.order.len() - 1,
            Some(index) => index - 1,
        });
        self.active()
    }
}

/// Centralized focus restoration.
///
/// Overlays remember the triggering part on open and pop it on close, so
/// nested overlays restore focus in reverse order of opening.
#[derive(Debug, Default, Clone)]
pub struct FocusMemory {
    stack: Vec<SharedString>,
}

impl FocusMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, id: impl Into<SharedString>) {
        self.stack.push(id.into());
    }

    pub fn restore(&mut self) -> Option<SharedString> {
        self.stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        let mut trap = FocusTrap::new(["close", "confirm", "cancel"]);

        assert_eq!(trap.next().unwrap(), "close");
        assert_eq!(trap.next().unwrap(), "confirm");
        assert_eq!(trap.next().unwrap(), "cancel");
        assert_eq!(trap.next().unwrap(), "close", "Tab should wrap to the first part");
    }

    #[test]
    fn test_shift_tab_wraps_backwards() {
        let mut trap = FocusTrap::new(["a", "b"]);

        assert_eq!(trap.prev().unwrap(), "b", "Shift-tab from nothing should land on the last part");
        assert_eq!(trap.prev().unwrap(), "a");
        assert_eq!(trap.prev().unwrap(), "b", "Shift-tab should wrap to the last part");
    }

    #[test]
    fn test_focus_rejects_outsiders() {
        let mut trap = FocusTrap::new(["inside"]);
        assert!(trap.focus("inside"));
        assert!(!trap.focus("outside"), "Parts outside the trap must be rejected");
        assert_eq!(trap.active().unwrap(), "inside", "A rejected focus must not move the ring");
    }

    #[test]
    fn test_empty_trap_yields_nothing() {
        let mut trap = FocusTrap::default();
        assert_eq!(trap.next(), None);
        assert_eq!(trap.prev(), None);
        assert_eq!(trap.focus_first(), None);
    }

    #[test]
    fn test_register_deduplicates() {
        let mut trap = FocusTrap::default();
        trap.register("a");
        trap.register("a");
        trap.register("b");

        assert_eq!(trap.next().unwrap(), "a");
        assert_eq!(trap.next().unwrap(), "b");
        assert_eq!(trap.next().unwrap(), "a");
    }

    #[test]
    fn test_focus_memory_restores_in_reverse_order() {
        let mut memory = FocusMemory::new();
        memory.remember("outer-trigger");
        memory.remember("inner-trigger");

        assert_eq!(memory.restore().unwrap(), "inner-trigger");
        assert_eq!(memory.restore().unwrap(), "outer-trigger");
        assert_eq!(memory.restore(), None);
    }
}
