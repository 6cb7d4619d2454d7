use std::{cell::Cell, rc::Rc};

/// Reference-counted suppression of the document-level scroll container.
///
/// Every open modal overlay holds one [`ScrollLockGuard`]; scroll is
/// suppressed while at least one guard is alive and restored exactly once
/// when the last guard drops. Nested or sibling overlays therefore compose
/// without prematurely restoring scroll.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holds: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.holds.set(self.holds.get() + 1);
        ScrollLockGuard {
            holds: self.holds.clone(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holds.get() > 0
    }

    pub fn holds(&self) -> usize {
        self.holds.get()
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    holds: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holds.set(self.holds.get() - 1);
    }
}
