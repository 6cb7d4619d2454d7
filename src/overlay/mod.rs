//! Floating-content discipline shared by Dialog, Popover, DropdownMenu,
//! HoverCard and the command palette.
//!
//! An [`OverlayHost`] wraps an open/closed [`ControlHost`] and layers the
//! three side effects every overlay needs: a reference-counted scroll lock
//! (modal overlays only), focus restoration through a centralized
//! [`FocusMemory`], and a single unified dismissal path: escape, outside
//! interaction and explicit close buttons all funnel through
//! [`OverlayHost::dismiss`].

use std::{cell::RefCell, rc::Rc};

use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, SetRule},
};

mod scroll_lock;
pub use scroll_lock::*;

mod focus;
pub use focus::*;

/// Why an overlay was asked to close. Every reason takes the same code path;
/// the reason is recorded for observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    EscapeKey,
    OutsideInteraction,
    CloseRequested,
    Programmatic,
}

/// Document-level resources shared by every overlay in a window: the scroll
/// lock and the focus-restoration stack. Cheap to clone; clones alias the
/// same resources.
#[derive(Debug, Clone, Default)]
pub struct OverlayRoot {
    scroll_lock: ScrollLock,
    focus_memory: Rc<RefCell<FocusMemory>>,
}

impl OverlayRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn focus_memory(&self) -> &Rc<RefCell<FocusMemory>> {
        &self.focus_memory
    }
}

/// Open/closed state plus overlay side effects.
pub struct OverlayHost {
    open: ControlHost<SetRule>,
    modal: bool,
    root: OverlayRoot,
    guard: Option<ScrollLockGuard>,
    /// Trigger recorded at request time on controlled hosts, consumed when
    /// the consumer syncs the open state.
    pending_trigger: Option<SharedString>,
    remembered: bool,
    restored_focus: Option<SharedString>,
    last_dismiss: Option<DismissReason>,
}

impl OverlayHost {
    /// `external_open` selects controlled mode, exactly as for any other
    /// control host.
    pub fn new(root: &OverlayRoot, modal: bool, external_open: Option<bool>) -> Self {
        let open = ControlHost::resolve(SetRule, false, external_open);

        let mut host = Self {
            open,
            modal,
            root: root.clone(),
            guard: None,
            pending_trigger: None,
            remembered: false,
            restored_focus: None,
            last_dismiss: None,
        };

        // A host constructed already-open still owes its side effects.
        if *host.open.value() {
            host.on_opened(None);
        }

        host
    }

    pub fn is_open(&self) -> bool {
        *self.open.value()
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn is_controlled(&self) -> bool {
        self.open.is_controlled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.open.set_disabled(disabled);
    }

    pub fn set_on_open_change(&mut self, on_change: impl Fn(&bool) + 'static) {
        self.open.set_on_change(on_change);
    }

    /// Requests the overlay to open. `trigger` is the id of the part that
    /// should regain focus when the overlay later closes.
    pub fn request_open(&mut self, trigger: Option<&str>) -> ChangeOutcome {
        let outcome = self.open.request_change(true);

        match outcome {
            ChangeOutcome::Applied => self.on_opened(trigger.map(Into::into)),
            ChangeOutcome::Forwarded => self.pending_trigger = trigger.map(Into::into),
            ChangeOutcome::Ignored => {}
        }

        outcome
    }

    /// The unified dismissal path.
    pub fn dismiss(&mut self, reason: DismissReason) -> ChangeOutcome {
        let outcome = self.open.request_change(false);

        if !outcome.is_ignored() {
            self.last_dismiss = Some(reason);
        }

        if outcome.is_applied() {
            self.on_closed();
        }

        outcome
    }

    /// Escape keypress while open.
    pub fn handle_escape(&mut self) -> ChangeOutcome {
        if !self.is_open() {
            return ChangeOutcome::Ignored;
        }
        self.dismiss(DismissReason::EscapeKey)
    }

    /// Click or focus outside of the floating region while open.
    pub fn handle_outside_interaction(&mut self) -> ChangeOutcome {
        if !self.is_open() {
            return ChangeOutcome::Ignored;
        }
        self.dismiss(DismissReason::OutsideInteraction)
    }

    /// Controlled consumers push the new open state here; the side effects
    /// track the actual value transitions.
    pub fn sync_open(&mut self, open: bool) {
        let was_open = self.is_open();
        self.open.sync_external(open);

        match (was_open, self.is_open()) {
            (false, true) => {
                let trigger = self.pending_trigger.take();
                self.on_opened(trigger);
            }
            (true, false) => self.on_closed(),
            _ => {}
        }
    }

    /// The part that should regain focus after the most recent close.
    pub fn take_restored_focus(&mut self) -> Option<SharedString> {
        self.restored_focus.take()
    }

    pub fn last_dismiss(&self) -> Option<DismissReason> {
        self.last_dismiss
    }

    fn on_opened(&mut self, trigger: Option<SharedString>) {
        if self.modal {
            self.guard = Some(self.root.scroll_lock.acquire());
        }

        if let Some(trigger) = trigger {
            self.root.focus_memory.borrow_mut().remember(trigger);
            self.remembered = true;
        }
    }

    fn on_closed(&mut self) {
        self.guard = None;

        if self.remembered {
            self.restored_focus = self.root.focus_memory.borrow_mut().restore();
            self.remembered = false;
        }
    }
}
