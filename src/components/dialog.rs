use crate::{
    SharedString,
    overlay::{DismissReason, FocusTrap, OverlayHost, OverlayRoot},
    state::{ChangeOutcome, Scope, ScopeError, ScopeHandle},
};

struct DialogInner {
    overlay: OverlayHost,
    trap: FocusTrap,
}

/// A modal window layered over the page.
///
/// While open, scroll is suppressed through the shared lock and keyboard
/// focus cycles inside the [`FocusTrap`]. Trigger and close parts attach
/// through [`ScopeHandle`]s, so a part detached from its root fails loudly
/// instead of silently doing nothing.
pub struct Dialog {
    id: SharedString,
    scope: Scope<DialogInner>,
}

impl Dialog {
    pub fn new(id: impl Into<SharedString>, root: &OverlayRoot) -> Self {
        Self::resolve(id, root, None)
    }

    /// `open` picks controlled mode, exactly as for any other control host.
    pub fn resolve(
        id: impl Into<SharedString>,
        root: &OverlayRoot,
        open: Option<bool>,
    ) -> Self {
        Self {
            id: id.into(),
            scope: Scope::new(DialogInner {
                overlay: OverlayHost::new(root, true, open),
                trap: FocusTrap::default(),
            }),
        }
    }

    pub fn on_open_change(self, on_change: impl Fn(&bool) + 'static) -> Self {
        self.scope
            .with_mut(|inner| inner.overlay.set_on_open_change(on_change));
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.scope.with(|inner| inner.overlay.is_controlled())
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.scope.with(|inner| inner.overlay.is_open())
    }

    pub fn trigger(&self, id: impl Into<SharedString>) -> DialogTrigger {
        DialogTrigger {
            id: id.into(),
            handle: self.scope.handle(),
        }
    }

    pub fn close_button(&self, id: impl Into<SharedString>) -> DialogClose {
        let id = id.into();
        self.scope
            .with_mut(|inner| inner.trap.register(id.clone()));
        DialogClose {
            id,
            handle: self.scope.handle(),
        }
    }

    /// Declares a focusable part inside the dialog content, in tab order.
    pub fn register_focusable(&self, id: impl Into<SharedString>) {
        self.scope.with_mut(|inner| inner.trap.register(id));
    }

    pub fn open(&self, trigger: Option<&str>) -> ChangeOutcome {
        self.scope.with_mut(|inner| {
            let outcome = inner.overlay.request_open(trigger);
            if outcome.is_applied() {
                inner.trap.focus_first();
            }
            outcome
        })
    }

    pub fn dismiss(&self, reason: DismissReason) -> ChangeOutcome {
        self.scope.with_mut(|inner| inner.overlay.dismiss(reason))
    }

    pub fn handle_escape(&self) -> ChangeOutcome {
        self.scope.with_mut(|inner| inner.overlay.handle_escape())
    }

    pub fn handle_outside_interaction(&self) -> ChangeOutcome {
        self.scope
            .with_mut(|inner| inner.overlay.handle_outside_interaction())
    }

    /// Tab while the dialog is open. `None` when closed or the trap is empty.
    pub fn focus_next(&self) -> Option<SharedString> {
        self.scope.with_mut(|inner| {
            if !inner.overlay.is_open() {
                return None;
            }
            inner.trap.next().cloned()
        })
    }

    /// Shift-tab while the dialog is open.
    pub fn focus_prev(&self) -> Option<SharedString> {
        self.scope.with_mut(|inner| {
            if !inner.overlay.is_open() {
                return None;
            }
            inner.trap.prev().cloned()
        })
    }

    pub fn focused(&self) -> Option<SharedString> {
        self.scope.with(|inner| inner.trap.active().cloned())
    }

    pub fn take_restored_focus(&self) -> Option<SharedString> {
        self.scope
            .with_mut(|inner| inner.overlay.take_restored_focus())
    }

    /// Controlled consumers push the new open state here. Focus enters the
    /// trap once the consumer actually opens the dialog.
    pub fn set_open(&self, open: bool) {
        self.scope.with_mut(|inner| {
            let was_open = inner.overlay.is_open();
            inner.overlay.sync_open(open);
            if !was_open && inner.overlay.is_open() {
                inner.trap.focus_first();
            }
        });
    }
}

/// A part that opens its dialog, remembering itself as the focus-restore
/// target.
pub struct DialogTrigger {
    id: SharedString,
    handle: ScopeHandle<DialogInner>,
}

impl DialogTrigger {
    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn activate(&self) -> Result<ChangeOutcome, ScopeError> {
        let id = self.id.clone();
        self.handle.with_mut(|inner| {
            let outcome = inner.overlay.request_open(Some(&id));
            if outcome.is_applied() {
                inner.trap.focus_first();
            }
            outcome
        })
    }
}

/// A part inside the dialog that closes it.
pub struct DialogClose {
    id: SharedString,
    handle: ScopeHandle<DialogInner>,
}

impl DialogClose {
    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn activate(&self) -> Result<ChangeOutcome, ScopeError> {
        self.handle
            .with_mut(|inner| inner.overlay.dismiss(DismissReason::CloseRequested))
    }
}
