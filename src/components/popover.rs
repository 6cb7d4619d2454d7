use crate::{
    SharedString,
    overlay::{DismissReason, OverlayHost, OverlayRoot},
    state::ChangeOutcome,
};

/// A non-modal floating panel anchored to a trigger. The page behind it
/// stays interactive and scrollable; clicking the trigger toggles it.
pub struct Popover {
    id: SharedString,
    trigger_id: SharedString,
    overlay: OverlayHost,
}

impl Popover {
    pub fn new(id: impl Into<SharedString>, root: &OverlayRoot) -> Self {
        Self::resolve(id, root, None)
    }

    pub fn resolve(
        id: impl Into<SharedString>,
        root: &OverlayRoot,
        external_open: Option<bool>,
    ) -> Self {
        let id = id.into();
        Self {
            trigger_id: SharedString::from(format!("{id}:trigger")),
            id,
            overlay: OverlayHost::new(root, false, external_open),
        }
    }

    pub fn on_open_change(mut self, on_change: impl Fn(&bool) + 'static) -> Self {
        self.overlay.set_on_open_change(on_change);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.overlay.set_disabled(disabled);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn trigger_id(&self) -> &SharedString {
        &self.trigger_id
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// A click on the trigger: opens when closed, closes when open.
    pub fn toggle(&mut self) -> ChangeOutcome {
        if self.overlay.is_open() {
            self.overlay.dismiss(DismissReason::CloseRequested)
        } else {
            let trigger = self.trigger_id.clone();
            self.overlay.request_open(Some(&trigger))
        }
    }

    pub fn handle_escape(&mut self) -> ChangeOutcome {
        self.overlay.handle_escape()
    }

    pub fn handle_outside_interaction(&mut self) -> ChangeOutcome {
        self.overlay.handle_outside_interaction()
    }

    pub fn sync_open(&mut self, open: bool) {
        self.overlay.sync_open(open);
    }

    pub fn take_restored_focus(&mut self) -> Option<SharedString> {
        self.overlay.take_restored_focus()
    }
}
