use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, SingleToggleOffRule},
};

/// A horizontal strip of menu triggers sharing one open menu.
///
/// At most one menu is open. Clicking a trigger toggles its menu; once any
/// menu is open, merely hovering a sibling trigger moves the open menu there.
/// Hover does nothing while everything is closed.
pub struct Menubar {
    id: SharedString,
    host: ControlHost<SingleToggleOffRule>,
}

impl Menubar {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, None)
    }

    /// `open` picks controlled mode for the open menu, exactly as for any
    /// other control host.
    pub fn resolve(id: impl Into<SharedString>, open: Option<Option<SharedString>>) -> Self {
        Self {
            id: id.into(),
            host: ControlHost::resolve(SingleToggleOffRule::default(), None, open),
        }
    }

    pub fn on_change(mut self, on_change: impl Fn(&Option<SharedString>) + 'static) -> Self {
        self.host.set_on_change(on_change);
        self
    }

    pub fn menu(mut self, menu: impl Into<SharedString>) -> Self {
        self.host.rule_mut().declare(menu);
        self
    }

    pub fn menus<I, S>(mut self, menus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        for menu in menus {
            self.host.rule_mut().declare(menu);
        }
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.host.set_disabled(disabled);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn open_menu(&self) -> Option<&SharedString> {
        self.host.value().as_ref()
    }

    pub fn is_menu_open(&self, menu: &str) -> bool {
        self.host.value().as_deref() == Some(menu)
    }

    /// A click on a trigger: opens its menu, or closes it if already open.
    pub fn activate(&mut self, menu: impl Into<SharedString>) -> ChangeOutcome {
        self.host.request_change(menu.into())
    }

    /// Pointer over a trigger. Hops the open menu only while one is open.
    pub fn pointer_enter(&mut self, menu: impl Into<SharedString>) -> ChangeOutcome {
        let menu = menu.into();

        match self.host.value() {
            None => ChangeOutcome::Ignored,
            Some(open) if *open == menu => ChangeOutcome::Ignored,
            Some(_) => self.host.request_change(menu),
        }
    }

    /// Escape closes whichever menu is open.
    pub fn handle_escape(&mut self) -> ChangeOutcome {
        let Some(open) = self.host.value().clone() else {
            return ChangeOutcome::Ignored;
        };
        self.host.request_change(open)
    }

    /// Controlled consumers push the new open menu here.
    pub fn set_open_menu(&mut self, open: Option<SharedString>) {
        self.host.sync_external(open);
    }
}
