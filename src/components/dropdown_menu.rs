use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use crate::{
    SharedString,
    overlay::{DismissReason, OverlayHost, OverlayRoot},
    state::{ChangeOutcome, ControlHost, MultiRule, SingleRule},
};

/// How a menu item reacts to activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemKind {
    /// Fires the action callback and closes the menu.
    Action,
    /// Toggles independently; the menu stays open.
    Checkbox,
    /// Exclusive within the menu's radio set; the menu stays open.
    Radio,
}

struct MenuItem {
    kind: MenuItemKind,
    disabled: bool,
}

pub type OnActionFn = Rc<dyn Fn(&SharedString)>;

/// A menu of actions and stateful items, opened from a trigger.
///
/// Checkbox and radio items keep their state across open/close cycles;
/// activating them does not close the menu, while activating an action item
/// does.
pub struct DropdownMenu {
    id: SharedString,
    overlay: OverlayHost,
    items: IndexMap<SharedString, MenuItem>,
    checked: ControlHost<MultiRule>,
    radio: ControlHost<SingleRule>,
    on_action: Option<OnActionFn>,
}

impl DropdownMenu {
    pub fn new(id: impl Into<SharedString>, root: &OverlayRoot) -> Self {
        Self::resolve(id, root, None, None, None)
    }

    /// Each supplied external value picks controlled mode for that host
    /// independently, exactly as for any other control host.
    pub fn resolve(
        id: impl Into<SharedString>,
        root: &OverlayRoot,
        open: Option<bool>,
        checked: Option<IndexSet<SharedString>>,
        radio: Option<Option<SharedString>>,
    ) -> Self {
        Self {
            id: id.into(),
            overlay: OverlayHost::new(root, false, open),
            items: IndexMap::new(),
            checked: ControlHost::resolve(MultiRule::default(), IndexSet::new(), checked),
            radio: ControlHost::resolve(SingleRule::default(), None, radio),
            on_action: None,
        }
    }

    pub fn on_open_change(mut self, on_change: impl Fn(&bool) + 'static) -> Self {
        self.overlay.set_on_open_change(on_change);
        self
    }

    pub fn on_checked_change(
        mut self,
        on_change: impl Fn(&IndexSet<SharedString>) + 'static,
    ) -> Self {
        self.checked.set_on_change(on_change);
        self
    }

    pub fn on_radio_change(mut self, on_change: impl Fn(&Option<SharedString>) + 'static) -> Self {
        self.radio.set_on_change(on_change);
        self
    }

    pub fn action(self, name: impl Into<SharedString>) -> Self {
        self.push(name, MenuItemKind::Action, false)
    }

    pub fn checkbox(mut self, name: impl Into<SharedString>) -> Self {
        let name = name.into();
        self.checked.rule_mut().declare(name.clone());
        self.push(name, MenuItemKind::Checkbox, false)
    }

    pub fn radio_option(mut self, name: impl Into<SharedString>) -> Self {
        let name = name.into();
        self.radio.rule_mut().declare(name.clone());
        self.push(name, MenuItemKind::Radio, false)
    }

    pub fn disable_item(mut self, name: &str) -> Self {
        if let Some(item) = self.items.get_mut(name) {
            item.disabled = true;
        }
        self
    }

    pub fn on_action(mut self, on_action: impl Fn(&SharedString) + 'static) -> Self {
        self.on_action = Some(Rc::new(on_action));
        self
    }

    fn push(mut self, name: impl Into<SharedString>, kind: MenuItemKind, disabled: bool) -> Self {
        self.items.insert(name.into(), MenuItem { kind, disabled });
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn open(&mut self, trigger: Option<&str>) -> ChangeOutcome {
        self.overlay.request_open(trigger)
    }

    pub fn close(&mut self, reason: DismissReason) -> ChangeOutcome {
        self.overlay.dismiss(reason)
    }

    pub fn handle_escape(&mut self) -> ChangeOutcome {
        self.overlay.handle_escape()
    }

    pub fn handle_outside_interaction(&mut self) -> ChangeOutcome {
        self.overlay.handle_outside_interaction()
    }

    pub fn take_restored_focus(&mut self) -> Option<SharedString> {
        self.overlay.take_restored_focus()
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.value().contains(name)
    }

    pub fn radio_value(&self) -> Option<&SharedString> {
        self.radio.value().as_ref()
    }

    pub fn item_kind(&self, name: &str) -> Option<MenuItemKind> {
        self.items.get(name).map(|item| item.kind)
    }

    /// A click or Enter on an item while the menu is open.
    pub fn activate(&mut self, name: impl Into<SharedString>) -> ChangeOutcome {
        if !self.overlay.is_open() {
            return ChangeOutcome::Ignored;
        }

        let name = name.into();
        let Some(item) = self.items.get(name.as_str()) else {
            return ChangeOutcome::Ignored;
        };
        if item.disabled {
            return ChangeOutcome::Ignored;
        }

        match item.kind {
            MenuItemKind::Action => {
                if let Some(on_action) = &self.on_action {
                    (on_action)(&name);
                }
                self.overlay.dismiss(DismissReason::CloseRequested)
            }
            MenuItemKind::Checkbox => self.checked.request_change(name),
            MenuItemKind::Radio => self.radio.request_change(name),
        }
    }

    /// Controlled consumers push new state through these.
    pub fn set_open(&mut self, open: bool) {
        self.overlay.sync_open(open);
    }

    pub fn set_checked(&mut self, checked: IndexSet<SharedString>) {
        self.checked.sync_external(checked);
    }

    pub fn set_radio_value(&mut self, radio: Option<SharedString>) {
        self.radio.sync_external(radio);
    }
}
