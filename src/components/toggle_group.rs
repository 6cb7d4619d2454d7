use indexmap::IndexSet;

use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, MultiRule, SingleToggleOffRule},
};

/// A set of toggles where activation is coordinated across the group.
///
/// The two modes carry different value shapes, so the group is constructed
/// in one mode or the other and stays there. Single mode permits at most one
/// pressed item (pressing it again releases it); multiple mode keeps an
/// independent pressed set.
pub struct ToggleGroup {
    id: SharedString,
    host: GroupHost,
}

enum GroupHost {
    Single(ControlHost<SingleToggleOffRule>),
    Multiple(ControlHost<MultiRule>),
}

impl ToggleGroup {
    pub fn single<I, S>(id: impl Into<SharedString>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            id: id.into(),
            host: GroupHost::Single(ControlHost::uncontrolled(
                SingleToggleOffRule::new(items),
                None,
            )),
        }
    }

    pub fn multiple<I, S>(id: impl Into<SharedString>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            id: id.into(),
            host: GroupHost::Multiple(ControlHost::uncontrolled(
                MultiRule::new(items),
                IndexSet::new(),
            )),
        }
    }

    /// A controlled single-mode group mirroring an external value.
    pub fn single_controlled<I, S>(
        id: impl Into<SharedString>,
        items: I,
        pressed: Option<SharedString>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            id: id.into(),
            host: GroupHost::Single(ControlHost::controlled(
                SingleToggleOffRule::new(items),
                pressed,
            )),
        }
    }

    /// A controlled multiple-mode group mirroring an external pressed set.
    pub fn multiple_controlled<I, S>(
        id: impl Into<SharedString>,
        items: I,
        pressed: IndexSet<SharedString>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            id: id.into(),
            host: GroupHost::Multiple(ControlHost::controlled(MultiRule::new(items), pressed)),
        }
    }

    /// Observes single-mode changes. Ignored on a multiple-mode group, where
    /// the value has a different shape; see [`ToggleGroup::on_multiple_change`].
    pub fn on_single_change(mut self, on_change: impl Fn(&Option<SharedString>) + 'static) -> Self {
        if let GroupHost::Single(host) = &mut self.host {
            host.set_on_change(on_change);
        }
        self
    }

    /// Observes multiple-mode changes. Ignored on a single-mode group.
    pub fn on_multiple_change(
        mut self,
        on_change: impl Fn(&IndexSet<SharedString>) + 'static,
    ) -> Self {
        if let GroupHost::Multiple(host) = &mut self.host {
            host.set_on_change(on_change);
        }
        self
    }

    pub fn item(mut self, item: impl Into<SharedString>) -> Self {
        match &mut self.host {
            GroupHost::Single(host) => host.rule_mut().declare(item),
            GroupHost::Multiple(host) => host.rule_mut().declare(item),
        }
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        match &mut self.host {
            GroupHost::Single(host) => host.set_disabled(disabled),
            GroupHost::Multiple(host) => host.set_disabled(disabled),
        }
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn is_disabled(&self) -> bool {
        match &self.host {
            GroupHost::Single(host) => host.is_disabled(),
            GroupHost::Multiple(host) => host.is_disabled(),
        }
    }

    pub fn is_pressed(&self, item: &str) -> bool {
        match &self.host {
            GroupHost::Single(host) => host.value().as_deref() == Some(item),
            GroupHost::Multiple(host) => host.value().contains(item),
        }
    }

    /// The pressed item in single mode; `None` in multiple mode.
    pub fn pressed(&self) -> Option<&SharedString> {
        match &self.host {
            GroupHost::Single(host) => host.value().as_ref(),
            GroupHost::Multiple(_) => None,
        }
    }

    /// The pressed set in multiple mode; `None` in single mode.
    pub fn pressed_set(&self) -> Option<&IndexSet<SharedString>> {
        match &self.host {
            GroupHost::Single(_) => None,
            GroupHost::Multiple(host) => Some(host.value()),
        }
    }

    pub fn press(&mut self, item: impl Into<SharedString>) -> ChangeOutcome {
        match &mut self.host {
            GroupHost::Single(host) => host.request_change(item.into()),
            GroupHost::Multiple(host) => host.request_change(item.into()),
        }
    }

    /// Controlled consumers push the new pressed item here (single mode).
    pub fn set_pressed(&mut self, pressed: Option<SharedString>) {
        if let GroupHost::Single(host) = &mut self.host {
            host.sync_external(pressed);
        }
    }

    /// Controlled consumers push the new pressed set here (multiple mode).
    pub fn set_pressed_set(&mut self, pressed: IndexSet<SharedString>) {
        if let GroupHost::Multiple(host) = &mut self.host {
            host.sync_external(pressed);
        }
    }
}
