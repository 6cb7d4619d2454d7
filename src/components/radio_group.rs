use indexmap::IndexSet;

use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, SingleRule},
};

/// An exclusive-choice group. Once a selection exists it can only be
/// replaced, never cleared through interaction.
pub struct RadioGroup {
    id: SharedString,
    host: ControlHost<SingleRule>,
    disabled_items: IndexSet<SharedString>,
}

impl RadioGroup {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, None, None)
    }

    pub fn resolve(
        id: impl Into<SharedString>,
        default_value: Option<SharedString>,
        value: Option<Option<SharedString>>,
    ) -> Self {
        Self {
            id: id.into(),
            host: ControlHost::resolve(SingleRule::default(), default_value, value),
            disabled_items: IndexSet::new(),
        }
    }

    pub fn item(mut self, item: impl Into<SharedString>) -> Self {
        self.host.rule_mut().declare(item);
        self
    }

    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        for item in items {
            self.host.rule_mut().declare(item);
        }
        self
    }

    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.host.set_initial(Some(value.into()));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.host.set_disabled(disabled);
        self
    }

    pub fn disable_item(mut self, item: impl Into<SharedString>) -> Self {
        self.disabled_items.insert(item.into());
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&Option<SharedString>) + 'static) -> Self {
        self.host.set_on_change(on_change);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn value(&self) -> Option<&SharedString> {
        self.host.value().as_ref()
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.host.value().as_deref() == Some(item)
    }

    pub fn is_disabled(&self) -> bool {
        self.host.is_disabled()
    }

    pub fn is_item_disabled(&self, item: &str) -> bool {
        self.host.is_disabled() || self.disabled_items.contains(item)
    }

    pub fn select(&mut self, item: impl Into<SharedString>) -> ChangeOutcome {
        let item = item.into();
        if self.disabled_items.contains(item.as_str()) {
            return ChangeOutcome::Ignored;
        }
        self.host.request_change(item)
    }

    pub fn set_value(&mut self, value: Option<SharedString>) {
        self.host.sync_external(value);
    }
}
