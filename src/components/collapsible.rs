use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, ToggleRule},
};

/// A single expandable region with a trigger.
pub struct Collapsible {
    id: SharedString,
    host: ControlHost<ToggleRule>,
}

impl Collapsible {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, false, None)
    }

    pub fn resolve(id: impl Into<SharedString>, default_open: bool, open: Option<bool>) -> Self {
        Self {
            id: id.into(),
            host: ControlHost::resolve(ToggleRule, default_open, open),
        }
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.host.set_initial(open);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.host.set_disabled(disabled);
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&bool) + 'static) -> Self {
        self.host.set_on_change(on_change);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        *self.host.value()
    }

    pub fn is_disabled(&self) -> bool {
        self.host.is_disabled()
    }

    pub fn toggle(&mut self) -> ChangeOutcome {
        self.host.request_change(())
    }

    pub fn set_open(&mut self, open: bool) {
        self.host.sync_external(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsible_toggles() {
        let mut collapsible = Collapsible::new("details");

        assert!(!collapsible.is_open());
        collapsible.toggle();
        assert!(collapsible.is_open());
        collapsible.toggle();
        assert!(!collapsible.is_open());
    }

    #[test]
    fn test_default_open() {
        let collapsible = Collapsible::new("details").default_open(true);
        assert!(collapsible.is_open());
    }

    #[test]
    fn test_disabled_collapsible_stays_put() {
        let mut collapsible = Collapsible::new("details").default_open(true).disabled(true);
        assert!(collapsible.toggle().is_ignored());
        assert!(collapsible.is_open());
    }
}
