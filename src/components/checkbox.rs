use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, TransitionRule},
    theme::LayerKind,
};

/// A checkbox value. `Indeterminate` represents a mixed state (e.g. a
/// parent checkbox over a partially selected group); interacting with an
/// indeterminate checkbox resolves it to `Checked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckedState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckedState {
    pub fn is_checked(self) -> bool {
        matches!(self, CheckedState::Checked)
    }
}

impl From<bool> for CheckedState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckedState::Checked
        } else {
            CheckedState::Unchecked
        }
    }
}

/// Unchecked → Checked → Unchecked, with Indeterminate resolving to Checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxRule;

impl TransitionRule for CheckboxRule {
    type Value = CheckedState;
    type Candidate = ();

    fn next(&self, current: &CheckedState, _candidate: ()) -> Option<CheckedState> {
        Some(match current {
            CheckedState::Unchecked => CheckedState::Checked,
            CheckedState::Checked => CheckedState::Unchecked,
            CheckedState::Indeterminate => CheckedState::Checked,
        })
    }
}

pub struct Checkbox {
    id: SharedString,
    layer: LayerKind,
    host: ControlHost<CheckboxRule>,
}

impl Checkbox {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, CheckedState::Unchecked, None)
    }

    pub fn resolve(
        id: impl Into<SharedString>,
        default_state: CheckedState,
        state: Option<CheckedState>,
    ) -> Self {
        Self {
            id: id.into(),
            layer: LayerKind::Tertiary,
            host: ControlHost::resolve(CheckboxRule, default_state, state),
        }
    }

    pub fn layer(mut self, layer: LayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn default_state(mut self, state: CheckedState) -> Self {
        self.host.set_initial(state);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.host.set_disabled(disabled);
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&CheckedState) + 'static) -> Self {
        self.host.set_on_change(on_change);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn layer_kind(&self) -> LayerKind {
        self.layer
    }

    pub fn state(&self) -> CheckedState {
        *self.host.value()
    }

    pub fn is_checked(&self) -> bool {
        self.state().is_checked()
    }

    pub fn is_disabled(&self) -> bool {
        self.host.is_disabled()
    }

    pub fn toggle(&mut self) -> ChangeOutcome {
        self.host.request_change(())
    }

    pub fn set_state(&mut self, state: CheckedState) {
        self.host.sync_external(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let mut checkbox = Checkbox::new("cb");

        checkbox.toggle();
        assert_eq!(checkbox.state(), CheckedState::Checked);

        checkbox.toggle();
        assert_eq!(checkbox.state(), CheckedState::Unchecked);
    }

    #[test]
    fn test_indeterminate_resolves_to_checked() {
        let mut checkbox = Checkbox::new("cb").default_state(CheckedState::Indeterminate);

        checkbox.toggle();
        assert_eq!(
            checkbox.state(),
            CheckedState::Checked,
            "Interacting with an indeterminate checkbox should check it"
        );
    }

    #[test]
    fn test_disabled_checkbox_is_inert() {
        let mut checkbox = Checkbox::new("cb").disabled(true);
        assert!(checkbox.toggle().is_ignored());
        assert_eq!(checkbox.state(), CheckedState::Unchecked);
    }

    #[test]
    fn test_controlled_checkbox() {
        let mut checkbox = Checkbox::resolve("cb", CheckedState::Unchecked, Some(CheckedState::Unchecked));

        assert!(checkbox.toggle().is_forwarded());
        assert_eq!(checkbox.state(), CheckedState::Unchecked);

        checkbox.set_state(CheckedState::Checked);
        assert!(checkbox.is_checked());
    }

    #[test]
    fn test_checked_state_from_bool() {
        assert_eq!(CheckedState::from(true), CheckedState::Checked);
        assert_eq!(CheckedState::from(false), CheckedState::Unchecked);
    }
}
