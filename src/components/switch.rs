use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, ToggleRule},
    theme::LayerKind,
};

/// An on/off toggle.
///
/// The checked value follows the controlled/uncontrolled contract: construct
/// with [`Switch::new`] for an uncontrolled switch that owns its value, or
/// pass `Some(checked)` to [`Switch::resolve`] for a controlled one that
/// only forwards candidates to `on_change`.
pub struct Switch {
    id: SharedString,
    layer: LayerKind,
    host: ControlHost<ToggleRule>,
}

impl Switch {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, false, None)
    }

    pub fn resolve(
        id: impl Into<SharedString>,
        default_checked: bool,
        checked: Option<bool>,
    ) -> Self {
        Self {
            id: id.into(),
            layer: LayerKind::Tertiary,
            host: ControlHost::resolve(ToggleRule, default_checked, checked),
        }
    }

    pub fn layer(mut self, layer: LayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.host.set_initial(checked);
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

    pub fn layer_kind(&self) -> LayerKind {
        self.layer
    }

    pub fn checked(&self) -> bool {
        *self.host.value()
    }

    pub fn is_disabled(&self) -> bool {
        self.host.is_disabled()
    }

    pub fn is_controlled(&self) -> bool {
        self.host.is_controlled()
    }

    /// A qualifying click or keypress.
    pub fn toggle(&mut self) -> ChangeOutcome {
        self.host.request_change(())
    }

    /// Controlled consumers push the new checked value here.
    pub fn set_checked(&mut self, checked: bool) {
        self.host.sync_external(checked);
    }
}
