use mosaic_ui_theme::Theme;

use super::{ButtonVariant, GranularButtonVariant};
use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, ToggleRule},
};

/// A pressed/released button.
///
/// Borrows its appearance from [`ButtonVariant`]: the pressed state renders
/// the chosen variant, the released state renders a transparent version of
/// it.
pub struct Toggle {
    id: SharedString,
    variant: ButtonVariant,
    host: ControlHost<ToggleRule>,
}

/// The appearance pair a toggle switches between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GranularToggleVariant {
    pub truthy: GranularButtonVariant,
    pub falsey: GranularButtonVariant,
}

impl Toggle {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, false, None)
    }

    pub fn resolve(id: impl Into<SharedString>, default_pressed: bool, pressed: Option<bool>) -> Self {
        Self {
            id: id.into(),
            variant: ButtonVariant::Primary,
            host: ControlHost::resolve(ToggleRule, default_pressed, pressed),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn default_pressed(mut self, pressed: bool) -> Self {
        self.host.set_initial(pressed);
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

    pub fn is_pressed(&self) -> bool {
        *self.host.value()
    }

    pub fn is_disabled(&self) -> bool {
        self.host.is_disabled()
    }

    pub fn press(&mut self) -> ChangeOutcome {
        self.host.request_change(())
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.host.sync_external(pressed);
    }

    /// Resolves both appearances; the released one is the pressed appearance
    /// with its fill removed.
    pub fn granular_variant(&self, theme: &Theme, variant_index: usize) -> GranularToggleVariant {
        let truthy = self.variant.as_granular(theme, variant_index);

        GranularToggleVariant {
            truthy,
            falsey: falsey_granular_variant(truthy),
        }
    }

    /// The appearance matching the current pressed state.
    pub fn resolve_style(&self, theme: &Theme, variant_index: usize) -> GranularButtonVariant {
        let pair = self.granular_variant(theme, variant_index);
        if self.is_pressed() { pair.truthy } else { pair.falsey }
    }
}

fn falsey_granular_variant(mut variant: GranularButtonVariant) -> GranularButtonVariant {
    variant.bg_color = variant.bg_color.alpha(0.);
    variant.highlight_alpha = 0.;
    variant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_toggles_state() {
        let mut toggle = Toggle::new("bold");

        toggle.press();
        assert!(toggle.is_pressed());
        toggle.press();
        assert!(!toggle.is_pressed());
    }

    #[test]
    fn test_released_style_is_transparent() {
        let theme = Theme::DEFAULT;
        let toggle = Toggle::new("bold").variant(ButtonVariant::Secondary);

        let pair = toggle.granular_variant(&theme, 0);
        assert_eq!(pair.falsey.bg_color.a, 0., "The released state should have no fill");
        assert!(pair.truthy.bg_color.a > 0., "The pressed state keeps its fill");
    }

    #[test]
    fn test_resolve_style_follows_state() {
        let theme = Theme::DEFAULT;
        let mut toggle = Toggle::new("bold");

        let released = toggle.resolve_style(&theme, 0);
        toggle.press();
        let pressed = toggle.resolve_style(&theme, 0);

        assert_ne!(released, pressed);
    }

    #[test]
    fn test_disabled_toggle_ignores_presses() {
        let mut toggle = Toggle::new("bold").disabled(true);
        assert!(toggle.press().is_ignored());
        assert!(!toggle.is_pressed());
    }
}
