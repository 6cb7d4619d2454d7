use mosaic_ui_theme::{Rgba, Theme};

use crate::theme::SizeKind;

/// Semantic button emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Constructive,
    Destructive,
}

/// A fully resolved button appearance: every color the interactive states
/// need, computed once per render from the active theme variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GranularButtonVariant {
    pub bg_color: Rgba,
    pub bg_hover_color: Rgba,
    pub bg_down_color: Rgba,
    pub text_color: Rgba,
    pub highlight_alpha: f32,
}

impl ButtonVariant {
    pub fn as_granular(self, theme: &Theme, variant_index: usize) -> GranularButtonVariant {
        let colors = &theme.variants.active(variant_index).colors;
        let text = colors.text.primary;

        let bg = match self {
            ButtonVariant::Primary => colors.accent.primary,
            ButtonVariant::Secondary => colors.background.tertiary,
            ButtonVariant::Tertiary => colors.background.secondary,
            ButtonVariant::Constructive => colors.accent.constructive,
            ButtonVariant::Destructive => colors.accent.destructive,
        };

        GranularButtonVariant {
            bg_color: bg,
            bg_hover_color: bg.lerp(&text, 0.07),
            bg_down_color: bg.lerp(&text, 0.16),
            text_color: text,
            highlight_alpha: match self {
                ButtonVariant::Secondary | ButtonVariant::Tertiary => 0.,
                _ => 0.15,
            },
        }
    }
}

/// Static button configuration. Interactive state (hover, press, focus)
/// belongs to the embedding application; the button only resolves what each
/// state should look like.
#[derive(Debug, Clone)]
pub struct Button {
    id: crate::SharedString,
    variant: ButtonVariant,
    size: SizeKind,
    disabled: bool,
}

impl Button {
    pub fn new(id: impl Into<crate::SharedString>) -> Self {
        Self {
            id: id.into(),
            variant: ButtonVariant::Primary,
            size: SizeKind::Md,
            disabled: false,
        }
    }

    pub fn id(&self) -> &crate::SharedString {
        &self.id
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: SizeKind) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn size_kind(&self) -> SizeKind {
        self.size
    }

    pub fn resolve(&self, theme: &Theme, variant_index: usize) -> GranularButtonVariant {
        let mut granular = self.variant.as_granular(theme, variant_index);

        if self.disabled {
            granular.bg_color = granular.bg_color.alpha(granular.bg_color.a * 0.5);
            granular.text_color = granular.text_color.alpha(granular.text_color.a * 0.5);
        }

        granular
    }
}
