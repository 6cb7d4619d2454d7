#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use mosaic_ui_theme::{AbsLength, Px, Rgba, Theme, ThemeVariant};

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> AbsLength)]
pub enum TextSizeKind {
    /// Extra large heading text.
    #[assoc(resolve = theme.layout.text.default_font.sizes.heading_xl)]
    Xl,
    /// Large heading text.
    #[assoc(resolve = theme.layout.text.default_font.sizes.heading_lg)]
    Lg,
    /// Medium heading text.
    #[assoc(resolve = theme.layout.text.default_font.sizes.heading_md)]
    Md,
    /// Small heading text.
    #[assoc(resolve = theme.layout.text.default_font.sizes.heading_sm)]
    Sm,
    /// Standard body text.
    #[assoc(resolve = theme.layout.text.default_font.sizes.body)]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = theme.layout.text.default_font.sizes.caption)]
    Caption,
}

/// Component size variants that resolve to theme-defined pixel values.
///
/// Each size has a corresponding corner radius for consistent styling.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Px)]
#[func(pub fn corner_radii(&self) -> CornerRadiiKind)]
pub enum SizeKind {
    /// Extra large component size.
    #[assoc(resolve = theme.layout.size.xl)]
    #[assoc(corner_radii = CornerRadiiKind::Xl)]
    Xl,
    /// Large component size.
    #[assoc(resolve = theme.layout.size.lg)]
    #[assoc(corner_radii = CornerRadiiKind::Lg)]
    Lg,
    /// Medium component size.
    #[assoc(resolve = theme.layout.size.md)]
    #[assoc(corner_radii = CornerRadiiKind::Md)]
    Md,
    /// Small component size.
    #[assoc(resolve = theme.layout.size.sm)]
    #[assoc(corner_radii = CornerRadiiKind::Sm)]
    Sm,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Px)]
pub enum PaddingKind {
    #[assoc(resolve = theme.layout.padding.xl)]
    Xl,
    #[assoc(resolve = theme.layout.padding.lg)]
    Lg,
    #[assoc(resolve = theme.layout.padding.md)]
    Md,
    #[assoc(resolve = theme.layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Px)]
pub enum CornerRadiiKind {
    #[assoc(resolve = theme.layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = theme.layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = theme.layout.corner_radii.md)]
    Md,
    #[assoc(resolve = theme.layout.corner_radii.sm)]
    Sm,
}

/// Background color variants from a theme variant.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, variant: &ThemeVariant) -> Rgba)]
pub enum BackgroundKind {
    /// Base background for main surfaces.
    #[assoc(resolve = variant.colors.background.primary)]
    Primary,
    /// Slightly elevated or grouped content.
    #[assoc(resolve = variant.colors.background.secondary)]
    Secondary,
    /// Further elevated elements.
    #[assoc(resolve = variant.colors.background.tertiary)]
    Tertiary,
    /// High emphasis backgrounds.
    #[assoc(resolve = variant.colors.background.quaternary)]
    Quaternary,
    /// Highest emphasis backgrounds.
    #[assoc(resolve = variant.colors.background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// Similar to [`BackgroundKind`] but supports `next()` to get the elevated
/// layer color for nested elements.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, variant: &ThemeVariant) -> Rgba)]
#[func(pub fn next(&self) -> BackgroundKind)]
pub enum LayerKind {
    /// Base layer for main surfaces.
    #[assoc(resolve = variant.colors.background.primary)]
    #[assoc(next = BackgroundKind::Secondary)]
    Primary,
    /// Second layer for grouped content.
    #[assoc(resolve = variant.colors.background.secondary)]
    #[assoc(next = BackgroundKind::Tertiary)]
    Secondary,
    /// Third layer for elevated elements.
    #[assoc(resolve = variant.colors.background.tertiary)]
    #[assoc(next = BackgroundKind::Quaternary)]
    Tertiary,
    /// Fourth layer for high emphasis.
    #[assoc(resolve = variant.colors.background.quaternary)]
    #[assoc(next = BackgroundKind::Quinary)]
    Quaternary,
}

impl From<LayerKind> for BackgroundKind {
    fn from(value: LayerKind) -> Self {
        match value {
            LayerKind::Primary => BackgroundKind::Primary,
            LayerKind::Secondary => BackgroundKind::Secondary,
            LayerKind::Tertiary => BackgroundKind::Tertiary,
            LayerKind::Quaternary => BackgroundKind::Quaternary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_kind_resolves_in_order() {
        let theme = Theme::DEFAULT;

        let sm = SizeKind::Sm.resolve(&theme);
        let md = SizeKind::Md.resolve(&theme);
        let lg = SizeKind::Lg.resolve(&theme);
        let xl = SizeKind::Xl.resolve(&theme);

        assert!(sm <= md, "Sm should be <= Md");
        assert!(md <= lg, "Md should be <= Lg");
        assert!(lg <= xl, "Lg should be <= Xl");
    }

    #[test]
    fn test_size_kind_corner_radii_pairing() {
        assert_eq!(SizeKind::Xl.corner_radii(), CornerRadiiKind::Xl);
        assert_eq!(SizeKind::Sm.corner_radii(), CornerRadiiKind::Sm);
    }

    #[test]
    fn test_layer_kind_next_is_elevated() {
        assert_eq!(LayerKind::Primary.next(), BackgroundKind::Secondary);
        assert_eq!(LayerKind::Quaternary.next(), BackgroundKind::Quinary);
    }

    #[test]
    fn test_layer_kind_resolves_against_variant() {
        let theme = Theme::DEFAULT;
        let variant = theme.variants.active(0);

        let layer = LayerKind::Secondary.resolve(variant);
        let background = BackgroundKind::Secondary.resolve(variant);
        assert_eq!(layer, background, "Layer and background should share tokens");
    }

    #[test]
    fn test_text_size_kinds_resolve() {
        let theme = Theme::DEFAULT;
        let base = theme.layout.text.base_size;

        let body = TextSizeKind::Body.resolve(&theme).to_px(base);
        let caption = TextSizeKind::Caption.resolve(&theme).to_px(base);
        assert!(caption <= body, "Caption text should not exceed body text");
    }
}
