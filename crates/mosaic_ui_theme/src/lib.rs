//! Design-token schema for mosaic_ui themes.
//!
//! Themes are plain JSON documents describing layout scales (sizes, paddings,
//! corner radii, typography) and one or more color variants (e.g. dark and
//! light). The schema is deliberately presentation-agnostic: tokens are
//! values, not rendering instructions.

use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod deserializers;
use deserializers::{
    de_abs_length, de_def_length, de_px, de_string_or_non_empty_list, de_variants,
};

mod tokens;
pub use tokens::{AbsLength, DefLength, Px, Rgba, px, rems, rgba};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: String,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_str(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../themes/default.json", DEFAULT]);

    pub fn from_str<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_px")]
    pub base_size: Px,
    pub default_font: ThemeFont,
    pub mono_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[String; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub heading_xl: f32,
    pub heading_lg: f32,
    pub heading_md: f32,
    pub heading_sm: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_px")]
    pub xl: Px,
    #[serde(deserialize_with = "de_px")]
    pub lg: Px,
    #[serde(deserialize_with = "de_px")]
    pub md: Px,
    #[serde(deserialize_with = "de_px")]
    pub sm: Px,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_px")]
    pub xl: Px,
    #[serde(deserialize_with = "de_px")]
    pub lg: Px,
    #[serde(deserialize_with = "de_px")]
    pub md: Px,
    #[serde(deserialize_with = "de_px")]
    pub sm: Px,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_px")]
    pub xl: Px,
    #[serde(deserialize_with = "de_px")]
    pub lg: Px,
    #[serde(deserialize_with = "de_px")]
    pub md: Px,
    #[serde(deserialize_with = "de_px")]
    pub sm: Px,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant at `index`, falling back to the first variant
    /// when the index is out of range. Deserialization guarantees at least
    /// one variant exists.
    pub fn active(&self, index: usize) -> &ThemeVariant {
        self.variants.get(index).unwrap_or(&self.variants[0])
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
}

impl ThemeTextColors {
    pub fn all(&self) -> (Rgba, Rgba) {
        (self.primary, self.secondary)
    }
}
