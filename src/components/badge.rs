use crate::variant::{AttrSet, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Constructive,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Constructive => "constructive",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    fn as_str(self) -> &'static str {
        match self {
            BadgeSize::Sm => "sm",
            BadgeSize::Md => "md",
            BadgeSize::Lg => "lg",
        }
    }
}

/// A stateless label chip. The simplest shape a component takes here: a
/// variant tuple resolved through a [`VariantTable`], nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Badge {
    variant: BadgeVariant,
    size: BadgeSize,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn attrs(&self) -> AttrSet {
        Self::style_table().resolve(&[
            ("variant", self.variant.as_str()),
            ("size", self.size.as_str()),
        ])
    }

    fn style_table() -> VariantTable {
        VariantTable::builder()
            .base(
                AttrSet::new()
                    .set("radius", "corner_radii.sm")
                    .set("text", "text.primary"),
            )
            .axis(
                "variant",
                "default",
                [
                    ("default", AttrSet::new().set("bg", "accent.primary")),
                    ("secondary", AttrSet::new().set("bg", "background.tertiary")),
                    ("constructive", AttrSet::new().set("bg", "accent.constructive")),
                    ("destructive", AttrSet::new().set("bg", "accent.destructive")),
                    (
                        "outline",
                        AttrSet::new()
                            .set("bg", "transparent")
                            .set("border", "background.quinary"),
                    ),
                ],
            )
            .axis(
                "size",
                "md",
                [
                    (
                        "sm",
                        AttrSet::new().set("px", "padding.sm").set("font", "caption"),
                    ),
                    (
                        "md",
                        AttrSet::new().set("px", "padding.md").set("font", "caption"),
                    ),
                    (
                        "lg",
                        AttrSet::new().set("px", "padding.md").set("font", "body"),
                    ),
                ],
            )
            // Outline badges keep their border readable at the smallest size.
            .compound(
                [("variant", "outline"), ("size", "sm")],
                AttrSet::new().set("border", "text.secondary"),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_badge_attrs() {
        let attrs = Badge::new().attrs();
        assert_eq!(attrs.get("bg").unwrap(), "accent.primary");
        assert_eq!(attrs.get("px").unwrap(), "padding.md");
    }

    #[test]
    fn test_outline_small_compound() {
        let attrs = Badge::new()
            .variant(BadgeVariant::Outline)
            .size(BadgeSize::Sm)
            .attrs();
        assert_eq!(
            attrs.get("border").unwrap(),
            "text.secondary",
            "The compound rule should override the axis border"
        );

        let attrs = Badge::new().variant(BadgeVariant::Outline).attrs();
        assert_eq!(attrs.get("border").unwrap(), "background.quinary");
    }

    #[test]
    fn test_badge_attrs_deterministic() {
        let badge = Badge::new().variant(BadgeVariant::Destructive).size(BadgeSize::Lg);
        assert_eq!(badge.attrs(), badge.attrs());
    }
}
