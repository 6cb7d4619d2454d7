//! Scalar token types used throughout theme schemas.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// A logical pixel value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Px(pub f32);

pub fn px(value: f32) -> Px {
    Px(value)
}

impl Px {
    pub fn to_f32(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// An absolute length: either pixels or a multiple of the root text size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbsLength {
    Px(Px),
    Rems(f32),
}

pub fn rems(value: f32) -> AbsLength {
    AbsLength::Rems(value)
}

impl AbsLength {
    /// Resolves to pixels against the given root text size.
    pub fn to_px(self, base_size: Px) -> Px {
        match self {
            AbsLength::Px(px) => px,
            AbsLength::Rems(rems) => Px(rems * base_size.0),
        }
    }
}

impl Serialize for AbsLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AbsLength::Px(px) => serializer.serialize_str(&format!("{}px", px.0)),
            AbsLength::Rems(rems) => serializer.serialize_str(&format!("{rems}rem")),
        }
    }
}

/// A definite length: absolute, or a fraction of the parent dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefLength {
    Absolute(AbsLength),
    Fraction(f32),
}

impl Serialize for DefLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefLength::Absolute(abs) => abs.serialize(serializer),
            DefLength::Fraction(fraction) => {
                serializer.serialize_str(&format!("{}%", fraction * 100.))
            }
        }
    }
}

/// An sRGB color with linear component values in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    Rgba { r, g, b, a }
}

impl Rgba {
    /// Returns this color with the alpha channel replaced.
    pub fn alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Linearly interpolates each channel towards `other`.
    pub fn lerp(&self, other: &Rgba, delta: f32) -> Rgba {
        let mix = |a: f32, b: f32| a + (b - a) * delta;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Parses a `#rgb`, `#rrggbb` or `#rrggbbaa` hex string.
    pub fn parse_hex(hex: &str) -> Option<Rgba> {
        let hex = hex.strip_prefix('#')?;

        let channel = |value: &str| -> Option<f32> {
            u8::from_str_radix(value, 16).ok().map(|v| v as f32 / 255.)
        };

        match hex.len() {
            3 => {
                let mut chars = hex.chars();
                let mut next = || {
                    let c = chars.next()?;
                    channel(&format!("{c}{c}"))
                };
                Some(Rgba {
                    r: next()?,
                    g: next()?,
                    b: next()?,
                    a: 1.,
                })
            }
            6 | 8 => Some(Rgba {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: if hex.len() == 8 {
                    channel(&hex[6..8])?
                } else {
                    1.
                },
            }),
            _ => None,
        }
    }

    fn to_hex(self) -> String {
        let channel = |value: f32| (value.clamp(0., 1.) * 255.).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a)
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgba::parse_hex(&hex)
            .ok_or_else(|| D::Error::custom("expected a '#rgb', '#rrggbb' or '#rrggbbaa' string"))
    }
}
