use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{AbsLength, DefLength, Px, ThemeVariant, px, rems};

/// A raw JSON length: either a bare number or a suffixed string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f32),
    Suffixed(String),
}

/// Parses `"12.5<suffix>"` into whatever `build` makes of the number.
fn parse_suffixed<T>(string: &str, suffix: &str, build: impl FnOnce(f32) -> T) -> Option<T> {
    string
        .strip_suffix(suffix)
        .and_then(|stripped| stripped.parse::<f32>().ok())
        .map(build)
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) if vec.is_empty() => Err(D::Error::custom("list can't be empty.")),
        StringOrVec::Many(vec) => Ok(vec),
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let variants = SmallVec::deserialize(deserializer)?;

    if variants.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(variants)
}

pub fn de_px<'de, D>(deserializer: D) -> Result<Px, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::deserialize(deserializer)? {
        RawLength::Number(pixels) => Ok(px(pixels)),
        RawLength::Suffixed(string) => parse_suffixed(&string, "px", px)
            .ok_or_else(|| D::Error::custom("expected a f32 ending with 'px'")),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsLength, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::deserialize(deserializer)? {
        RawLength::Number(pixels) => Ok(AbsLength::Px(px(pixels))),
        RawLength::Suffixed(string) => parse_suffixed(&string, "rem", rems)
            .or_else(|| parse_suffixed(&string, "px", |pixels| AbsLength::Px(px(pixels))))
            .ok_or_else(|| D::Error::custom("expected a f32 ending with 'rem' or 'px'")),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefLength, D::Error>
where
    D: Deserializer<'de>,
{
    match RawLength::deserialize(deserializer)? {
        RawLength::Number(pixels) => Ok(DefLength::Absolute(AbsLength::Px(px(pixels)))),
        RawLength::Suffixed(string) => {
            parse_suffixed(&string, "%", |percent| DefLength::Fraction(percent / 100.))
                .or_else(|| parse_suffixed(&string, "rem", |value| DefLength::Absolute(rems(value))))
                .or_else(|| {
                    parse_suffixed(&string, "px", |pixels| {
                        DefLength::Absolute(AbsLength::Px(px(pixels)))
                    })
                })
                .ok_or_else(|| D::Error::custom("expected a f32 ending with '%', 'rem' or 'px'"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_de_px_accepts_float_and_suffixed_string() {
        assert_eq!(de_px(json!(12.0)).unwrap(), px(12.));
        assert_eq!(de_px(json!("24px")).unwrap(), px(24.));
    }

    #[test]
    fn test_de_px_rejects_unsuffixed_string() {
        assert!(
            de_px(json!("24")).is_err(),
            "Strings without a 'px' suffix should be rejected"
        );
    }

    #[test]
    fn test_de_abs_length_parses_rems() {
        assert_eq!(de_abs_length(json!("1.5rem")).unwrap(), rems(1.5));
    }

    #[test]
    fn test_de_abs_length_rejects_unknown_suffix() {
        assert!(de_abs_length(json!("1.5pt")).is_err());
    }

    #[test]
    fn test_de_def_length_parses_percent() {
        assert_eq!(
            de_def_length(json!("150%")).unwrap(),
            DefLength::Fraction(1.5)
        );
    }

    #[test]
    fn test_de_def_length_rejects_suffix_without_number() {
        assert!(de_def_length(json!("px")).is_err());
    }

    #[test]
    fn test_de_string_or_list_rejects_empty_list() {
        assert!(
            de_string_or_non_empty_list(json!([])).is_err(),
            "An empty font family list should be rejected"
        );
    }
}
