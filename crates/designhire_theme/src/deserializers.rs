use std::time::Duration;

use gpui::{FontWeight, Pixels, Rgba, SharedString, px};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{
    CubicBezier, ThemeError, ThemeShadow, parse_color, parse_cubic_bezier, parse_duration, parse_em,
    parse_pixels, parse_shadow,
};

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("font family list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => parse_pixels(&string).map_err(D::Error::custom),
        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

pub fn de_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;
    parse_color(&string).map_err(D::Error::custom)
}

pub fn de_font_weight<'de, D>(deserializer: D) -> Result<FontWeight, D::Error>
where
    D: Deserializer<'de>,
{
    let weight = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => string
            .trim()
            .parse::<f32>()
            .map_err(|_| D::Error::custom(format!("invalid font weight \"{string}\"")))?,
        StringOrFloat::Float(weight) => weight,
    };

    if !(1.0..=1000.0).contains(&weight) {
        return Err(D::Error::custom("font weight must be between 1 and 1000"));
    }

    Ok(FontWeight(weight))
}

pub fn de_number<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => string
            .trim()
            .parse::<f32>()
            .map_err(|_| D::Error::custom(format!("expected a number, found \"{string}\""))),
        StringOrFloat::Float(number) => Ok(number),
    }
}

pub fn de_em<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => parse_em(&string).map_err(D::Error::custom),
        StringOrFloat::Float(em) => Ok(em),
    }
}

pub fn de_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => parse_duration(&string).map_err(D::Error::custom),
        // Bare numbers are milliseconds.
        StringOrFloat::Float(millis) if millis >= 0. => {
            Duration::try_from_secs_f64(f64::from(millis) / 1000.)
                .map_err(|_| D::Error::custom(ThemeError::InvalidDuration(millis.to_string())))
        }
        StringOrFloat::Float(_) => Err(D::Error::custom("duration can't be negative")),
    }
}

pub fn de_easing<'de, D>(deserializer: D) -> Result<CubicBezier, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;
    parse_cubic_bezier(&string).map_err(D::Error::custom)
}

pub fn de_shadow<'de, D>(deserializer: D) -> Result<ThemeShadow, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;
    parse_shadow(&string).map_err(D::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
