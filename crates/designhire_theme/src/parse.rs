use std::time::Duration;

use gpui::{Pixels, Rgba, px, rgb, rgba};

use crate::{CubicBezier, ThemeError, ThemeShadow};

/// Parses a color written as `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` or `transparent`.
pub fn parse_color(value: &str) -> Result<Rgba, ThemeError> {
    let trimmed = value.trim();
    let invalid = || ThemeError::InvalidColor(value.to_string());

    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba {
            r: 0.,
            g: 0.,
            b: 0.,
            a: 0.,
        });
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        return match hex.len() {
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
                Ok(rgb(value))
            }
            6 => Ok(rgb(u32::from_str_radix(hex, 16).map_err(|_| invalid())?)),
            8 => Ok(rgba(u32::from_str_radix(hex, 16).map_err(|_| invalid())?)),
            _ => Err(invalid()),
        };
    }

    let (args, has_alpha) = if let Some(args) = trimmed
        .strip_prefix("rgba(")
        .and_then(|s| s.strip_suffix(')'))
    {
        (args, true)
    } else if let Some(args) = trimmed
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
    {
        (args, false)
    } else {
        return Err(invalid());
    };

    let components = args
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match (has_alpha, components.as_slice()) {
        (true, [r, g, b, a]) => Ok(Rgba {
            r: r / 255.,
            g: g / 255.,
            b: b / 255.,
            a: a.clamp(0., 1.),
        }),
        (false, [r, g, b]) => Ok(Rgba {
            r: r / 255.,
            g: g / 255.,
            b: b / 255.,
            a: 1.,
        }),
        _ => Err(invalid()),
    }
}

/// Parses `"16px"` or a bare number into pixels.
pub fn parse_pixels(value: &str) -> Result<Pixels, ThemeError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);

    number
        .trim()
        .parse::<f32>()
        .map(px)
        .map_err(|_| ThemeError::InvalidLength(value.to_string()))
}

/// Parses a letter spacing in `em`. A bare number is read as `em` too.
pub fn parse_em(value: &str) -> Result<f32, ThemeError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("em").unwrap_or(trimmed);

    number
        .trim()
        .parse::<f32>()
        .map_err(|_| ThemeError::InvalidLength(value.to_string()))
}

/// Parses `"200ms"` or `"0.2s"`.
pub fn parse_duration(value: &str) -> Result<Duration, ThemeError> {
    let trimmed = value.trim();
    let invalid = || ThemeError::InvalidDuration(value.to_string());

    let (number, scale) = if let Some(ms) = trimmed.strip_suffix("ms") {
        (ms, 1.)
    } else if let Some(secs) = trimmed.strip_suffix('s') {
        (secs, 1000.)
    } else {
        return Err(invalid());
    };

    let millis = number.trim().parse::<f64>().map_err(|_| invalid())? * scale;

    if !millis.is_finite() || millis < 0. {
        return Err(invalid());
    }

    Duration::try_from_secs_f64(millis / 1000.).map_err(|_| invalid())
}

/// Parses `cubic-bezier(x1, y1, x2, y2)`.
pub fn parse_cubic_bezier(value: &str) -> Result<CubicBezier, ThemeError> {
    let invalid = || ThemeError::InvalidEasing(value.to_string());

    let args = value
        .trim()
        .strip_prefix("cubic-bezier(")
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let points = args
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match points.as_slice() {
        [x1, y1, x2, y2] => Ok(CubicBezier {
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
        }),
        _ => Err(invalid()),
    }
}

/// Parses a shadow written as `<offset-x> <offset-y> [blur] [spread] <color>`.
pub fn parse_shadow(value: &str) -> Result<ThemeShadow, ThemeError> {
    let trimmed = value.trim();
    let invalid = || ThemeError::InvalidShadow(value.to_string());

    let color_start = ["rgba(", "rgb(", "#"]
        .iter()
        .filter_map(|prefix| trimmed.find(prefix))
        .min()
        .ok_or_else(invalid)?;

    let (lengths, color) = trimmed.split_at(color_start);
    let color = parse_color(color).map_err(|_| invalid())?;

    let lengths = lengths
        .split_whitespace()
        .map(parse_pixels)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    let (offset_x, offset_y, blur_radius, spread_radius) = match lengths.as_slice() {
        [x, y] => (*x, *y, px(0.), px(0.)),
        [x, y, blur] => (*x, *y, *blur, px(0.)),
        [x, y, blur, spread] => (*x, *y, *blur, *spread),
        _ => return Err(invalid()),
    };

    Ok(ThemeShadow {
        offset_x,
        offset_y,
        blur_radius,
        spread_radius,
        color,
    })
}
