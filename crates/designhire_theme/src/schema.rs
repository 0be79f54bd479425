use std::{ops::Deref, sync::LazyLock, time::Duration};

use gpui::{BoxShadow, FontWeight, Global, Pixels, Rgba, SharedString, point};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    ThemeError,
    deserializers::{
        de_color, de_duration, de_easing, de_em, de_font_weight, de_number, de_pixels, de_shadow,
        de_string_or_non_empty_list,
    },
};

/// The light theme.
pub static THEME: LazyLockTheme = LazyLockTheme::new(|| {
    Theme::from_json(include_str!("../themes/light.json")).expect("bundled light tokens are valid")
});

/// The light theme with the dark palette swapped in. Every other scale is shared.
pub static DARK_THEME: LazyLockTheme = LazyLockTheme::new(|| {
    let colors = ThemeColors::from_json(include_str!("../themes/dark_colors.json"))
        .expect("bundled dark palette is valid");

    THEME.with_colors(colors)
});

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

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub border_radius: ThemeBorderRadius,
    pub shadows: ThemeShadows,
    pub breakpoints: ThemeBreakpoints,
    pub z_index: ThemeZIndex,
    pub animation: ThemeAnimation,
}

impl Theme {
    /// Loads a full token file with the same shape as the bundled `light.json`.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    /// Returns a copy of this theme using `colors` as its palette.
    pub fn with_colors(&self, colors: ThemeColors) -> Theme {
        Theme {
            colors,
            ..self.clone()
        }
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    #[serde(deserialize_with = "de_color")]
    pub bg: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub surface: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub primary: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub accent: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub text: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub muted: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub success: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub error: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub border: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub overlay: Rgba,
}

impl ThemeColors {
    /// Loads a palette on its own, e.g. to build a variant with [`Theme::with_colors`].
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<ThemeColors, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub font_family: ThemeFontFamilies,
    pub font_size: ThemeFontSizes,
    pub font_weight: ThemeFontWeights,
    pub line_height: ThemeLineHeights,
    pub letter_spacing: ThemeLetterSpacings,
}

/// Font stacks, most preferred first.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeFontFamilies {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub base: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub mono: SmallVec<[SharedString; 1]>,
}

impl ThemeFontFamilies {
    /// The preferred family of the base stack. Empty when the stack is empty.
    pub fn base_family(&self) -> SharedString {
        self.base.first().cloned().unwrap_or_default()
    }

    /// The preferred family of the monospace stack. Empty when the stack is empty.
    pub fn mono_family(&self) -> SharedString {
        self.mono.first().cloned().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeFontSizes {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub base: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(rename = "2xl", deserialize_with = "de_pixels")]
    pub xl2: Pixels,
    #[serde(rename = "3xl", deserialize_with = "de_pixels")]
    pub xl3: Pixels,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeFontWeights {
    #[serde(deserialize_with = "de_font_weight")]
    pub normal: FontWeight,
    #[serde(deserialize_with = "de_font_weight")]
    pub medium: FontWeight,
    #[serde(deserialize_with = "de_font_weight")]
    pub semibold: FontWeight,
    #[serde(deserialize_with = "de_font_weight")]
    pub bold: FontWeight,
}

/// Line heights as multiples of the font size.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeLineHeights {
    #[serde(deserialize_with = "de_number")]
    pub tight: f32,
    #[serde(deserialize_with = "de_number")]
    pub normal: f32,
    #[serde(deserialize_with = "de_number")]
    pub relaxed: f32,
}

/// Letter spacings in `em`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeLetterSpacings {
    #[serde(deserialize_with = "de_em")]
    pub tight: f32,
    #[serde(deserialize_with = "de_em")]
    pub normal: f32,
    #[serde(deserialize_with = "de_em")]
    pub wide: f32,
    #[serde(deserialize_with = "de_em")]
    pub wider: f32,
}

/// Spacing scale built on an 8px base unit.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(rename = "2xl", deserialize_with = "de_pixels")]
    pub xl2: Pixels,
    #[serde(rename = "3xl", deserialize_with = "de_pixels")]
    pub xl3: Pixels,
    #[serde(rename = "4xl", deserialize_with = "de_pixels")]
    pub xl4: Pixels,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeBorderRadius {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    /// Large enough to turn any box into a pill.
    #[serde(deserialize_with = "de_pixels")]
    pub full: Pixels,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeShadows {
    #[serde(deserialize_with = "de_shadow")]
    pub sm: ThemeShadow,
    #[serde(deserialize_with = "de_shadow")]
    pub md: ThemeShadow,
    #[serde(deserialize_with = "de_shadow")]
    pub lg: ThemeShadow,
    #[serde(deserialize_with = "de_shadow")]
    pub card: ThemeShadow,
}

/// A single drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeShadow {
    pub offset_x: Pixels,
    pub offset_y: Pixels,
    pub blur_radius: Pixels,
    pub spread_radius: Pixels,
    pub color: Rgba,
}

impl From<ThemeShadow> for BoxShadow {
    fn from(shadow: ThemeShadow) -> Self {
        BoxShadow {
            color: shadow.color.into(),
            offset: point(shadow.offset_x, shadow.offset_y),
            blur_radius: shadow.blur_radius,
            spread_radius: shadow.spread_radius,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeBreakpoints {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeZIndex {
    pub base: u16,
    pub dropdown: u16,
    pub overlay: u16,
    pub modal: u16,
    pub tooltip: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeAnimation {
    pub duration: ThemeDurations,
    pub easing: ThemeEasings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeDurations {
    #[serde(deserialize_with = "de_duration")]
    pub fast: Duration,
    #[serde(deserialize_with = "de_duration")]
    pub normal: Duration,
    #[serde(deserialize_with = "de_duration")]
    pub slow: Duration,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEasings {
    #[serde(deserialize_with = "de_easing")]
    pub ease: CubicBezier,
    #[serde(deserialize_with = "de_easing")]
    pub ease_in: CubicBezier,
    #[serde(deserialize_with = "de_easing")]
    pub ease_out: CubicBezier,
    #[serde(deserialize_with = "de_easing")]
    pub ease_in_out: CubicBezier,
}

/// Control points of a CSS-style `cubic-bezier()` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const LINEAR: CubicBezier = CubicBezier {
        x1: 0.,
        y1: 0.,
        x2: 1.,
        y2: 1.,
    };
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gpui::px;

    use super::*;
    use crate::ColorKind;

    #[test]
    fn test_builtin_themes_parse() {
        assert_eq!(THEME.typography.font_size.base, px(16.));
        assert_eq!(DARK_THEME.typography.font_size.base, px(16.));
    }

    #[test]
    fn test_light_tokens() {
        assert_eq!(THEME.spacing.xs, px(4.));
        assert_eq!(THEME.spacing.sm, px(8.));
        assert_eq!(THEME.spacing.md, px(16.));
        assert_eq!(THEME.spacing.xl4, px(64.));

        assert_eq!(THEME.border_radius.lg, px(14.));
        assert_eq!(THEME.border_radius.full, px(9999.));

        assert_eq!(THEME.typography.font_size.xl3, px(32.));
        assert_eq!(THEME.typography.font_weight.semibold, FontWeight(600.));
        assert_eq!(THEME.typography.line_height.normal, 1.45);
        assert_eq!(&**THEME.typography.font_family.base_family(), "Inter");
        assert_eq!(&**THEME.typography.font_family.mono_family(), "ui-monospace");

        assert_eq!(THEME.z_index.modal, 300);
        assert_eq!(THEME.breakpoints.lg, px(1024.));
        assert_eq!(THEME.animation.duration.normal, Duration::from_millis(200));
        assert_eq!(THEME.shadows.card, THEME.shadows.md);
    }

    #[test]
    fn test_dark_theme_shares_every_scale_but_colors() {
        assert_eq!(DARK_THEME.typography, THEME.typography);
        assert_eq!(DARK_THEME.spacing, THEME.spacing);
        assert_eq!(DARK_THEME.border_radius, THEME.border_radius);
        assert_eq!(DARK_THEME.shadows, THEME.shadows);
        assert_eq!(DARK_THEME.breakpoints, THEME.breakpoints);
        assert_eq!(DARK_THEME.z_index, THEME.z_index);
        assert_eq!(DARK_THEME.animation, THEME.animation);

        assert_ne!(DARK_THEME.colors, THEME.colors);
    }

    #[test]
    fn test_dark_palette_covers_every_color_key() {
        for kind in ColorKind::ALL {
            let light = kind.resolve(&THEME);
            let dark = kind.resolve(&DARK_THEME);
            assert!(light.a > 0. && dark.a > 0., "{kind:?} should be visible");
            assert_ne!(light, dark, "{kind:?} should differ between variants");
        }
    }

    #[test]
    fn test_with_colors_keeps_other_scales() {
        let recolored = THEME.with_colors(DARK_THEME.colors.clone());
        assert_eq!(recolored, *DARK_THEME);
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Theme::from_json("{ \"colors\": {} }").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));

        let err = ThemeColors::from_json(
            r##"{"bg": "#nothex", "surface": "#fff", "primary": "#fff", "accent": "#fff",
                "text": "#fff", "muted": "#fff", "success": "#fff", "error": "#fff",
                "border": "#fff", "overlay": "#fff"}"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("#nothex"));
    }

    #[test]
    fn test_oversized_durations_are_errors() {
        let light = include_str!("../themes/light.json");
        assert!(light.contains(r#""fast": "120ms""#));

        let numeric = light.replace(r#""fast": "120ms""#, r#""fast": 1e30"#);
        assert!(matches!(
            Theme::from_json(&numeric),
            Err(ThemeError::Parse(_))
        ));

        let suffixed = light.replace(r#""fast": "120ms""#, r#""fast": "1e30ms""#);
        let err = Theme::from_json(&suffixed).unwrap_err();
        assert!(err.to_string().contains("1e30ms"));
    }

    #[test]
    fn test_font_family_accepts_single_string() {
        let families: ThemeFontFamilies =
            serde_json::from_str(r#"{"base": "Inter", "mono": ["Menlo", "monospace"]}"#).unwrap();
        assert_eq!(families.base.len(), 1);
        assert_eq!(&**families.mono_family(), "Menlo");

        let empty = serde_json::from_str::<ThemeFontFamilies>(r#"{"base": [], "mono": "Menlo"}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_hand_built_empty_stack_has_no_preferred_family() {
        let families = ThemeFontFamilies {
            base: SmallVec::new(),
            mono: SmallVec::new(),
        };

        assert!(families.base_family().is_empty());
        assert!(families.mono_family().is_empty());
    }

    #[test]
    fn test_shadow_into_box_shadow() {
        let shadow: BoxShadow = THEME.shadows.lg.into();
        assert_eq!(shadow.offset.y, px(12.));
        assert_eq!(shadow.blur_radius, px(32.));
    }
}
