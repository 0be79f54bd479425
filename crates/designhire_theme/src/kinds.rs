#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::time::Duration;

use enum_assoc::Assoc;
use gpui::{FontWeight, Pixels, Rgba};

use crate::{CubicBezier, Theme, ThemeShadow};

/// Semantic color tokens.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Rgba)]
pub enum ColorKind {
    /// App background.
    #[assoc(resolve = theme.colors.bg)]
    Bg,
    /// Raised surfaces such as cards.
    #[assoc(resolve = theme.colors.surface)]
    Surface,
    #[assoc(resolve = theme.colors.primary)]
    Primary,
    #[assoc(resolve = theme.colors.accent)]
    Accent,
    #[assoc(resolve = theme.colors.text)]
    Text,
    #[assoc(resolve = theme.colors.muted)]
    Muted,
    #[assoc(resolve = theme.colors.success)]
    Success,
    #[assoc(resolve = theme.colors.error)]
    Error,
    #[assoc(resolve = theme.colors.border)]
    Border,
    /// Scrim drawn behind modals.
    #[assoc(resolve = theme.colors.overlay)]
    Overlay,
}

impl ColorKind {
    pub const ALL: [ColorKind; 10] = [
        ColorKind::Bg,
        ColorKind::Surface,
        ColorKind::Primary,
        ColorKind::Accent,
        ColorKind::Text,
        ColorKind::Muted,
        ColorKind::Success,
        ColorKind::Error,
        ColorKind::Border,
        ColorKind::Overlay,
    ];
}

/// Font size scale.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum FontSizeKind {
    #[assoc(resolve = theme.typography.font_size.xs)]
    Xs,
    #[assoc(resolve = theme.typography.font_size.sm)]
    Sm,
    #[default]
    #[assoc(resolve = theme.typography.font_size.base)]
    Base,
    #[assoc(resolve = theme.typography.font_size.lg)]
    Lg,
    #[assoc(resolve = theme.typography.font_size.xl)]
    Xl,
    #[assoc(resolve = theme.typography.font_size.xl2)]
    Xl2,
    #[assoc(resolve = theme.typography.font_size.xl3)]
    Xl3,
}

/// Font weight scale.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> FontWeight)]
pub enum FontWeightKind {
    #[default]
    #[assoc(resolve = theme.typography.font_weight.normal)]
    Normal,
    #[assoc(resolve = theme.typography.font_weight.medium)]
    Medium,
    #[assoc(resolve = theme.typography.font_weight.semibold)]
    Semibold,
    #[assoc(resolve = theme.typography.font_weight.bold)]
    Bold,
}

/// Line height multipliers.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
pub enum LineHeightKind {
    #[assoc(resolve = theme.typography.line_height.tight)]
    Tight,
    #[default]
    #[assoc(resolve = theme.typography.line_height.normal)]
    Normal,
    #[assoc(resolve = theme.typography.line_height.relaxed)]
    Relaxed,
}

/// Letter spacing in `em`.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
pub enum LetterSpacingKind {
    #[assoc(resolve = theme.typography.letter_spacing.tight)]
    Tight,
    #[default]
    #[assoc(resolve = theme.typography.letter_spacing.normal)]
    Normal,
    #[assoc(resolve = theme.typography.letter_spacing.wide)]
    Wide,
    #[assoc(resolve = theme.typography.letter_spacing.wider)]
    Wider,
}

/// Spacing scale.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum SpacingKind {
    #[assoc(resolve = theme.spacing.xs)]
    Xs,
    #[assoc(resolve = theme.spacing.sm)]
    Sm,
    #[assoc(resolve = theme.spacing.md)]
    Md,
    #[assoc(resolve = theme.spacing.lg)]
    Lg,
    #[assoc(resolve = theme.spacing.xl)]
    Xl,
    #[assoc(resolve = theme.spacing.xl2)]
    Xl2,
    #[assoc(resolve = theme.spacing.xl3)]
    Xl3,
    #[assoc(resolve = theme.spacing.xl4)]
    Xl4,
}

/// Corner radius scale.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum RadiusKind {
    #[assoc(resolve = theme.border_radius.sm)]
    Sm,
    #[assoc(resolve = theme.border_radius.md)]
    Md,
    #[assoc(resolve = theme.border_radius.lg)]
    Lg,
    #[assoc(resolve = theme.border_radius.xl)]
    Xl,
    /// Pill shape.
    #[assoc(resolve = theme.border_radius.full)]
    Full,
}

/// Shadow presets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> ThemeShadow)]
pub enum ShadowKind {
    #[assoc(resolve = theme.shadows.sm)]
    Sm,
    #[assoc(resolve = theme.shadows.md)]
    Md,
    #[assoc(resolve = theme.shadows.lg)]
    Lg,
    #[assoc(resolve = theme.shadows.card)]
    Card,
}

/// Minimum viewport widths.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum BreakpointKind {
    #[assoc(resolve = theme.breakpoints.sm)]
    Sm,
    #[assoc(resolve = theme.breakpoints.md)]
    Md,
    #[assoc(resolve = theme.breakpoints.lg)]
    Lg,
    #[assoc(resolve = theme.breakpoints.xl)]
    Xl,
}

/// Stacking layers.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> u16)]
pub enum ZIndexKind {
    #[assoc(resolve = theme.z_index.base)]
    Base,
    #[assoc(resolve = theme.z_index.dropdown)]
    Dropdown,
    #[assoc(resolve = theme.z_index.overlay)]
    Overlay,
    #[assoc(resolve = theme.z_index.modal)]
    Modal,
    #[assoc(resolve = theme.z_index.tooltip)]
    Tooltip,
}

#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Duration)]
pub enum DurationKind {
    #[assoc(resolve = theme.animation.duration.fast)]
    Fast,
    #[assoc(resolve = theme.animation.duration.normal)]
    Normal,
    #[assoc(resolve = theme.animation.duration.slow)]
    Slow,
}

#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> CubicBezier)]
pub enum EasingKind {
    #[assoc(resolve = CubicBezier::LINEAR)]
    Linear,
    #[assoc(resolve = theme.animation.easing.ease)]
    Ease,
    #[assoc(resolve = theme.animation.easing.ease_in)]
    EaseIn,
    #[assoc(resolve = theme.animation.easing.ease_out)]
    EaseOut,
    #[assoc(resolve = theme.animation.easing.ease_in_out)]
    EaseInOut,
}
