//! Plain style records that components compose before touching gpui.
//!
//! A component builds its final style by overlaying fragments in order:
//! base, variant, size, state, then whatever the caller passed in. Later
//! fragments win on every field they set.

use std::time::Duration;

use gpui::{AlignSelf, FontWeight, Pixels, Rgba, SharedString, Styled, relative};

use crate::theme::{CubicBezier, ThemeShadow};

/// A length along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    /// Sized by content.
    Auto,
    Px(Pixels),
    /// Percentage of the parent, `0.0..=100.0`.
    Percent(f32),
}

impl Extent {
    pub const FULL: Extent = Extent::Percent(100.);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub vertical: Pixels,
    pub horizontal: Pixels,
}

impl Padding {
    pub fn new(vertical: impl Into<Pixels>, horizontal: impl Into<Pixels>) -> Self {
        Self {
            vertical: vertical.into(),
            horizontal: horizontal.into(),
        }
    }

    pub fn all(padding: impl Into<Pixels>) -> Self {
        let padding = padding.into();
        Self::new(padding, padding)
    }
}

/// How an element sizes itself on its parent's cross axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelfAlign {
    /// Shrink to content and sit at the start.
    Start,
    Stretch,
}

/// A width animation hint. Hosts that can't animate may ignore it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthTransition {
    pub duration: Duration,
    pub easing: CubicBezier,
}

/// Box styling: background, border, shape, spacing and size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewStyle {
    pub background: Option<Rgba>,
    pub border_width: Option<Pixels>,
    pub border_color: Option<Rgba>,
    pub corner_radius: Option<Pixels>,
    pub padding: Option<Padding>,
    pub opacity: Option<f32>,
    pub width: Option<Extent>,
    pub height: Option<Extent>,
    pub align_self: Option<SelfAlign>,
    pub center_content: Option<bool>,
    pub clip_overflow: Option<bool>,
    pub shadow: Option<ThemeShadow>,
    /// Flat elevation for hosts without shadow primitives. gpui draws `shadow`.
    pub elevation: Option<f32>,
    pub width_transition: Option<WidthTransition>,
}

impl ViewStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bg(mut self, color: impl Into<Rgba>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn border(mut self, width: impl Into<Pixels>, color: impl Into<Rgba>) -> Self {
        self.border_width = Some(width.into());
        self.border_color = Some(color.into());
        self
    }

    pub fn border_width(mut self, width: impl Into<Pixels>) -> Self {
        self.border_width = Some(width.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<Rgba>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn rounded(mut self, radius: impl Into<Pixels>) -> Self {
        self.corner_radius = Some(radius.into());
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn width(mut self, width: Extent) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Extent) -> Self {
        self.height = Some(height);
        self
    }

    pub fn align_self(mut self, align: SelfAlign) -> Self {
        self.align_self = Some(align);
        self
    }

    pub fn center_content(mut self) -> Self {
        self.center_content = Some(true);
        self
    }

    pub fn clip_overflow(mut self) -> Self {
        self.clip_overflow = Some(true);
        self
    }

    pub fn shadow(mut self, shadow: ThemeShadow, elevation: f32) -> Self {
        self.shadow = Some(shadow);
        self.elevation = Some(elevation);
        self
    }

    pub fn width_transition(mut self, transition: WidthTransition) -> Self {
        self.width_transition = Some(transition);
        self
    }

    /// Layers `other` on top of `self`. Fields set in `other` win.
    pub fn overlay(mut self, other: &ViewStyle) -> Self {
        self.background = other.background.or(self.background);
        self.border_width = other.border_width.or(self.border_width);
        self.border_color = other.border_color.or(self.border_color);
        self.corner_radius = other.corner_radius.or(self.corner_radius);
        self.padding = other.padding.or(self.padding);
        self.opacity = other.opacity.or(self.opacity);
        self.width = other.width.or(self.width);
        self.height = other.height.or(self.height);
        self.align_self = other.align_self.or(self.align_self);
        self.center_content = other.center_content.or(self.center_content);
        self.clip_overflow = other.clip_overflow.or(self.clip_overflow);
        self.shadow = other.shadow.or(self.shadow);
        self.elevation = other.elevation.or(self.elevation);
        self.width_transition = other.width_transition.or(self.width_transition);
        self
    }

    /// Writes this record onto a gpui element.
    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        if let Some(background) = self.background {
            element = element.bg(background);
        }

        if let Some(width) = self.border_width {
            let widths = &mut element.style().border_widths;
            widths.top = Some(width.into());
            widths.right = Some(width.into());
            widths.bottom = Some(width.into());
            widths.left = Some(width.into());
        }

        if let Some(color) = self.border_color {
            element = element.border_color(color);
        }

        if let Some(radius) = self.corner_radius {
            element = element.rounded(radius);
        }

        if let Some(padding) = self.padding {
            element = element.px(padding.horizontal).py(padding.vertical);
        }

        if let Some(opacity) = self.opacity {
            element = element.opacity(opacity);
        }

        if let Some(width) = self.width {
            element = match width {
                Extent::Auto => element.w_auto(),
                Extent::Px(width) => element.w(width),
                Extent::Percent(percent) => element.w(relative(percent / 100.)),
            };
        }

        if let Some(height) = self.height {
            element = match height {
                Extent::Auto => element.h_auto(),
                Extent::Px(height) => element.h(height),
                Extent::Percent(percent) => element.h(relative(percent / 100.)),
            };
        }

        if let Some(align) = self.align_self {
            element.style().align_self = Some(match align {
                SelfAlign::Start => AlignSelf::FlexStart,
                SelfAlign::Stretch => AlignSelf::Stretch,
            });
        }

        if self.center_content == Some(true) {
            element = element.flex().items_center().justify_center();
        }

        if self.clip_overflow == Some(true) {
            element = element.overflow_hidden();
        }

        if let Some(shadow) = self.shadow {
            element = element.shadow(vec![shadow.into()]);
        }

        element
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Text styling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<SharedString>,
    pub font_size: Option<Pixels>,
    pub font_weight: Option<FontWeight>,
    pub color: Option<Rgba>,
    pub align: Option<TextAlignment>,
    /// Multiple of the font size.
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(mut self, family: impl Into<SharedString>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_size(mut self, size: impl Into<Pixels>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn align(mut self, align: TextAlignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Layers `other` on top of `self`. Fields set in `other` win.
    pub fn overlay(mut self, other: &TextStyle) -> Self {
        self.font_family = other.font_family.clone().or(self.font_family.take());
        self.font_size = other.font_size.or(self.font_size);
        self.font_weight = other.font_weight.or(self.font_weight);
        self.color = other.color.or(self.color);
        self.align = other.align.or(self.align);
        self.line_height = other.line_height.or(self.line_height);
        self
    }

    /// Writes this record onto a gpui element.
    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        if let Some(family) = self.font_family.clone() {
            element = element.font_family(family);
        }

        if let Some(size) = self.font_size {
            element = element.text_size(size);
        }

        if let Some(weight) = self.font_weight {
            element = element.font_weight(weight);
        }

        if let Some(color) = self.color {
            element = element.text_color(color);
        }

        if let Some(align) = self.align {
            element = match align {
                TextAlignment::Left => element.text_left(),
                TextAlignment::Center => element.text_center(),
                TextAlignment::Right => element.text_right(),
            };
        }

        if let Some(line_height) = self.line_height {
            element = element.line_height(relative(line_height));
        }

        element
    }
}
