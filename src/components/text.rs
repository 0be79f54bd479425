use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Window, div,
};
use smallvec::SmallVec;

use crate::{
    style::{TextAlignment, TextStyle},
    theme::{ColorKind, FontSizeKind, FontWeightKind, LineHeightKind, Theme, ThemeExt},
};

/// Body text styled from the typography scale.
#[derive(IntoElement)]
pub struct Text {
    text: SharedString,
    children: SmallVec<[AnyElement; 1]>,
    size: FontSizeKind,
    weight: FontWeightKind,
    color: Option<Rgba>,
    align: TextAlignment,
    style: TextStyle,
}

impl Text {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            children: SmallVec::new(),
            size: FontSizeKind::default(),
            weight: FontWeightKind::default(),
            color: None,
            align: TextAlignment::default(),
            style: TextStyle::default(),
        }
    }

    pub fn size(mut self, size: FontSizeKind) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: FontWeightKind) -> Self {
        self.weight = weight;
        self
    }

    /// Any color. Defaults to the theme's text color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn align(mut self, align: TextAlignment) -> Self {
        self.align = align;
        self
    }

    /// Caller overrides, applied after everything else.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn resolve_style(&self, theme: &Theme) -> TextStyle {
        self.resolve_style_with_size(theme, self.size)
    }

    fn resolve_style_with_size(&self, theme: &Theme, size: FontSizeKind) -> TextStyle {
        TextStyle::new()
            .font_family(theme.typography.font_family.base_family())
            .font_size(size.resolve(theme))
            .font_weight(self.weight.resolve(theme))
            .color(self.color.unwrap_or_else(|| ColorKind::Text.resolve(theme)))
            .align(self.align)
            .line_height(LineHeightKind::Normal.resolve(theme))
            .overlay(&self.style)
    }
}

impl RenderOnce for Text {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.resolve_style(cx.get_theme());

        style
            .apply(div())
            .child(self.text)
            .children(self.children)
    }
}

impl ParentElement for Text {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

/// Heading levels, largest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn font_size(self) -> FontSizeKind {
        match self {
            HeadingLevel::H1 => FontSizeKind::Xl3,
            HeadingLevel::H2 => FontSizeKind::Xl2,
            HeadingLevel::H3 => FontSizeKind::Xl,
            HeadingLevel::H4 => FontSizeKind::Lg,
        }
    }
}

/// [`Text`] sized by heading level, semibold unless told otherwise.
#[derive(IntoElement)]
pub struct Heading {
    text: Text,
    level: HeadingLevel,
}

impl Heading {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: Text::new(text).weight(FontWeightKind::Semibold),
            level: HeadingLevel::default(),
        }
    }

    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = level;
        self
    }

    pub fn weight(mut self, weight: FontWeightKind) -> Self {
        self.text = self.text.weight(weight);
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.text = self.text.color(color);
        self
    }

    pub fn align(mut self, align: TextAlignment) -> Self {
        self.text = self.text.align(align);
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.text = self.text.style(style);
        self
    }

    fn into_text(self) -> Text {
        self.text.size(self.level.font_size())
    }

    pub fn resolve_style(&self, theme: &Theme) -> TextStyle {
        self.text.resolve_style_with_size(theme, self.level.font_size())
    }
}

impl RenderOnce for Heading {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.into_text()
    }
}

macro_rules! semantic_text {
    ($(#[$meta:meta])* $name:ident, $color:expr) => {
        $(#[$meta])*
        ///
        /// The color is fixed. A color set through [`TextStyle`] is ignored.
        #[derive(IntoElement)]
        pub struct $name {
            text: SharedString,
            style: TextStyle,
        }

        impl $name {
            pub fn new(text: impl Into<SharedString>) -> Self {
                Self {
                    text: text.into(),
                    style: TextStyle::default(),
                }
            }

            pub fn style(mut self, style: TextStyle) -> Self {
                self.style = TextStyle {
                    color: None,
                    ..style
                };
                self
            }

            fn to_text(&self, theme: &Theme) -> Text {
                Text::new(self.text.clone())
                    .color($color.resolve(theme))
                    .style(self.style.clone())
            }

            pub fn resolve_style(&self, theme: &Theme) -> TextStyle {
                self.to_text(theme).resolve_style(theme)
            }
        }

        impl RenderOnce for $name {
            fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
                self.to_text(cx.get_theme())
            }
        }
    };
}

semantic_text!(
    /// Secondary copy in the muted color.
    MutedText,
    ColorKind::Muted
);

semantic_text!(
    /// Confirmation copy in the success color.
    SuccessText,
    ColorKind::Success
);

semantic_text!(
    /// Validation and failure copy in the error color.
    ErrorText,
    ColorKind::Error
);

#[cfg(test)]
mod tests {
    use gpui::{FontWeight, px};

    use super::*;
    use crate::{
        theme::{DARK_THEME, THEME},
        utils::rgb_a,
    };

    #[test]
    fn test_text_defaults() {
        let style = Text::new("Hello").resolve_style(&THEME);

        assert_eq!(style.font_family.as_deref().map(|s| &**s), Some("Inter"));
        assert_eq!(style.font_size, Some(px(16.)));
        assert_eq!(style.font_weight, Some(FontWeight(400.)));
        assert_eq!(style.color, Some(THEME.colors.text));
        assert_eq!(style.align, Some(TextAlignment::Left));
        assert_eq!(style.line_height, Some(1.45));
    }

    #[test]
    fn test_text_resolves_tokens() {
        let style = Text::new("Hello")
            .size(FontSizeKind::Sm)
            .weight(FontWeightKind::Bold)
            .align(TextAlignment::Right)
            .color(rgb_a(0x123456, 1.))
            .resolve_style(&THEME);

        assert_eq!(style.font_size, Some(px(14.)));
        assert_eq!(style.font_weight, Some(FontWeight(700.)));
        assert_eq!(style.align, Some(TextAlignment::Right));
        assert_eq!(style.color, Some(rgb_a(0x123456, 1.)));
    }

    #[test]
    fn test_text_caller_style_wins() {
        let style = Text::new("Hello")
            .size(FontSizeKind::Sm)
            .style(TextStyle::new().font_size(px(40.)).color(rgb_a(0xFF0000, 1.)))
            .resolve_style(&THEME);

        assert_eq!(style.font_size, Some(px(40.)));
        assert_eq!(style.color, Some(rgb_a(0xFF0000, 1.)));
        assert_eq!(style.font_weight, Some(FontWeight(400.)));
    }

    #[test]
    fn test_text_follows_theme_variant() {
        let style = Text::new("Hello").resolve_style(&DARK_THEME);
        assert_eq!(style.color, Some(DARK_THEME.colors.text));
    }

    #[test]
    fn test_heading_levels() {
        let sizes = [
            (HeadingLevel::H1, 32.),
            (HeadingLevel::H2, 28.),
            (HeadingLevel::H3, 22.),
            (HeadingLevel::H4, 18.),
        ];

        for (level, size) in sizes {
            let style = Heading::new("Title").level(level).resolve_style(&THEME);
            assert_eq!(style.font_size, Some(px(size)), "{level:?}");
            assert_eq!(style.font_weight, Some(FontWeight(600.)));
        }

        let default = Heading::new("Title").resolve_style(&THEME);
        assert_eq!(default.font_size, Some(px(28.)));
    }

    #[test]
    fn test_heading_weight_and_style_override() {
        let style = Heading::new("Title")
            .weight(FontWeightKind::Bold)
            .style(TextStyle::new().font_size(px(50.)))
            .resolve_style(&THEME);

        assert_eq!(style.font_weight, Some(FontWeight(700.)));
        assert_eq!(style.font_size, Some(px(50.)));
    }

    #[test]
    fn test_semantic_text_colors() {
        assert_eq!(
            MutedText::new("a").resolve_style(&THEME).color,
            Some(THEME.colors.muted)
        );
        assert_eq!(
            SuccessText::new("a").resolve_style(&THEME).color,
            Some(THEME.colors.success)
        );
        assert_eq!(
            ErrorText::new("a").resolve_style(&THEME).color,
            Some(THEME.colors.error)
        );
    }

    #[test]
    fn test_semantic_text_keeps_style_but_not_color() {
        let style = ErrorText::new("Required")
            .style(
                TextStyle::new()
                    .font_size(px(12.))
                    .color(rgb_a(0x00FF00, 1.)),
            )
            .resolve_style(&THEME);

        assert_eq!(style.font_size, Some(px(12.)));
        assert_eq!(style.color, Some(THEME.colors.error));
    }
}
