use std::rc::Rc;

use gpui::{
    App, InteractiveElement, IntoElement, MouseButton, ParentElement, RenderOnce, Rgba,
    SharedString, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    components::Text,
    extensions::press::{PressBehavior, PressBehaviorExt, PressHandler, Pressable},
    style::{Padding, SelfAlign, TextStyle, ViewStyle},
    theme::{ColorKind, FontSizeKind, RadiusKind, Theme, ThemeExt},
    utils::{RgbaExt, rgb_a},
};

/// Alpha byte appended to tinted tag backgrounds, roughly 8%.
const TINT_ALPHA: u8 = 0x15;

/// A small pill-shaped label.
#[derive(IntoElement)]
pub struct Tag {
    label: SharedString,
    variant: TagVariant,
    size: TagSize,
    on_press: Option<PressHandler>,
    press_behavior: PressBehavior,
    style: ViewStyle,
}

impl Tag {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: TagVariant::default(),
            size: TagSize::default(),
            on_press: None,
            press_behavior: PressBehavior::default(),
            style: ViewStyle::default(),
        }
    }

    pub fn variant(mut self, variant: TagVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: TagSize) -> Self {
        self.size = size;
        self
    }

    /// Called when a left mouse button is released over the tag.
    pub fn on_press(mut self, on_press: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    pub fn style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn container_style(&self, theme: &Theme) -> ViewStyle {
        ViewStyle::new()
            .rounded(RadiusKind::Full.resolve(theme))
            .align_self(SelfAlign::Start)
            .overlay(&self.variant.style(theme))
            .overlay(&ViewStyle::new().padding(self.size.padding()))
            .overlay(&self.style)
    }

    pub fn text_color(&self, theme: &Theme) -> Rgba {
        self.variant.text_color(theme)
    }

    pub fn label_size(&self) -> FontSizeKind {
        self.size.label_size()
    }

    fn label(&self, theme: &Theme) -> Text {
        Text::new(self.label.clone())
            .size(self.label_size())
            .color(self.text_color(theme))
    }

    pub fn label_style(&self, theme: &Theme) -> TextStyle {
        self.label(theme).resolve_style(theme)
    }
}

impl Pressable for Tag {
    fn press_handler(&self) -> Option<&PressHandler> {
        self.on_press.as_ref()
    }
}

impl PressBehaviorExt for Tag {
    fn press_behavior_mut(&mut self) -> &mut PressBehavior {
        &mut self.press_behavior
    }
}

impl RenderOnce for Tag {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.get_theme();
        let style = self.container_style(theme);
        let label = self.label(theme);
        let is_interactive = self.is_interactive();
        let this = Rc::new(self);

        style
            .apply(div().flex().flex_row())
            .child(label)
            .when(is_interactive, |el| {
                el.cursor_pointer()
                    .on_mouse_up(MouseButton::Left, move |_event, window, cx| {
                        this.press_behavior.apply(cx);
                        this.press(window, cx);
                    })
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagVariant {
    #[default]
    Default,
    Primary,
    Accent,
    Outline,
}

impl TagVariant {
    pub fn style(&self, theme: &Theme) -> ViewStyle {
        match self {
            TagVariant::Default => ViewStyle::new().bg(ColorKind::Bg.resolve(theme)),
            TagVariant::Primary => {
                ViewStyle::new().bg(ColorKind::Primary.resolve(theme).hex_alpha(TINT_ALPHA))
            }
            TagVariant::Accent => {
                ViewStyle::new().bg(ColorKind::Accent.resolve(theme).hex_alpha(TINT_ALPHA))
            }
            TagVariant::Outline => ViewStyle::new()
                .bg(rgb_a(0x000000, 0.))
                .border(px(1.), ColorKind::Border.resolve(theme)),
        }
    }

    pub fn text_color(&self, theme: &Theme) -> Rgba {
        match self {
            TagVariant::Primary => ColorKind::Primary.resolve(theme),
            TagVariant::Accent => ColorKind::Accent.resolve(theme),
            TagVariant::Default | TagVariant::Outline => ColorKind::Text.resolve(theme),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagSize {
    Sm,
    #[default]
    Md,
}

impl TagSize {
    pub fn padding(&self) -> Padding {
        match self {
            TagSize::Sm => Padding::new(px(4.), px(12.)),
            TagSize::Md => Padding::new(px(6.), px(16.)),
        }
    }

    pub fn label_size(&self) -> FontSizeKind {
        match self {
            TagSize::Sm => FontSizeKind::Xs,
            TagSize::Md => FontSizeKind::Sm,
        }
    }
}

/// An accent [`Tag`] for listing skills. Variant and size are fixed.
#[derive(IntoElement)]
pub struct SkillTag {
    tag: Tag,
}

impl SkillTag {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            tag: Tag::new(label).variant(TagVariant::Accent).size(TagSize::Md),
        }
    }

    pub fn on_press(mut self, on_press: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.tag = self.tag.on_press(on_press);
        self
    }

    pub fn style(mut self, style: ViewStyle) -> Self {
        self.tag = self.tag.style(style);
        self
    }

    pub fn tag(self) -> Tag {
        self.tag
    }
}

impl RenderOnce for SkillTag {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.tag
    }
}

/// A [`Tag`] that shows whether a filter is applied.
///
/// `active` belongs to the caller. The tag only reflects it.
#[derive(IntoElement)]
pub struct FilterTag {
    tag: Tag,
    active: bool,
}

impl FilterTag {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            tag: Tag::new(label).size(TagSize::Md),
            active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_press(mut self, on_press: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.tag = self.tag.on_press(on_press);
        self
    }

    pub fn style(mut self, style: ViewStyle) -> Self {
        self.tag = self.tag.style(style);
        self
    }

    pub fn tag(self) -> Tag {
        let variant = if self.active {
            TagVariant::Primary
        } else {
            TagVariant::Outline
        };

        self.tag.variant(variant)
    }
}

impl RenderOnce for FilterTag {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.tag()
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use gpui::{Modifiers, TestAppContext};

    use super::*;
    use crate::components::window_harness::{INSIDE, OUTSIDE, PressCounter, fixed_size, mount};

    #[gpui::test]
    fn test_left_release_presses_once(cx: &mut TestAppContext) {
        let presses = PressCounter::default();
        let mut cx = mount(cx, {
            let presses = presses.clone();
            move || {
                FilterTag::new("Remote")
                    .active(true)
                    .style(fixed_size())
                    .on_press(presses.handler())
            }
        });

        cx.simulate_mouse_move(INSIDE, None, Modifiers::none());
        cx.simulate_mouse_up(INSIDE, MouseButton::Left, Modifiers::none());
        assert_eq!(presses.count(), 1);

        cx.simulate_mouse_up(INSIDE, MouseButton::Right, Modifiers::none());
        cx.simulate_mouse_up(OUTSIDE, MouseButton::Left, Modifiers::none());
        assert_eq!(presses.count(), 1);
    }

    #[gpui::test]
    fn test_skill_tag_forwards_press(cx: &mut TestAppContext) {
        let presses = PressCounter::default();
        let mut cx = mount(cx, {
            let presses = presses.clone();
            move || {
                SkillTag::new("Figma")
                    .style(fixed_size())
                    .on_press(presses.handler())
            }
        });

        cx.simulate_click(INSIDE, Modifiers::none());
        assert_eq!(presses.count(), 1);
    }
}
