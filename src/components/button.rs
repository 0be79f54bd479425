use std::rc::Rc;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
    px,
};

use crate::{
    components::{Spinner, Text},
    extensions::press::{PressBehavior, PressBehaviorExt, PressHandler, Pressable},
    style::{Extent, Padding, ViewStyle},
    theme::{ColorKind, FontWeightKind, RadiusKind, Theme, ThemeExt},
    utils::{ElementIdExt, rgb_a},
};

const DISABLED_OPACITY: f32 = 0.5;
const PRESSED_OPACITY: f32 = 0.7;
const OUTLINE_BORDER_WIDTH: f32 = 2.;

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    on_press: PressHandler,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    press_behavior: PressBehavior,
    style: ViewStyle,
}

impl Button {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        on_press: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_press: Box::new(on_press),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            full_width: false,
            press_behavior: PressBehavior::default(),
            style: ViewStyle::default(),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Swaps the label for a spinner and stops delivering presses.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Caller overrides, applied after everything else.
    pub fn style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn text_color(&self, theme: &Theme) -> Rgba {
        self.variant.as_granular(theme).text_color
    }

    pub fn container_style(&self, theme: &Theme) -> ViewStyle {
        let variant = self.variant.as_granular(theme);

        let base = ViewStyle::new()
            .rounded(RadiusKind::Full.resolve(theme))
            .center_content()
            .border_width(px(variant.border_width));

        let mut variant_style = ViewStyle::new().bg(variant.bg_color);
        if let Some(border_color) = variant.border_color {
            variant_style = variant_style.border_color(border_color);
        }

        let state = ViewStyle::new()
            .opacity(if self.is_interactive() {
                1.
            } else {
                DISABLED_OPACITY
            })
            .width(if self.full_width {
                Extent::FULL
            } else {
                Extent::Auto
            });

        base.overlay(&variant_style)
            .overlay(&ViewStyle::new().padding(self.size.padding()))
            .overlay(&state)
            .overlay(&self.style)
    }

    /// What sits inside the button. The label and the spinner are never shown together.
    pub fn content(&self, theme: &Theme) -> ButtonContent {
        let color = self.text_color(theme);

        if self.loading {
            ButtonContent::Spinner { color }
        } else {
            ButtonContent::Label {
                text: self.label.clone(),
                color,
            }
        }
    }
}

impl Pressable for Button {
    fn press_handler(&self) -> Option<&PressHandler> {
        Some(&self.on_press)
    }

    fn is_interactive(&self) -> bool {
        !(self.disabled || self.loading)
    }
}

impl PressBehaviorExt for Button {
    fn press_behavior_mut(&mut self) -> &mut PressBehavior {
        &mut self.press_behavior
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.get_theme();
        let style = self.container_style(theme);
        let content = self.content(theme);
        let is_interactive = self.is_interactive();
        let id = self.id.clone();
        let this = Rc::new(self);

        style
            .apply(div().id(id.clone()).flex().flex_row())
            .map(|el| match content {
                ButtonContent::Label { text, color } => el.child(
                    Text::new(text)
                        .weight(FontWeightKind::Semibold)
                        .color(color),
                ),
                ButtonContent::Spinner { color } => {
                    el.child(Spinner::new(id.with_suffix("spinner"), color))
                }
            })
            .when(!is_interactive, |el| el.cursor(CursorStyle::OperationNotAllowed))
            .when(is_interactive, |el| {
                el.cursor_pointer()
                    .active(|style| style.opacity(PRESSED_OPACITY))
                    .on_click(move |_event, window, cx| {
                        this.press_behavior.apply(cx);
                        this.press(window, cx);
                    })
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ButtonContent {
    Label { text: SharedString, color: Rgba },
    Spinner { color: Rgba },
}

/// Resolved colors for one button variant.
pub struct GranularButtonVariant {
    pub bg_color: Rgba,
    pub border_color: Option<Rgba>,
    pub border_width: f32,
    pub text_color: Rgba,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn as_granular(&self, theme: &Theme) -> GranularButtonVariant {
        let primary = ColorKind::Primary.resolve(theme);
        let transparent = rgb_a(0x000000, 0.);
        let white = rgb_a(0xFFFFFF, 1.);

        match self {
            ButtonVariant::Primary => GranularButtonVariant {
                bg_color: primary,
                border_color: None,
                border_width: 0.,
                text_color: white,
            },

            ButtonVariant::Secondary => GranularButtonVariant {
                bg_color: ColorKind::Accent.resolve(theme),
                border_color: None,
                border_width: 0.,
                text_color: white,
            },

            ButtonVariant::Outline => GranularButtonVariant {
                bg_color: transparent,
                border_color: Some(primary),
                border_width: OUTLINE_BORDER_WIDTH,
                text_color: primary,
            },

            ButtonVariant::Ghost => GranularButtonVariant {
                bg_color: transparent,
                border_color: None,
                border_width: 0.,
                text_color: primary,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn padding(&self) -> Padding {
        match self {
            ButtonSize::Sm => Padding::new(px(8.), px(16.)),
            ButtonSize::Md => Padding::new(px(12.), px(24.)),
            ButtonSize::Lg => Padding::new(px(16.), px(32.)),
        }
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use gpui::{Modifiers, TestAppContext};

    use super::*;
    use crate::components::window_harness::{INSIDE, OUTSIDE, PressCounter, fixed_size, mount};

    fn mount_button(
        cx: &mut TestAppContext,
        presses: &PressCounter,
        configure: fn(Button) -> Button,
    ) -> gpui::VisualTestContext {
        let presses = presses.clone();
        mount(cx, move || {
            configure(Button::new("button", "Continue", presses.handler()).style(fixed_size()))
        })
    }

    #[gpui::test]
    fn test_click_presses_once(cx: &mut TestAppContext) {
        let presses = PressCounter::default();
        let mut cx = mount_button(cx, &presses, |button| button);

        cx.simulate_click(INSIDE, Modifiers::none());
        assert_eq!(presses.count(), 1);

        cx.simulate_click(OUTSIDE, Modifiers::none());
        assert_eq!(presses.count(), 1);
    }

    #[gpui::test]
    fn test_click_ignored_while_disabled(cx: &mut TestAppContext) {
        let presses = PressCounter::default();
        let mut cx = mount_button(cx, &presses, |button| button.disabled(true));

        cx.simulate_click(INSIDE, Modifiers::none());
        cx.simulate_click(INSIDE, Modifiers::none());
        assert_eq!(presses.count(), 0);
    }

    #[gpui::test]
    fn test_click_ignored_while_loading(cx: &mut TestAppContext) {
        let presses = PressCounter::default();
        let mut loading = mount_button(cx, &presses, |button| button.loading(true));
        let mut both = mount_button(cx, &presses, |button| button.disabled(true).loading(true));

        loading.simulate_click(INSIDE, Modifiers::none());
        both.simulate_click(INSIDE, Modifiers::none());
        assert_eq!(presses.count(), 0);
    }

    #[gpui::test]
    fn test_direct_press_respects_state(cx: &mut TestAppContext) {
        let presses = PressCounter::default();
        let enabled = Button::new("button", "Continue", presses.handler());
        let loading = Button::new("button", "Continue", presses.handler()).loading(true);
        let cx = cx.add_empty_window();

        assert!(cx.update(|window, cx| enabled.press(window, cx)));
        assert!(!cx.update(|window, cx| loading.press(window, cx)));
        assert_eq!(presses.count(), 1);
    }
}
