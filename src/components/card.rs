use std::rc::Rc;

use gpui::{
    AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use smallvec::SmallVec;

use crate::{
    extensions::press::{PressBehavior, PressBehaviorExt, PressHandler, Pressable},
    style::{Padding, ViewStyle},
    theme::{ColorKind, RadiusKind, SpacingKind, Theme, ThemeExt, ThemeShadow},
    utils::rgb_a,
};

const PRESSED_OPACITY: f32 = 0.95;
const ELEVATION: f32 = 4.;

/// A surface that groups related content.
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    children: SmallVec<[AnyElement; 2]>,
    variant: CardVariant,
    on_press: Option<PressHandler>,
    press_behavior: PressBehavior,
    style: ViewStyle,
}

impl Card {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            children: SmallVec::new(),
            variant: CardVariant::default(),
            on_press: None,
            press_behavior: PressBehavior::default(),
            style: ViewStyle::default(),
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Makes the whole card tappable.
    pub fn on_press(mut self, on_press: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    pub fn style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn container_style(&self, theme: &Theme) -> ViewStyle {
        let spacing = SpacingKind::Md.resolve(theme);

        ViewStyle::new()
            .rounded(RadiusKind::Lg.resolve(theme))
            .padding(Padding::all(spacing))
            .overlay(&self.variant.style(theme))
            .overlay(&self.style)
    }
}

impl Pressable for Card {
    fn press_handler(&self) -> Option<&PressHandler> {
        self.on_press.as_ref()
    }
}

impl PressBehaviorExt for Card {
    fn press_behavior_mut(&mut self) -> &mut PressBehavior {
        &mut self.press_behavior
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(mut self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let style = self.container_style(cx.get_theme());
        let children = std::mem::take(&mut self.children);

        if !self.is_interactive() {
            return style.apply(div()).children(children).into_any_element();
        }

        let id = self.id.clone();
        let this = Rc::new(self);

        style
            .apply(div().id(id))
            .children(children)
            .cursor_pointer()
            .active(|style| style.opacity(PRESSED_OPACITY))
            .on_click(move |_event, window, cx| {
                this.press_behavior.apply(cx);
                this.press(window, cx);
            })
            .into_any_element()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

impl CardVariant {
    pub fn style(&self, theme: &Theme) -> ViewStyle {
        let surface = ViewStyle::new().bg(ColorKind::Surface.resolve(theme));

        match self {
            CardVariant::Default => surface,
            CardVariant::Outlined => surface.border(px(1.), ColorKind::Border.resolve(theme)),
            CardVariant::Elevated => surface.shadow(
                ThemeShadow {
                    offset_x: px(0.),
                    offset_y: px(4.),
                    blur_radius: px(12.),
                    spread_radius: px(0.),
                    color: rgb_a(0x000000, 0.1),
                },
                ELEVATION,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK_THEME, THEME};

    #[test]
    fn test_card_base_style() {
        let style = Card::new("card").container_style(&THEME);

        assert_eq!(style.corner_radius, Some(px(14.)));
        assert_eq!(style.padding, Some(Padding::all(px(16.))));
        assert_eq!(style.background, Some(THEME.colors.surface));
        assert_eq!(style.border_width, None);
        assert_eq!(style.shadow, None);
    }

    #[test]
    fn test_outlined_card_has_hairline_border() {
        let style = Card::new("card")
            .variant(CardVariant::Outlined)
            .container_style(&THEME);

        assert_eq!(style.border_width, Some(px(1.)));
        assert_eq!(style.border_color, Some(THEME.colors.border));
        assert_eq!(style.background, Some(THEME.colors.surface));
    }

    #[test]
    fn test_elevated_card_shadow() {
        let style = Card::new("card")
            .variant(CardVariant::Elevated)
            .container_style(&THEME);

        let shadow = style.shadow.expect("elevated cards have a shadow");
        assert_eq!(shadow.offset_x, px(0.));
        assert_eq!(shadow.offset_y, px(4.));
        assert_eq!(shadow.blur_radius, px(12.));
        assert_eq!(shadow.color, rgb_a(0x000000, 0.1));
        assert_eq!(style.elevation, Some(4.));
    }

    #[test]
    fn test_press_does_not_change_appearance() {
        let plain = Card::new("card").variant(CardVariant::Outlined);
        let pressable = Card::new("card")
            .variant(CardVariant::Outlined)
            .on_press(|_, _| {});

        assert!(!plain.is_interactive());
        assert!(pressable.is_interactive());
        assert_eq!(
            plain.container_style(&THEME),
            pressable.container_style(&THEME)
        );
    }

    #[test]
    fn test_caller_style_wins() {
        let style = Card::new("card")
            .style(ViewStyle::new().padding(Padding::all(px(0.))))
            .container_style(&DARK_THEME);

        assert_eq!(style.padding, Some(Padding::all(px(0.))));
        assert_eq!(style.background, Some(DARK_THEME.colors.surface));
    }
}
