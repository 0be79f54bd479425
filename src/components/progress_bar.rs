use gpui::{App, IntoElement, ParentElement, Pixels, RenderOnce, Rgba, Window, div, px};

use crate::{
    style::{Extent, ViewStyle, WidthTransition},
    theme::{ColorKind, DurationKind, EasingKind, RadiusKind, Theme, ThemeExt},
};

const DEFAULT_HEIGHT: f32 = 8.;
const PROFILE_HEIGHT: f32 = 6.;

/// A horizontal bar filled to `progress` percent.
#[derive(IntoElement)]
pub struct ProgressBar {
    progress: f32,
    height: Pixels,
    color: Option<Rgba>,
    background_color: Option<Rgba>,
    style: ViewStyle,
}

impl ProgressBar {
    /// `progress` is a percentage. Anything outside `0..=100` is clamped.
    pub fn new(progress: f32) -> Self {
        Self {
            progress,
            height: px(DEFAULT_HEIGHT),
            color: None,
            background_color: None,
            style: ViewStyle::default(),
        }
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into();
        self
    }

    /// Fill color. Defaults to the primary color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Track color. Defaults to the background color.
    pub fn background_color(mut self, color: impl Into<Rgba>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Caller overrides for the track.
    pub fn style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn clamped_progress(&self) -> f32 {
        if self.progress.is_nan() {
            return 0.;
        }

        self.progress.clamp(0., 100.)
    }

    pub fn track_style(&self, theme: &Theme) -> ViewStyle {
        ViewStyle::new()
            .height(Extent::Px(self.height))
            .bg(self.background_color.unwrap_or_else(|| ColorKind::Bg.resolve(theme)))
            .rounded(RadiusKind::Full.resolve(theme))
            .clip_overflow()
            .overlay(&self.style)
    }

    pub fn fill_style(&self, theme: &Theme) -> ViewStyle {
        ViewStyle::new()
            .width(Extent::Percent(self.clamped_progress()))
            .height(Extent::FULL)
            .bg(self.color.unwrap_or_else(|| ColorKind::Primary.resolve(theme)))
            .rounded(RadiusKind::Full.resolve(theme))
            .width_transition(WidthTransition {
                duration: DurationKind::Normal.resolve(theme),
                easing: EasingKind::Linear.resolve(theme),
            })
    }
}

impl RenderOnce for ProgressBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.get_theme();

        self.track_style(theme)
            .apply(div())
            .child(self.fill_style(theme).apply(div()))
    }
}

/// The slim bar shown on profile headers. Only `progress` is configurable.
#[derive(IntoElement)]
pub struct ProfileProgressBar {
    progress: f32,
}

impl ProfileProgressBar {
    pub fn new(progress: f32) -> Self {
        Self { progress }
    }

    pub fn progress_bar(&self) -> ProgressBar {
        ProgressBar::new(self.progress).height(px(PROFILE_HEIGHT))
    }
}

impl RenderOnce for ProfileProgressBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        self.progress_bar()
    }
}
