use std::time::Duration;

use gpui::{
    Animation, AnimationExt, App, ElementId, IntoElement, Pixels, RenderOnce, Rgba, Styled,
    Transformation, Window, percentage, px, svg,
};

use crate::DesignHireIconKind;

/// An indeterminate activity indicator.
#[derive(IntoElement)]
pub struct Spinner {
    id: ElementId,
    color: Rgba,
    size: Pixels,
}

impl Spinner {
    pub fn new(id: impl Into<ElementId>, color: impl Into<Rgba>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            size: px(20.),
        }
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(&self) -> Rgba {
        self.color
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        svg()
            .path(DesignHireIconKind::Spinner.path())
            .size(self.size)
            .flex_none()
            .text_color(self.color)
            .with_animation(
                self.id,
                Animation::new(Duration::from_secs(1)).repeat(),
                |svg, delta| svg.with_transformation(Transformation::rotate(percentage(delta))),
            )
    }
}
