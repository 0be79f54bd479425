//! Mounts a component in a test window so clicks go through its rendered listeners.

use std::{cell::Cell, rc::Rc};

use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Pixels, Point, Render, Styled,
    TestAppContext, VisualTestContext, Window, div, point, px,
};

use crate::style::{Extent, ViewStyle};

/// A point inside any component sized with [`fixed_size`].
pub(crate) const INSIDE: Point<Pixels> = point(px(20.), px(20.));

/// A point outside any component sized with [`fixed_size`].
pub(crate) const OUTSIDE: Point<Pixels> = point(px(600.), px(400.));

/// Pins a component to a known box at the window's origin.
pub(crate) fn fixed_size() -> ViewStyle {
    ViewStyle::new()
        .width(Extent::Px(px(200.)))
        .height(Extent::Px(px(80.)))
}

#[derive(Clone, Default)]
pub(crate) struct PressCounter(Rc<Cell<usize>>);

impl PressCounter {
    pub(crate) fn handler(&self) -> impl Fn(&mut Window, &mut App) + 'static {
        let count = self.0.clone();
        move |_, _| count.set(count.get() + 1)
    }

    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

struct ComponentView {
    build: Box<dyn Fn() -> AnyElement>,
}

impl Render for ComponentView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().child((self.build)())
    }
}

/// Opens a window whose only content is `build()`, rebuilt on every frame.
pub(crate) fn mount<E: IntoElement + 'static>(
    cx: &mut TestAppContext,
    build: impl Fn() -> E + 'static,
) -> VisualTestContext {
    cx.update(crate::init);

    let window = cx.add_window(move |_window, _cx| ComponentView {
        build: Box::new(move || build().into_any_element()),
    });

    let cx = VisualTestContext::from_window(window.into(), cx);
    cx.run_until_parked();
    cx
}
