use gpui::{App, Window};

/// A zero-argument press callback.
pub type PressHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Settings that control how a delivered press propagates.
///
/// By default, press handlers call `cx.stop_propagation()` so a [`Button`] inside a
/// pressable [`Card`] does not press the card too.
///
/// [`Button`]: crate::components::Button
/// [`Card`]: crate::components::Card
#[derive(Clone, Copy, Default)]
pub struct PressBehavior {
    /// If true, `cx.stop_propagation()` will NOT be called.
    pub allow_propagation: bool,
}

impl PressBehavior {
    pub fn apply(&self, cx: &mut App) {
        if !self.allow_propagation {
            cx.stop_propagation();
        }
    }
}

/// Components that forward a press to a caller-supplied handler.
///
/// Mouse clicks and touch-end events are both normalized to [`Pressable::press`].
/// The component never queues, debounces or retries presses.
pub trait Pressable {
    fn press_handler(&self) -> Option<&PressHandler>;

    /// Whether a press would currently reach the handler.
    fn is_interactive(&self) -> bool {
        self.press_handler().is_some()
    }

    /// Delivers one press. Returns `false` when the press was swallowed.
    fn press(&self, window: &mut Window, cx: &mut App) -> bool {
        if !self.is_interactive() {
            tracing::trace!("press ignored by non-interactive component");
            return false;
        }

        match self.press_handler() {
            Some(handler) => {
                (handler)(window, cx);
                true
            }
            None => false,
        }
    }
}

/// Components whose press propagation can be configured.
pub trait PressBehaviorExt: Sized {
    fn press_behavior_mut(&mut self) -> &mut PressBehavior;

    /// Lets the press bubble up to parent handlers.
    fn allow_press_propagation(mut self) -> Self {
        self.press_behavior_mut().allow_propagation = true;
        self
    }
}
