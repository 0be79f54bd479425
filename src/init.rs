use gpui::{App, Window};

use crate::theme::{THEME, Theme, ThemeExt};

/// Installs the light theme unless the app already picked one.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        tracing::debug!("no theme installed, falling back to the light theme");
        cx.set_theme(&*THEME);
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().typography.font_size.base);
}
