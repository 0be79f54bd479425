use gpui::App;

use crate::{DARK_THEME, THEME, Theme};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        let theme = theme.as_ref();
        tracing::debug!(
            "installing theme, background {:?}, primary {:?}",
            theme.colors.bg,
            theme.colors.primary
        );
        self.set_global::<Theme>(theme.clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

/// Which built-in palette an app wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn theme(self) -> &'static Theme {
        match self {
            Appearance::Light => &*THEME,
            Appearance::Dark => &*DARK_THEME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_selects_builtin_theme() {
        assert_eq!(Appearance::default(), Appearance::Light);
        assert_eq!(Appearance::Light.theme().colors, THEME.colors);
        assert_eq!(Appearance::Dark.theme().colors, DARK_THEME.colors);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(&THEME);
            assert_eq!(cx.get_theme(), &*THEME);

            cx.set_theme(Appearance::Dark.theme());
            assert_eq!(cx.get_theme().colors, DARK_THEME.colors);
            assert_eq!(cx.get_theme().spacing, THEME.spacing);
        });
    }
}
