//! Design tokens shared by every component.
//!
//! [`THEME`] and [`DARK_THEME`] differ only in their colors. Which one is
//! active is up to the app, through [`ThemeExt::set_theme`] or [`Appearance`].

pub use designhire_theme::*;
