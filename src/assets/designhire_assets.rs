#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::AssetProvider;

        /// Icons bundled with the component library.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct DesignHireAssets;

        impl AssetProvider for DesignHireAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(DesignHireAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

/// Icons the components draw themselves.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum DesignHireIconKind {
    /// Shown by a loading [`Button`](crate::components::Button).
    #[assoc(path = "icons/spinner.svg".into())]
    Spinner,
}

impl From<DesignHireIconKind> for SharedString {
    fn from(kind: DesignHireIconKind) -> Self {
        kind.path()
    }
}
