use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// Chains several [`AssetProvider`]s into one gpui [`AssetSource`].
///
/// Providers are asked in order and the first hit wins, so an app can shadow
/// the bundled icons by listing its own provider first.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

/// Builds an [`Assets`] from providers, e.g. `assets![DesignHireAssets, AppAssets]`.
#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        if let Some(asset) = self.providers.iter().find_map(|provider| provider.get(path)) {
            return Ok(Some(asset));
        }

        tracing::warn!(path, "asset not found in any provider");
        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut listed = Vec::new();

        for provider in &self.providers {
            listed.extend(provider.list(path)?);
        }

        Ok(listed)
    }
}

pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static [u8]);

    impl AssetProvider for Fixed {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            (path == self.0).then(|| Cow::Borrowed(self.1))
        }

        fn list(&self, path: &str) -> Result<Vec<SharedString>> {
            Ok(self
                .0
                .starts_with(path)
                .then(|| self.0.into())
                .into_iter()
                .collect())
        }
    }

    #[test]
    fn test_first_provider_wins() {
        let assets = Assets::new([
            Box::new(Fixed("icons/spinner.svg", b"app")) as Box<dyn AssetProvider>,
            Box::new(Fixed("icons/spinner.svg", b"bundled")),
        ]);

        let loaded = assets.load("icons/spinner.svg").unwrap();
        assert_eq!(loaded.as_deref(), Some(&b"app"[..]));
    }

    #[test]
    fn test_missing_and_empty_paths() {
        let assets = Assets::new([Box::new(Fixed("icons/spinner.svg", b"svg"))
            as Box<dyn AssetProvider>]);

        assert!(assets.load("").unwrap().is_none());
        assert!(assets.load("icons/missing.svg").is_err());
    }

    #[test]
    fn test_list_merges_providers() {
        let assets = Assets::new([
            Box::new(Fixed("icons/a.svg", b"")) as Box<dyn AssetProvider>,
            Box::new(Fixed("icons/b.svg", b"")),
            Box::new(Fixed("fonts/c.ttf", b"")),
        ]);

        let listed = assets.list("icons/").unwrap();
        assert_eq!(listed.len(), 2);
    }
}
