use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, e.g. `"save"` becomes `"save:spinner"`.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::Name(format!("{self}:{}", suffix.into()).into())
    }
}
