mod assets;
pub use assets::*;

mod designhire_assets;
pub use designhire_assets::*;
