//! Design tokens for the DesignHire component set.
//!
//! Two built-in themes are provided, [`THEME`] and [`DARK_THEME`]. They share every
//! scale except `colors`, which the dark variant swaps for its own palette.

mod schema;
pub use schema::*;

mod error;
pub use error::*;

mod parse;
pub use parse::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
