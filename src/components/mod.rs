mod text;
pub use text::*;

mod button;
pub use button::*;

mod card;
pub use card::*;

mod tag;
pub use tag::*;

mod progress_bar;
pub use progress_bar::*;

mod spinner;
pub use spinner::*;

#[cfg(all(test, feature = "test-support"))]
mod window_harness;
