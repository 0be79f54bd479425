//! Themed presentational components for gpui: text, buttons, cards, tags and
//! progress bars, all styled from one set of design tokens.

pub mod components;

pub mod extensions;

pub mod style;

pub mod theme;

mod utils;
pub use utils::{ElementIdExt, RgbaExt, rgb_a};

mod assets;
pub use assets::*;

mod init;
pub use init::*;

pub use components::{
    Button, Card, ErrorText, FilterTag, Heading, MutedText, ProfileProgressBar, ProgressBar,
    SkillTag, SuccessText, Tag, Text,
};
pub use theme::{DARK_THEME, THEME};
