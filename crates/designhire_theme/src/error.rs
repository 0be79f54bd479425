use thiserror::Error;

/// Errors produced while loading a token file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme tokens: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color \"{0}\"")]
    InvalidColor(String),

    #[error("invalid length \"{0}\", expected a number optionally ending with 'px'")]
    InvalidLength(String),

    #[error("invalid duration \"{0}\", expected a number ending with 'ms' or 's'")]
    InvalidDuration(String),

    #[error("invalid easing \"{0}\", expected cubic-bezier(x1, y1, x2, y2)")]
    InvalidEasing(String),

    #[error("invalid shadow \"{0}\"")]
    InvalidShadow(String),
}
