use thiserror::Error;

/// Errors that can occur while decoding a path string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
    #[error("path is empty")]
    Empty,

    #[error("path must start with a move command, found `{0}`")]
    MissingMove(String),

    /// A second move command; a path holds a single stroke
    #[error("unexpected move command at position {index}")]
    UnexpectedMove { index: usize },

    #[error("unknown path command `{0}`")]
    UnknownCommand(String),

    #[error("invalid coordinate pair `{0}`")]
    InvalidCoordinate(String),
}

/// Errors raised when decoding pen settings that aren't on offer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PenParseError {
    #[error("`{0}` is not a palette color")]
    UnknownColor(String),

    #[error("{0}px is not an offered stroke width")]
    UnsupportedWidth(u32),
}

/// Errors reported when loading or validating a `CanvasConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("canvas height fraction must be in (0, 1], got {0}")]
    InvalidHeightFraction(f32),

    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,
}
