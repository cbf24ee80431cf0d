use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Faults inside the parse/render pipeline.
///
/// These never reach callers of [`crate::transform`]; the boundary turns them
/// into a diagnostic string that carries the original message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("stake total overflowed after {bookmaker}")]
    StakeOverflow { bookmaker: String },

    #[error("stake percentage overflowed for {bookmaker}")]
    PercentOverflow { bookmaker: String },

    #[error("failed to render notification")]
    Render(#[from] std::fmt::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("input is not a surebet notification")]
    NotSurebet,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
