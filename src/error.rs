use thiserror::Error;

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by symbol lookups and benchmark configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup that takes exactly one symbol was handed something else.
    #[error("expected exactly one symbol, got {units} in {input:?}")]
    NotASingleSymbol { input: String, units: usize },

    #[error("invalid benchmark config: {0}")]
    Config(String),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
