use thiserror::Error;

/// Top-level error type for localesync.
#[derive(Debug, Error)]
pub enum LocaleSyncError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A single translation attempt failed.
    #[error("translation error: {0}")]
    Translation(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
