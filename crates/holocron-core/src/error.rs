use thiserror::Error;

/// Top-level error type for Holocron.
#[derive(Debug, Error)]
pub enum HolocronError {
    /// Catalog data could not be read or mapped.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// External translation failed (network, quota, timeout).
    #[error("translation error: {0}")]
    Translation(String),

    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Session storage error.
    #[error("memory error: {0}")]
    Memory(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
