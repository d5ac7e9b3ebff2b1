use thiserror::Error;

/// Top-level error type for the Aura agent platform.
///
/// Subsystem crates define their own error types and convert into
/// `AuraError` where a failure has to cross a crate boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for AuraError {
    fn from(err: toml::de::Error) -> Self {
        AuraError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AuraError {
    fn from(err: toml::ser::Error) -> Self {
        AuraError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AuraError {
    fn from(err: serde_json::Error) -> Self {
        AuraError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Aura operations.
pub type Result<T> = std::result::Result<T, AuraError>;
