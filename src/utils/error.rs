use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Invalid ISBN-13 '{value}': {reason}")]
    InvalidIsbn { value: String, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Source '{source_name}' failed: {message}")]
    SourceError {
        source_name: String,
        message: String,
    },
}

impl ResolverError {
    /// True for failures that may succeed if the whole resolution is retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::SourceError { .. })
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
