use std::path::PathBuf;
use thiserror::Error;

/// Common error type for Modelhost with clear taxonomy
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup errors
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// A matched settings document could not be decoded. Carries the
    /// offending path so the operator knows exactly which file is broken.
    #[error("Invalid model settings at {}: {}", .path.display(), .source)]
    InvalidModelSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO and serialization errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic anyhow error for flexibility
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Get error type for metrics/logging
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::ModelNotFound(_) => "model_not_found",
            Error::InvalidModelSettings { .. } => "invalid_model_settings",
            Error::ConfigError(_) => "config_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::Anyhow(_) => "unknown",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
