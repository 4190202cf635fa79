//! Error types for start-up and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the render loop.
#[derive(Debug, Error)]
pub enum GuideError {
    /// Settings could not be loaded or deserialised.
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting has a value outside its allowed range.
    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// The log file could not be opened.
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    /// Writing the fixture export failed.
    #[error("Failed to export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the terminal clipboard failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(#[from] std::io::Error),

    /// Serialising the fixtures failed.
    #[error("Serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;
