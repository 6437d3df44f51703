//! Error types for configuration and recordings.

use thiserror::Error;

/// Errors raised at the I/O edges of a measurement session.
#[derive(Error, Debug)]
pub enum MeasureError {
    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration could not be written as TOML.
    #[error("TOML serialization failed: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A recording could not be parsed or written.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for measurement session operations.
pub type Result<T> = std::result::Result<T, MeasureError>;
