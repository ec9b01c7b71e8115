//! Error handling module for the lexc driver.
//!
//! Lexical problems in the scanned file are diagnostics, not errors. The
//! types here cover everything around the scan that can fail: reading the
//! source, loading configuration, installing the logger and writing output.

use lexc_util::SourceError;
use thiserror::Error;

/// Main error type for the lexc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source file could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
