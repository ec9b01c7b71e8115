//! Core error types for lexc-util crate
//!
//! This module defines error types used throughout the util crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading source files
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8
    #[error("File is not valid UTF-8: {path} (invalid byte at offset {offset})")]
    InvalidUtf8 {
        /// Path that was being read
        path: PathBuf,
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_display() {
        let err = SourceError::InvalidUtf8 {
            path: PathBuf::from("main.lx"),
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "File is not valid UTF-8: main.lx (invalid byte at offset 7)"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let err = SourceError::Io {
            path: PathBuf::from("missing.lx"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Failed to read missing.lx"));
        assert!(err.source().is_some());
    }
}
