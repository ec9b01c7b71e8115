//! lexc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small set of types shared by every lexc phase:
//!
//! - [`span`] - source positions, spans, and loaded source files
//! - [`diagnostic`] - positioned diagnostics, codes, and the [`Handler`]
//!   that collects them
//! - [`error`] - `thiserror` error enums for the fallible, non-lexical
//!   operations (reading source files from disk)
//!
//! DIAGNOSTICS VS ERRORS:
//! ----------------------
//! Malformed input is never a Rust error. A phase that meets bad input
//! records a [`Diagnostic`] in its [`Handler`] and keeps going; the caller
//! inspects the handler afterwards. Only environmental failures (a file
//! that cannot be read, a file that is not UTF-8) surface as `Result::Err`.
//!
//! ```
//! use lexc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unexpected '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::point(1, 1))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[1:1] unexpected '$'");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceFile, Span};

// Re-export commonly used types
pub use rustc_hash::FxBuildHasher;
