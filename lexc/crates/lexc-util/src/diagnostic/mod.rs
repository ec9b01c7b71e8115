//! Diagnostic module - Error reporting infrastructure.
//!
//! Lexical diagnostics are non-fatal and all of equal severity: each one
//! is an error message pinned to the position where the offending character
//! was read. Phases push them into a [`Handler`]; callers inspect the
//! handler once the phase is done.
//!
//! # Examples
//!
//! ```
//! use lexc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use lexc_util::span::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unexpected '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::point(2, 7))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(handler.messages(), vec!["[2:7] unexpected '@'".to_string()]);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::fmt;

/// A diagnostic message with its location
///
/// The [`Display`](fmt::Display) form is `[<line>:<column>] <message>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic with the offending source line underneath.
    ///
    /// Falls back to the one-line form when the span's line is not in
    /// `file`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use lexc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.lx", "x = $;");
    /// let diag = Diagnostic::error("unexpected '$'", Span::new(4, 5, 1, 5))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    ///
    /// let rendered = diag.render(&file);
    /// assert!(rendered.starts_with("error[E1001]: unexpected '$'"));
    /// assert!(rendered.contains("--> main.lx:1:5"));
    /// assert!(rendered.contains("x = $;"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("error[{}]: {}\n", code, self.message),
            None => format!("error: {}\n", self.message),
        };
        out.push_str(&format!(" --> {}:{}\n", file.name(), self.span));

        if let Some(line) = file.line_at(self.span.line as usize) {
            let column = self.span.column as usize;
            let width = self.caret_width(file, line);
            let snippet = SourceSnippet::new(line, self.span.line as usize, column, column + width, None::<String>);
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }

    /// Number of carets under `line`: the span's characters up to the end
    /// of that line, at least one.
    fn caret_width(&self, file: &SourceFile, line: &str) -> usize {
        let rest = line
            .chars()
            .count()
            .saturating_sub((self.span.column as usize).saturating_sub(1));
        let spanned = file
            .content()
            .get(self.span.start..self.span.end)
            .map_or(0, |text| text.chars().take_while(|&c| c != '\n').count());
        spanned.min(rest).max(1)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.span.line, self.span.column, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// The handler is owned by the phase that reports into it. Diagnostics are
/// kept in the order they were emitted.
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the `[line:column] message` rendering of every diagnostic
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unexpected '$'", Span::point(3, 9));
        assert_eq!(diag.to_string(), "[3:9] unexpected '$'");
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_INVALID_NUMBER);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_NUMBER));
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_help("help 1")
            .with_help("help 2");
        assert_eq!(diag.helps, vec!["help 1", "help 2"]);
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.messages().is_empty());
    }

    #[test]
    fn test_handler_keeps_emission_order() {
        let mut handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("first", Span::point(1, 1)));
        handler.emit_diagnostic(Diagnostic::error("second", Span::point(1, 2)));

        assert_eq!(handler.messages(), vec!["[1:1] first", "[1:2] second"]);
        assert_eq!(handler.into_diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_build_error() {
        let mut handler = Handler::new();
        handler
            .build_error(Span::point(4, 2), "unterminated string literal")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .emit(&mut handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
        assert_eq!(diags[0].to_string(), "[4:2] unterminated string literal");
    }

    #[test]
    fn test_render_with_snippet_and_help() {
        let file = SourceFile::new("calc.lx", "a = 3.x\n");
        let diag = Diagnostic::error("unexpected 'x'", Span::new(6, 7, 1, 7))
            .with_code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .with_help("a digit is required after the decimal point");

        let rendered = diag.render(&file);
        assert!(rendered.starts_with("error[E1003]: unexpected 'x'\n --> calc.lx:1:7\n"));
        assert!(rendered.contains("  1 | a = 3.x\n"));
        assert!(rendered.contains("|       ^"));
        assert!(rendered.ends_with("  = help: a digit is required after the decimal point\n"));
    }

    #[test]
    fn test_render_counts_carets_in_chars() {
        let file = SourceFile::new("utf8.lx", "x = é;\n");
        let diag = Diagnostic::error("unexpected 'é'", Span::new(4, 6, 1, 5));
        let rendered = diag.render(&file);
        assert!(rendered.contains("  1 | x = é;\n    |     ^\n"));
    }

    #[test]
    fn test_render_stops_carets_at_line_end() {
        let file = SourceFile::new("open.lx", "s = \"open\nmore");
        let diag = Diagnostic::error("unterminated string literal", Span::new(4, 14, 1, 5))
            .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING);
        let rendered = diag.render(&file);
        assert!(rendered.ends_with("  1 | s = \"open\n    |     ^^^^^\n"));
    }

    #[test]
    fn test_render_without_source_line() {
        let file = SourceFile::new("empty.lx", "");
        let diag = Diagnostic::error("unexpected end of input", Span::point(9, 1));
        assert_eq!(
            diag.render(&file),
            "error: unexpected end of input\n --> empty.lx:9:1\n"
        );
    }
}
